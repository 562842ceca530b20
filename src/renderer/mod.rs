use std::io::{self, Stderr};

use pbr::ProgressBar;

use crate::geometry::Primitive;
use crate::math::{to_rgb8, Ray, Rgb8, Vec3};
use crate::output::PixelSink;
use crate::profile::Profile;
use crate::scene::Scene;
use crate::shading::draw_pixel;

mod parallel;
mod streaming;

pub use parallel::{ParallelRenderer, DEFAULT_BAND_ROWS};
pub use streaming::StreamingRenderer;

pub trait Renderer {
    /// Emits `scene.width * scene.height` pixels to `sink`, row-major, top row first.
    fn render(&self, scene: &Scene, sink: &mut dyn PixelSink) -> io::Result<Profile>;
}

/// Orthographic: one ray per pixel, starting on the z = 0 plane and looking down +z.
pub fn camera_ray(x: usize, y: usize) -> Ray {
    Ray::new(Vec3::new(x as f64, y as f64, 0.0), Vec3::Z)
}

/// Shades a single pixel.
///
/// Primitives are tested in draw order and every hit overwrites the color so far, there is no
/// depth test.
pub fn trace_pixel(scene: &Scene, x: usize, y: usize, profile: &mut Profile) -> Rgb8 {
    let ray = camera_ray(x, y);
    let mut color = scene.background;
    let mut hits = 0;
    for primitive in scene.primitives.iter() {
        if primitive.intersects(ray) {
            color = draw_pixel(primitive, ray, &scene.light);
            hits += 1;
        }
    }

    profile.camera_rays += 1;
    profile.primitive_hits += hits;
    match hits {
        0 => profile.background_pixels += 1,
        1 => {}
        _ => profile.overdrawn_pixels += 1,
    }
    to_rgb8(color)
}

fn row_progress_bar(scene: &Scene, silenced: bool) -> Option<ProgressBar<Stderr>> {
    if silenced {
        return None;
    }
    let mut pb = ProgressBar::on(io::stderr(), scene.height as u64);
    pb.message("rows ");
    Some(pb)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;
    use crate::output::PpmWriter;

    fn render_to_string<R: Renderer>(renderer: &R, scene: &Scene) -> (String, Profile) {
        let mut writer = PpmWriter::new(Vec::new());
        let profile = renderer.render(scene, &mut writer).unwrap();
        let bytes = writer.into_inner().unwrap();
        (String::from_utf8(bytes).unwrap(), profile)
    }

    fn parse_pixel(line: &str) -> Rgb8 {
        let values: Vec<u8> = line
            .split(' ')
            .map(|e| e.parse::<u8>().expect("channel should fit in a byte"))
            .collect();
        assert_eq!(values.len(), 3, "{:?}", line);
        [values[0], values[1], values[2]]
    }

    #[test]
    fn test_reference_scene_end_to_end() {
        let scene = Scene::reference(500, 500);
        let (ppm, profile) = render_to_string(&StreamingRenderer::new(true), &scene);

        assert!(ppm.starts_with("P3\n500 500 255\n"));
        let pixels: Vec<Rgb8> = ppm.lines().skip(2).map(parse_pixel).collect();
        assert_eq!(pixels.len(), 250000);
        assert_eq!(profile.camera_rays, 250000);

        let center = pixels[250 * 500 + 250];
        assert_ne!(center, [16, 16, 16]);
        assert_eq!(center, [66, 2, 106]);
        // top left corner is empty space
        assert_eq!(pixels[0], [16, 16, 16]);
    }

    #[test]
    fn test_later_primitive_wins_regardless_of_depth() {
        let light = Sphere::new(Vec3::new(1000.0, -1000.0, 0.0), 100.0, Vec3::ZERO);
        let near = Sphere::new(Vec3::new(10.0, 10.0, 20.0), 8.0, Vec3::new(0.0, 255.0, 0.0));
        let far = Sphere::new(Vec3::new(14.0, 10.0, 200.0), 8.0, Vec3::new(255.0, 0.0, 0.0));
        let scene = Scene::new(24, 20, Vec3::from(16.0), light, vec![near, far]);

        let mut profile = Profile::default();
        let mut overlapping = 0;
        for y in 0..scene.height {
            for x in 0..scene.width {
                let ray = camera_ray(x, y);
                if near.intersects(ray) && far.intersects(ray) {
                    overlapping += 1;
                    let expected = to_rgb8(draw_pixel(&far, ray, &light));
                    assert_eq!(trace_pixel(&scene, x, y, &mut profile), expected);
                }
            }
        }
        assert!(overlapping > 0);
        assert_eq!(profile.overdrawn_pixels, overlapping);

        // swapping the draw order flips the winner
        let swapped = Scene::new(24, 20, Vec3::from(16.0), light, vec![far, near]);
        let ray = camera_ray(12, 10);
        assert_eq!(
            trace_pixel(&swapped, 12, 10, &mut Profile::default()),
            to_rgb8(draw_pixel(&near, ray, &light))
        );
    }

    #[test]
    fn test_parallel_matches_streaming() {
        let scene = Scene::reference(120, 90);
        let (streamed, streamed_profile) =
            render_to_string(&StreamingRenderer::new(true), &scene);
        for band_rows in [1, 7, 32, 1000] {
            let (parallel, parallel_profile) =
                render_to_string(&ParallelRenderer::new(band_rows, true), &scene);
            assert!(streamed == parallel, "band_rows = {}", band_rows);
            assert_eq!(streamed_profile, parallel_profile);
        }
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let light = Sphere::new(Vec3::ZERO, 1.0, Vec3::ZERO);
        let scene = Scene::new(3, 2, Vec3::new(1.9, 2.5, 200.0), light, Vec::new());
        let (ppm, profile) = render_to_string(&StreamingRenderer::new(true), &scene);
        assert_eq!(ppm, "P3\n3 2 255\n1 2 200\n1 2 200\n1 2 200\n1 2 200\n1 2 200\n1 2 200\n");
        assert_eq!(profile.background_pixels, 6);
    }
}
