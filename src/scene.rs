use crate::geometry::Sphere;
use crate::math::Vec3;

pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_HEIGHT: usize = 500;
pub const BACKGROUND: Vec3 = Vec3::new(16.0, 16.0, 16.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub background: Vec3,
    /// only `origin` matters for shading
    pub light: Sphere,
    /// Draw order. Every primitive hit by a ray overwrites the pixel, so the last one wins
    /// regardless of depth.
    pub primitives: Vec<Sphere>,
}

impl Scene {
    pub fn new(
        width: usize,
        height: usize,
        background: Vec3,
        light: Sphere,
        primitives: Vec<Sphere>,
    ) -> Scene {
        Scene {
            width,
            height,
            background,
            light,
            primitives,
        }
    }

    /// Three spheres laid out relative to the image size, lit from the upper right.
    pub fn reference(width: usize, height: usize) -> Scene {
        let (w, h) = (width as f64, height as f64);
        let light = Sphere::new(Vec3::new(1000.0, -1000.0, 0.0), 100.0, Vec3::ZERO);

        let purple = Vec3::new(160.0, 32.0, 240.0);
        let red = Vec3::new(255.0, 0.0, 0.0);
        let blue = Vec3::new(0.0, 0.0, 255.0);

        let big = Sphere::new(Vec3::new(w * 0.5, h * 0.5, 50.0), 125.0, purple);
        let lower_right = Sphere::new(Vec3::new(w * 0.75, h * 0.75, 50.0), 75.0, red);
        let upper_left = Sphere::new(Vec3::new(w * 0.25, h * 0.25, 10.0), 75.0, blue);

        Scene::new(
            width,
            height,
            BACKGROUND,
            light,
            vec![upper_left, lower_right, big],
        )
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Scene>() + self.primitives.capacity() * std::mem::size_of::<Sphere>()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::reference(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reference_scene_layout() {
        let scene = Scene::default();
        assert_eq!((scene.width, scene.height), (500, 500));
        assert_eq!(scene.pixel_count(), 250000);
        assert_eq!(scene.primitives.len(), 3);
        // the large purple sphere is drawn last
        let last = scene.primitives.last().unwrap();
        assert_eq!(last.origin, Vec3::new(250.0, 250.0, 50.0));
        assert_eq!(last.radius, 125.0);
        assert_eq!(scene.primitives[0].origin, Vec3::new(125.0, 125.0, 10.0));
        assert_eq!(scene.primitives[1].origin, Vec3::new(375.0, 375.0, 50.0));
    }
}
