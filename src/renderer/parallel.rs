use std::io;
use std::time::Instant;

use rayon::prelude::*;

use super::{row_progress_bar, trace_pixel, Renderer};
use crate::math::Rgb8;
use crate::output::PixelSink;
use crate::profile::Profile;
use crate::scene::Scene;

pub const DEFAULT_BAND_ROWS: usize = 32;

/// Shades `band_rows` rows at a time on the rayon pool, then hands the band to the sink in order
/// before starting the next one. Output is identical to `StreamingRenderer`.
pub struct ParallelRenderer {
    pub band_rows: usize,
    pub silenced: bool,
}

impl ParallelRenderer {
    pub fn new(band_rows: usize, silenced: bool) -> ParallelRenderer {
        ParallelRenderer {
            band_rows: band_rows.max(1),
            silenced,
        }
    }
}

impl Renderer for ParallelRenderer {
    fn render(&self, scene: &Scene, sink: &mut dyn PixelSink) -> io::Result<Profile> {
        let (width, height) = (scene.width, scene.height);
        info!(
            "starting parallel render with resolution {}x{}, {} rows per band on {} threads",
            width,
            height,
            self.band_rows,
            rayon::current_num_threads()
        );
        let now = Instant::now();

        let mut pb = row_progress_bar(scene, self.silenced);
        let mut profile = Profile::default();

        sink.begin(width, height)?;
        for band_start in (0..height).step_by(self.band_rows) {
            let band_end = (band_start + self.band_rows).min(height);

            // indexed collect keeps rows in order
            let rows: Vec<(Vec<Rgb8>, Profile)> = (band_start..band_end)
                .into_par_iter()
                .map(|y| {
                    let mut row_profile = Profile::default();
                    let row = (0..width)
                        .map(|x| trace_pixel(scene, x, y, &mut row_profile))
                        .collect::<Vec<_>>();
                    (row, row_profile)
                })
                .collect();

            for (row, row_profile) in rows {
                for pixel in row {
                    sink.write_pixel(pixel)?;
                }
                profile = profile.combine(row_profile);
            }
            if let Some(pb) = pb.as_mut() {
                pb.add((band_end - band_start) as u64);
            }
        }
        sink.finish()?;

        if let Some(mut pb) = pb {
            pb.finish();
        }
        debug!("parallel render took {}s", now.elapsed().as_secs_f32());
        Ok(profile)
    }
}
