use std::io;
use std::time::Instant;

use super::{row_progress_bar, trace_pixel, Renderer};
use crate::output::PixelSink;
use crate::profile::Profile;
use crate::scene::Scene;

/// Single threaded. Each pixel goes to the sink as soon as it is shaded.
pub struct StreamingRenderer {
    pub silenced: bool,
}

impl StreamingRenderer {
    pub fn new(silenced: bool) -> StreamingRenderer {
        StreamingRenderer { silenced }
    }
}

impl Renderer for StreamingRenderer {
    fn render(&self, scene: &Scene, sink: &mut dyn PixelSink) -> io::Result<Profile> {
        let (width, height) = (scene.width, scene.height);
        info!("starting streaming render with resolution {}x{}", width, height);
        let now = Instant::now();

        let mut pb = row_progress_bar(scene, self.silenced);
        let mut profile = Profile::default();

        sink.begin(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let pixel = trace_pixel(scene, x, y, &mut profile);
                sink.write_pixel(pixel)?;
            }
            if let Some(pb) = pb.as_mut() {
                pb.inc();
            }
        }
        sink.finish()?;

        if let Some(mut pb) = pb {
            pb.finish();
        }
        debug!("streaming render took {}s", now.elapsed().as_secs_f32());
        Ok(profile)
    }
}
