use std::fs;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,       // one per pixel
    pub primitive_hits: usize,    // every successful intersection test
    pub overdrawn_pixels: usize,  // pixels shaded by more than one primitive
    pub background_pixels: usize, // pixels no primitive touched
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        primitive_hits: usize,
        overdrawn_pixels: usize,
        background_pixels: usize,
    ) -> Self {
        Profile {
            camera_rays,
            primitive_hits,
            overdrawn_pixels,
            background_pixels,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.primitive_hits + other.primitive_hits,
            self.overdrawn_pixels + other.overdrawn_pixels,
            self.background_pixels + other.background_pixels,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            primitive_hits,
            overdrawn_pixels,
            background_pixels,
        } = self;
        let threads = threads.max(1);
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} primitive hits, {} pixels overdrawn, {} background pixels",
            primitive_hits, overdrawn_pixels, background_pixels
        );
    }
}

/// Resident set size of this process, where the platform exposes it.
pub fn resident_memory_bytes() -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb = line
        .trim_start_matches("VmRSS:")
        .trim()
        .trim_end_matches("kB")
        .trim()
        .parse::<u64>()
        .ok()?;
    Some(kb * 1024)
}

pub fn log_memory_usage(label: &str, bytes: u64) {
    info!("{}: {} bytes", label, bytes);
    info!("{}: {} kb", label, bytes as f64 / 1024.0);
    info!("{}: {} mb", label, bytes as f64 / 1024.0 / 1024.0);
}
