use super::Vec3;

/// 8 bit output pixel.
pub type Rgb8 = [u8; 3];

pub const WHITE: Vec3 = Vec3::new(255.0, 255.0, 255.0);
pub const CHANNEL_MAX: f64 = 255.0;

/// Clamps every channel into `[0, 255]`. NaN channels stay NaN.
pub fn clamp_color(color: Vec3) -> Vec3 {
    color.map(|c| {
        if c > CHANNEL_MAX {
            CHANNEL_MAX
        } else if c < 0.0 {
            0.0
        } else {
            c
        }
    })
}

/// Truncates toward zero. `as` saturates, so NaN becomes 0 and out of range values pin to the ends.
pub fn to_rgb8(color: Vec3) -> Rgb8 {
    [color.x() as u8, color.y() as u8, color.z() as u8]
}
