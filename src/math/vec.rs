use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Three doubles used as a point, a direction, or an RGB triple on the 0..=255 scale.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Vec3(pub [f64; 3]);

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3([x, y, z])
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vec3 {
    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Vec3 {
        Vec3(self.0.map(f))
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        *self * other
    }

    pub fn norm_squared(&self) -> f64 {
        *self * *self
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Zero length input divides by zero and yields NaN components.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        *self / norm
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f64;
    fn mul(self, other: Vec3) -> f64 {
        // self.x * other.x + self.y * other.y + self.z * other.z
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        self.map(|e| e * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        self.map(|e| e / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.map(|e| -e)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }
}

impl From<f64> for Vec3 {
    fn from(s: f64) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(other: [f64; 3]) -> Vec3 {
        Vec3(other)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        v.0
    }
}
