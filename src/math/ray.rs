use super::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` must be unit length. The sphere intersection formulas drop the `a = d·d` term
    /// of the quadratic and only agree with the rendered output when it is 1.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            (direction.norm_squared() - 1.0).abs() < 1e-9,
            "ray direction must be normalized, got {:?}",
            direction
        );
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Vec3 {
        self.origin + self.direction * time
    }
}
