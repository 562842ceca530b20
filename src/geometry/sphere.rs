use crate::geometry::Primitive;
use crate::math::{Ray, Vec3};

/// Discriminants below this count as a miss, grazing hits included.
pub const DISCRIMINANT_EPSILON: f64 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f64,
    pub color: Vec3,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f64, color: Vec3) -> Sphere {
        Sphere {
            origin,
            radius,
            color,
        }
    }

    // b and c of |o + td - c|^2 = r^2, with a = 1 assumed
    fn coefficients(&self, r: Ray) -> (f64, f64) {
        let oc: Vec3 = r.origin - self.origin;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        (b, c)
    }

    /// Geometric distance to the nearer root along a unit ray.
    /// `intersection` skips the `/ 2a` of the quadratic formula, so it reports twice this.
    pub fn distance(&self, r: Ray) -> f64 {
        self.intersection(r) / (2.0 * (r.direction * r.direction))
    }
}

impl Primitive for Sphere {
    fn intersects(&self, r: Ray) -> bool {
        let (b, c) = self.coefficients(r);
        let discriminant = b * b - 4.0 * c;
        // NaN discriminants count as hits
        !(discriminant < DISCRIMINANT_EPSILON)
    }

    fn intersection(&self, r: Ray) -> f64 {
        let (b, c) = self.coefficients(r);
        let discriminant_sqrt = (b * b - 4.0 * c).sqrt();
        let t0 = -b - discriminant_sqrt;
        let t1 = -b + discriminant_sqrt;
        if t0 < t1 {
            t0
        } else {
            t1
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.origin) / self.radius
    }

    fn color(&self) -> Vec3 {
        self.color
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, 10.0), 5.0, Vec3::new(255.0, 0.0, 0.0))
    }

    #[test]
    fn test_sphere_ray_intersection() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(sphere.intersects(ray));
        // twice the distance to the near surface, then the distance itself
        assert_eq!(sphere.intersection(ray), 10.0);
        assert_eq!(sphere.distance(ray), 5.0);
    }

    #[test]
    fn test_sphere_ray_miss() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(100.0, 100.0, 0.0), Vec3::Z);
        assert!(!sphere.intersects(ray));
        assert!(sphere.intersection(ray).is_nan());
    }

    #[test]
    fn test_tangent_ray_counts_as_miss() {
        let sphere = test_sphere();
        // grazes the silhouette exactly, discriminant is 0
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::Z);
        assert!(!sphere.intersects(ray));
        let ray = Ray::new(Vec3::new(4.999, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersects(ray));
    }

    #[test]
    fn test_sphere_behind_origin_still_intersects() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 30.0), Vec3::Z);
        assert!(sphere.intersects(ray));
        assert!(sphere.intersection(ray) < 0.0);
    }

    #[test]
    fn test_normal() {
        let sphere = test_sphere();
        let n = sphere.normal(Vec3::new(0.0, 5.0, 10.0));
        assert_eq!(n, Vec3::Y);
        let n = sphere.normal(Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(n, Vec3::new(0.0, 0.0, -2.0));
    }
}
