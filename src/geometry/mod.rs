use crate::math::{Ray, Vec3};

mod sphere;

pub use sphere::Sphere;

/// Anything the render loop can test rays against and shade.
pub trait Primitive {
    fn intersects(&self, r: Ray) -> bool;
    /// Root of the quadratic without the `1/2a` factor, so twice the geometric distance for unit
    /// rays. Only meaningful after `intersects` returned true for the same ray, NaN otherwise.
    fn intersection(&self, r: Ray) -> f64;
    fn normal(&self, point: Vec3) -> Vec3;
    fn color(&self) -> Vec3;
}
