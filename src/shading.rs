use crate::geometry::{Primitive, Sphere};
use crate::math::{clamp_color, Ray, Vec3, WHITE};

/// Half-Lambert style shading: the average of white scaled by the light cosine and the surface color.
///
/// The cosine is not floored at zero, so surfaces facing away from the light get darker than
/// their own color rather than falling into shadow.
pub fn draw_pixel<P: Primitive + ?Sized>(primitive: &P, ray: Ray, light: &Sphere) -> Vec3 {
    let time = primitive.intersection(ray);
    let hit_point = ray.point_at_parameter(time);
    let to_light = light.origin - hit_point;
    let normal = primitive.normal(hit_point);

    let diffuse = to_light.normalized() * normal.normalized();
    clamp_color((WHITE * diffuse + primitive.color()) * 0.5)
}
