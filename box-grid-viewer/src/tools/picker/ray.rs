use bevy::prelude::*;

// Analytic ray–sphere intersection, returns the nearest non-negative t or None
pub fn ray_sphere_hit_t(
    ray_origin: Vec3,
    ray_direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_direction.length_squared();
    if a == 0.0 {
        return None;
    }

    let half_b = oc.dot(ray_direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-half_b - sqrt_d) / a;
    let t_far = (-half_b + sqrt_d) / a;

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}
