mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Calculate the refracted direction of `incident` crossing a surface with the
/// given normal, going from a medium with `from_ior` into one with `to_ior`.
///
/// The normal must face against the incident direction. Returns `None` on total
/// internal reflection.
pub fn refraction_vec(
    incident: Vector3,
    normal: Vector3,
    from_ior: f64,
    to_ior: f64,
) -> Option<Vector3> {
    let n = from_ior / to_ior;
    let cos_i = -normal.dot(incident);
    let sin_t2 = n * n * (1. - cos_i * cos_i);
    if sin_t2 > 1. {
        return None;
    }

    let cos_t = (1. - sin_t2).sqrt();
    Some(incident * n + normal * (n * cos_i - cos_t))
}
