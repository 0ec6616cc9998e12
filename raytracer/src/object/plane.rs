use crate::{
    math::{Ray, Vector3},
    scene::SceneError,
};

use super::{Hit, Intersect};

/// Below this, a ray is considered parallel to a plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Side length of one checkerboard tile.
const TILE_SIZE: f64 = 0.5;

/// An infinite plane: every point `p` with `normal · p = offset`.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Build a plane from any non-zero normal. The normal is normalized and the
    /// offset scaled with it, so the plane itself is unchanged.
    pub fn new(normal: Vector3, offset: f64) -> Result<Self, SceneError> {
        let len = normal.magnitude();
        if len == 0. || !len.is_finite() {
            return Err(SceneError::DegeneratePlane(normal));
        }

        Ok(Self {
            normal: normal / len,
            offset: offset / len,
        })
    }

    /// The stored unit normal.
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.offset - self.normal.dot(ray.origin)) / denom;
        if t < 0. {
            return None;
        }

        Some(Hit::new(t, ray.along(t)))
    }

    /// Planes always shade as if lit from the `-normal` side, whichever side
    /// the ray arrives from.
    fn normal_at(&self, _: Vector3) -> Vector3 {
        -self.normal
    }
}

/// Checkerboard factor at a world-space point, tiled over x and y: 1 on light
/// tiles and 0.5 on dark ones.
pub fn checkerboard(point: Vector3) -> f64 {
    fn tile(c: f64) -> f64 {
        if c < 0. {
            ((0.5 - c) / TILE_SIZE).floor()
        } else {
            (c / TILE_SIZE).floor()
        }
    }

    let sum = tile(point.x) + tile(point.y);
    let parity = (sum * 0.5 - (sum * 0.5).floor()) * 2.;
    if parity > 0.5 {
        0.5
    } else {
        1.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        // y = -1
        Plane::new(Vector3::new(0., 1., 0.), -1.).unwrap()
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(matches!(
            Plane::new(Vector3::zero(), 1.),
            Err(SceneError::DegeneratePlane(_))
        ));
    }

    #[test]
    fn normal_is_stored_normalized() {
        let plane = Plane::new(Vector3::new(0., 0., 2.), 4.).unwrap();
        assert_eq!(plane.normal(), Vector3::new(0., 0., 1.));
        assert_eq!(plane.offset(), 2.);
    }

    #[test]
    fn ray_hits_plane_in_front() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., -1., 0.));
        let hit = floor().intersect(&ray).unwrap();
        assert!((hit.t - 1.).abs() < 1e-12);
        assert_eq!(hit.point, Vector3::new(0., -1., 0.));
    }

    #[test]
    fn plane_behind_ray_is_missed() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 1., 0.));
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn parallel_ray_never_hits() {
        for origin in [Vector3::zero(), Vector3::new(0., -1., 0.), Vector3::new(3., -7., 2.)] {
            let ray = Ray::new(origin, Vector3::new(1., 0., 0.));
            assert!(floor().intersect(&ray).is_none());
        }
        let nearly = Ray::new(Vector3::zero(), Vector3::new(1., 1e-8, 0.));
        assert!(floor().intersect(&nearly).is_none());
    }

    #[test]
    fn shading_normal_is_negated_from_either_side() {
        let plane = floor();
        assert_eq!(plane.normal_at(Vector3::zero()), Vector3::new(0., -1., 0.));
        assert_eq!(
            plane.normal_at(Vector3::new(0., -5., 0.)),
            Vector3::new(0., -1., 0.)
        );
    }

    #[test]
    fn checkerboard_alternates_between_full_and_half() {
        assert_eq!(checkerboard(Vector3::new(0.25, 0.25, 0.)), 1.);
        assert_eq!(checkerboard(Vector3::new(0.75, 0.25, 0.)), 0.5);
        assert_eq!(checkerboard(Vector3::new(0.75, 0.75, 0.)), 1.);
        assert_eq!(checkerboard(Vector3::new(-0.25, 0.25, 0.)), 0.5);
    }

    #[test]
    fn checkerboard_has_unit_period() {
        let samples = [-2.3, -1.1, -0.6, -0.2, 0., 0.1, 0.4, 0.7, 1.3, 2.9];
        for &x in &samples {
            for &y in &samples {
                let f = checkerboard(Vector3::new(x, y, 0.));
                assert!(f == 1. || f == 0.5);
                assert_eq!(f, checkerboard(Vector3::new(x + 1., y, 0.)));
                assert_eq!(f, checkerboard(Vector3::new(x, y + 1., 0.)));
            }
        }
    }

    #[test]
    fn checkerboard_ignores_z() {
        let a = checkerboard(Vector3::new(0.3, 0.8, -10.));
        let b = checkerboard(Vector3::new(0.3, 0.8, 42.));
        assert_eq!(a, b);
    }
}
