use crate::{
    math::{Ray, Vector3},
    scene::SceneError,
};

use super::{Hit, Intersect};

/// A sphere.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub origin: Vector3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(origin: Vector3, radius: f64) -> Result<Self, SceneError> {
        if !(radius > 0.) || !radius.is_finite() {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self { origin, radius })
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let len = ray.direction.magnitude();
        let dir = ray.direction / len;
        let rad2 = self.radius.powi(2);

        // project the origin-to-center vector onto the ray, then compare the
        // squared distance between the ray line and the center with r^2
        let l = self.origin - ray.origin;
        let proj = l.dot(dir);
        let d2 = l.dot(l) - proj * proj;
        if d2 > rad2 {
            return None;
        }

        let half_chord = (rad2 - d2).sqrt();
        let t0 = proj - half_chord;
        let t1 = proj + half_chord;

        // roots are distances along the unit direction; the near one is
        // behind us when the ray starts inside the sphere
        let t = if t0 >= 0. {
            t0
        } else if t1 >= 0. {
            t1
        } else {
            return None;
        };

        Some(Hit::new(t / len, ray.origin + dir * t))
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.origin).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::new(0., 0., -5.), 1.).unwrap()
    }

    #[test]
    fn ray_through_center_hits_near_side() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 0., -1.));
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert!((hit.t - 4.).abs() < 1e-9);
        assert!((hit.point - Vector3::new(0., 0., -4.)).magnitude() < 1e-9);
    }

    #[test]
    fn unnormalized_direction_reports_ray_parameter() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 0., -10.));
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert!((hit.t - 0.4).abs() < 1e-9);
        assert!((ray.along(hit.t) - hit.point).magnitude() < 1e-9);
        assert!((hit.point - Vector3::new(0., 0., -4.)).magnitude() < 1e-9);
    }

    #[test]
    fn sphere_and_plane_agree_on_ray_parameter() {
        use crate::object::Plane;

        // the plane z = -4 touches the sphere's near side
        let plane = Plane::new(Vector3::new(0., 0., 1.), -4.).unwrap();
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 0., -10.));

        let s = unit_sphere().intersect(&ray).unwrap();
        let p = plane.intersect(&ray).unwrap();
        assert!((s.t - p.t).abs() < 1e-9);
        assert!((s.point - p.point).magnitude() < 1e-9);
        assert!((ray.along(p.t) - p.point).magnitude() < 1e-9);
    }

    #[test]
    fn nonpositive_radius_is_rejected() {
        for radius in [0., -1., f64::NAN] {
            assert!(matches!(
                Sphere::new(Vector3::zero(), radius),
                Err(SceneError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn origin_inside_returns_far_side() {
        let ray = Ray::new(Vector3::new(0., 0., -5.), Vector3::new(0., 1., 0.));
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert!((hit.t - 1.).abs() < 1e-9);
        assert!((hit.point - Vector3::new(0., 1., -5.)).magnitude() < 1e-9);
    }

    #[test]
    fn sphere_behind_ray_is_missed() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 0., 1.));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn ray_passing_beside_is_missed() {
        let ray = Ray::new(Vector3::new(0., 1.5, 0.), Vector3::new(0., 0., -1.));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn normal_points_outward() {
        let n = unit_sphere().normal_at(Vector3::new(0., 0., -4.));
        assert_eq!(n, Vector3::new(0., 0., 1.));
    }
}
