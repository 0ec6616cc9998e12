use super::Vector3;

/// A half-line with an origin and a direction. The direction is not required
/// to be normalized; call sites normalize where distances matter.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along this ray.
    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Reflect this ray off of a surface at `pos` with the given normal. The new
    /// origin is pushed `offset` units along the reflected direction so the
    /// reflected ray does not immediately strike the same surface.
    pub fn reflect(&self, pos: Vector3, normal: Vector3, offset: f64) -> Ray {
        let dir = self.direction.reflect(normal);
        Ray::new(pos + dir * offset, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_scales_direction() {
        let ray = Ray::new(Vector3::new(1., 0., 0.), Vector3::new(0., 2., 0.));
        assert_eq!(ray.along(1.5), Vector3::new(1., 3., 0.));
    }

    #[test]
    fn reflect_offsets_origin_along_new_direction() {
        let ray = Ray::new(Vector3::new(0., 1., 0.), Vector3::new(0., -1., 0.));
        let bounced = ray.reflect(Vector3::zero(), Vector3::new(0., 1., 0.), 1e-3);
        assert_eq!(bounced.direction, Vector3::new(0., 1., 0.));
        assert!((bounced.origin.y - 1e-3).abs() < 1e-12);
    }
}
