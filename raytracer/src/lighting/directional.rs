use crate::math::Vector3;

use super::Incidence;

/// A directional light, which has no position, just a vector direction that is
/// true for all points in the world.
#[derive(Debug, Clone)]
pub struct Directional {
    /// The unit direction the light travels in.
    pub direction: Vector3,

    /// The color of this light. `None` until it is configured.
    pub color: Option<Vector3>,
}

impl Directional {
    /// Create a directional light traveling along `direction`, which is normalized.
    pub fn new(direction: Vector3) -> Self {
        Self {
            direction: direction.normalize(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Vector3) -> Self {
        self.color = Some(color);
        self
    }

    /// The same everywhere: back along the travel direction, infinitely far.
    pub fn incidence(&self) -> Incidence {
        Incidence {
            direction: -self.direction,
            distance: f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let light = Directional::new(Vector3::new(0., 0., -3.));
        assert_eq!(light.direction, Vector3::new(0., 0., -1.));
    }

    #[test]
    fn incidence_points_back_toward_light() {
        let incidence = Directional::new(Vector3::new(0., -2., 0.)).incidence();
        assert_eq!(incidence.direction, Vector3::new(0., 1., 0.));
        assert!(incidence.distance.is_infinite());
    }
}
