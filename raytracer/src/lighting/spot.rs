use crate::math::Vector3;

use super::Incidence;

/// Cutoff cosine of a spot light that has not been placed yet.
pub const UNSET_CUTOFF: f64 = -1.;

/// A spot light, which emits from a position within a cone around its axis.
///
/// A spot light is created from its axis alone. Until `place` gives it a
/// position and cutoff it lights nothing.
#[derive(Clone, Debug)]
pub struct Spot {
    /// The unit axis of the cone.
    pub direction: Vector3,

    /// The color of this light. `None` until it is configured.
    pub color: Option<Vector3>,

    /// The position in space of this light. `None` until it is placed.
    position: Option<Vector3>,

    /// Cosine of the cone's half-angle. Points whose angle from the axis has a
    /// smaller cosine than this are outside the cone.
    cutoff: f64,
}

impl Spot {
    pub fn new(direction: Vector3) -> Self {
        Self {
            direction: direction.normalize(),
            color: None,
            position: None,
            cutoff: UNSET_CUTOFF,
        }
    }

    pub fn with_color(mut self, color: Vector3) -> Self {
        self.color = Some(color);
        self
    }

    /// Give this light its position and cutoff cosine, making it usable.
    pub fn place(&mut self, position: Vector3, cutoff: f64) {
        self.position = Some(position);
        self.cutoff = cutoff;
    }

    pub fn placed(mut self, position: Vector3, cutoff: f64) -> Self {
        self.place(position, cutoff);
        self
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn position(&self) -> Option<Vector3> {
        self.position
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Vector and distance toward the light, or `None` if the light is unplaced
    /// or `point` lies outside its cone.
    pub fn incidence(&self, point: Vector3) -> Option<Incidence> {
        let to_light = self.position? - point;
        let distance = to_light.magnitude();
        let direction = to_light / distance;

        let cos_angle = (-direction).dot(self.direction);
        if cos_angle < self.cutoff {
            return None;
        }

        Some(Incidence {
            direction,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overhead() -> Spot {
        Spot::new(Vector3::new(0., -1., 0.)).placed(Vector3::new(0., 4., 0.), 0.9)
    }

    #[test]
    fn unplaced_light_reaches_nothing() {
        let spot = Spot::new(Vector3::new(0., -1., 0.));
        assert!(!spot.is_placed());
        assert_eq!(spot.cutoff(), UNSET_CUTOFF);
        assert!(spot.incidence(Vector3::zero()).is_none());
    }

    #[test]
    fn point_on_axis_is_lit() {
        let incidence = overhead().incidence(Vector3::zero()).unwrap();
        assert_eq!(incidence.direction, Vector3::new(0., 1., 0.));
        assert!((incidence.distance - 4.).abs() < 1e-12);
    }

    #[test]
    fn point_outside_cone_is_rejected() {
        // 45 degrees off axis, cos = 0.707 < 0.9
        assert!(overhead().incidence(Vector3::new(4., 0., 0.)).is_none());
        // a few degrees off axis is still inside
        assert!(overhead().incidence(Vector3::new(0.5, 0., 0.)).is_some());
    }
}
