mod directional;
mod spot;

use crate::{math::Vector3, scene::Scene};

pub use directional::*;
pub use spot::*;

/// Where light arrives from, as seen from a surface point.
#[derive(Clone, Debug, PartialEq)]
pub struct Incidence {
    /// Unit vector from the surface point toward the light.
    pub direction: Vector3,

    /// How far along `direction` the light sits. Infinite for directional lights.
    pub distance: f64,
}

/// The result of a light's influence on a surface point, before colors are applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightShading {
    /// Lambertian term, `max(n · l, 0)`.
    pub diffuse: f64,

    /// Phong term, `max(r · v, 0)^shininess`.
    pub specular: f64,
}

/// A light source.
#[derive(Clone, Debug)]
pub enum Light {
    /// Uniform light from everywhere. It never takes part in per-light shading;
    /// the scene's ambient color is what lights surfaces uniformly.
    Ambient(Vector3),
    Directional(Directional),
    Spot(Spot),
}

impl Light {
    /// The light's color, or black if it was never assigned one.
    pub fn color(&self) -> Vector3 {
        match self {
            Self::Ambient(color) => *color,
            Self::Directional(light) => light.color.unwrap_or_default(),
            Self::Spot(light) => light.color.unwrap_or_default(),
        }
    }

    pub fn is_color_set(&self) -> bool {
        match self {
            Self::Ambient(_) => true,
            Self::Directional(light) => light.color.is_some(),
            Self::Spot(light) => light.color.is_some(),
        }
    }

    pub fn set_color(&mut self, color: Vector3) {
        match self {
            Self::Ambient(c) => *c = color,
            Self::Directional(light) => light.color = Some(color),
            Self::Spot(light) => light.color = Some(color),
        }
    }

    /// Direction and distance to this light from `point`, or `None` if the
    /// light cannot reach the point at all.
    pub fn incidence(&self, point: Vector3) -> Option<Incidence> {
        match self {
            Self::Ambient(_) => None,
            Self::Directional(light) => Some(light.incidence()),
            Self::Spot(light) => light.incidence(point),
        }
    }

    /// Shade a surface point with this light. `normal` and `view` are unit
    /// vectors, `view` pointing from the point back toward the viewer.
    ///
    /// Returns `None` when the light does not reach the point: ambient lights,
    /// points outside a spot light's cone, and shadowed points.
    pub fn shading(
        &self,
        point: Vector3,
        normal: Vector3,
        view: Vector3,
        shininess: f64,
        scene: &Scene,
    ) -> Option<LightShading> {
        let Incidence {
            direction,
            distance,
        } = self.incidence(point)?;

        if scene.is_occluded(point, direction, distance) {
            return None;
        }

        let diffuse = normal.dot(direction).max(0.);

        let reflected = (-direction).reflect(normal).normalize();
        let specular = reflected.dot(view).max(0.).powf(shininess);

        Some(LightShading { diffuse, specular })
    }
}

impl From<Directional> for Light {
    fn from(light: Directional) -> Self {
        Self::Directional(light)
    }
}

impl From<Spot> for Light {
    fn from(light: Spot) -> Self {
        Self::Spot(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::Material,
        object::{SceneObject, Sphere},
    };

    fn down_light() -> Light {
        Directional::new(Vector3::new(0., -1., 0.))
            .with_color(Vector3::splat(1.))
            .into()
    }

    #[test]
    fn unset_color_is_black() {
        let mut light: Light = Directional::new(Vector3::new(0., -1., 0.)).into();
        assert!(!light.is_color_set());
        assert_eq!(light.color(), Vector3::zero());
        light.set_color(Vector3::new(0.2, 0.3, 0.4));
        assert!(light.is_color_set());
        assert_eq!(light.color(), Vector3::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn ambient_never_shades() {
        let scene = Scene::default();
        let light = Light::Ambient(Vector3::splat(1.));
        let up = Vector3::new(0., 1., 0.);
        assert!(light.shading(Vector3::zero(), up, up, 1., &scene).is_none());
    }

    #[test]
    fn head_on_light_gives_full_diffuse_and_specular() {
        let scene = Scene::default();
        let up = Vector3::new(0., 1., 0.);
        let shading = down_light()
            .shading(Vector3::zero(), up, up, 10., &scene)
            .unwrap();
        assert!((shading.diffuse - 1.).abs() < 1e-12);
        assert!((shading.specular - 1.).abs() < 1e-12);
    }

    #[test]
    fn surface_facing_away_gets_no_diffuse() {
        let scene = Scene::default();
        let down = Vector3::new(0., -1., 0.);
        let shading = down_light()
            .shading(Vector3::zero(), down, down, 1., &scene)
            .unwrap();
        assert_eq!(shading.diffuse, 0.);
        assert_eq!(shading.specular, 0.);
    }

    #[test]
    fn occluded_point_is_not_lit() {
        let mut scene = Scene::default();
        scene.objects.push(SceneObject::new(
            Sphere::new(Vector3::new(0., 5., 0.), 1.).unwrap(),
            Material::default(),
        ));
        let up = Vector3::new(0., 1., 0.);
        assert!(down_light()
            .shading(Vector3::zero(), up, up, 1., &scene)
            .is_none());
    }
}
