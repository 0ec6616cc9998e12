mod plane;
mod sphere;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

pub use plane::*;
pub use sphere::*;

/// The result of a ray intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// The parameter along the ray at which the intersection occurs, so that
    /// `ray.along(t) == point` whatever the length of the ray's direction.
    pub t: f64,

    /// The point of intersection in world space.
    pub point: Vector3,
}

impl Hit {
    pub fn new(t: f64, point: Vector3) -> Self {
        Self { t, point }
    }

    /// Straight-line distance from `origin` to the intersection point.
    pub fn distance_from(&self, origin: Vector3) -> f64 {
        (self.point - origin).magnitude()
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the nearest intersection in front of the ray origin, if any.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// The surface normal used for shading at `point`.
    fn normal_at(&self, point: Vector3) -> Vector3;
}

/// The geometry of a scene object.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// The diffuse darkening factor at `point`. Planes carry a checkerboard;
    /// everything else is a flat 1.
    pub fn pattern_at(&self, point: Vector3) -> f64 {
        match self {
            Self::Sphere(_) => 1.,
            Self::Plane(_) => checkerboard(point),
        }
    }
}

impl Intersect for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
            Self::Plane(plane) => plane.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        match self {
            Self::Sphere(sphere) => sphere.normal_at(point),
            Self::Plane(plane) => plane.normal_at(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

/// A renderable object: some geometry and the material it is made of.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub shape: Shape,
    pub material: Material,
}

impl SceneObject {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Grab this scene object's material.
    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Intersect for SceneObject {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        self.shape.normal_at(point)
    }
}
