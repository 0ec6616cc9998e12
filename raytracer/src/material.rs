use crate::math::Vector3;

/// A 24-bit color, RGB. This is the final, clamped pixel format; shading math
/// happens on linear `Vector3` colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s. Each channel is clamped to 0-1 and
    /// rounded to the nearest 8-bit value.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        fn channel(c: f64) -> u8 {
            (c.clamp(0., 1.) * 255.).round() as u8
        }

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.into())
    }
}

/// How a surface responds to an incoming ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Locally shaded: ambient, diffuse and specular.
    Standard,

    /// A perfect mirror. The color is entirely the reflected ray's color.
    Mirror,

    /// A refractive solid with an index of refraction of 1.5.
    Glass,
}

/// A material for a scene object.
///
/// The color and shininess are assigned after the object is created, so a
/// material starts out black with zero shininess until `set_color` is called.
#[derive(Debug, Clone)]
pub struct Material {
    pub kind: MaterialKind,

    /// The base color, in linear RGB.
    pub color: Vector3,

    /// The Phong specular exponent.
    pub shininess: f64,

    color_set: bool,
}

impl Material {
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            color: Vector3::zero(),
            shininess: 0.,
            color_set: false,
        }
    }

    /// Builder-style helper for a fully configured material.
    pub fn with_color(mut self, color: Vector3, shininess: f64) -> Self {
        self.set_color(color, shininess);
        self
    }

    pub fn set_color(&mut self, color: Vector3, shininess: f64) {
        self.color = color;
        self.shininess = shininess;
        self.color_set = true;
    }

    /// Whether `set_color` has been called on this material.
    pub fn is_color_set(&self) -> bool {
        self.color_set
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(MaterialKind::Standard)
    }
}
