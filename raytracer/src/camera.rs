use crate::math::{Ray, Vector3};

/// A pinhole camera looking through a rectangular viewport.
///
/// Scene loading fills in the fields; `configure` must then be called once the
/// image dimensions are known, before any rays are generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    pub right: Vector3,

    /// Distance from the eye to the viewport plane.
    pub focal_length: f64,

    /// Viewport width in world units. Zero means "derive from the aspect ratio".
    pub viewport_width: f64,

    /// Viewport height in world units.
    pub viewport_height: f64,
}

impl Default for Camera {
    /// One unit in front of a 2x2 viewport centered on the origin, looking down -z.
    fn default() -> Self {
        Self {
            eye: Vector3::new(0., 0., 1.),
            forward: Vector3::new(0., 0., -1.),
            up: Vector3::new(0., 1., 0.),
            right: Vector3::new(1., 0., 0.),
            focal_length: 1.,
            viewport_width: 2.,
            viewport_height: 2.,
        }
    }
}

impl Camera {
    /// Build an orthonormal-ish basis from `forward` and `up`, and derive the
    /// viewport width from the image aspect ratio if none was given.
    pub fn configure(&mut self, width: u32, height: u32) {
        self.forward = self.forward.normalize();
        self.up = self.up.normalize();
        self.right = self.forward.cross(self.up).normalize();

        if self.viewport_width == 0. {
            self.viewport_width = self.viewport_height * width as f64 / height as f64;
        }
    }

    /// The center of the viewport in world space.
    pub fn viewport_center(&self) -> Vector3 {
        self.eye + self.forward * self.focal_length
    }

    /// Generate the primary ray through image coordinates `(x, y)`, where the
    /// top-left corner of the image is (0, 0). Coordinates may be fractional;
    /// the center of pixel `(i, j)` is `(i + 0.5, j + 0.5)`.
    pub fn generate_ray(&self, x: f64, y: f64, width: u32, height: u32) -> Ray {
        let u = x / width as f64 - 0.5;
        let v = 0.5 - y / height as f64;

        let point = self.viewport_center()
            + self.right * (u * self.viewport_width)
            + self.up * (v * self.viewport_height);

        Ray::new(self.eye, (point - self.eye).normalize())
    }
}
