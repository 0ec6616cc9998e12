use std::{path::Path, time::Instant};

use rayon::prelude::*;
use thiserror::Error;

use crate::{
    camera::Camera,
    lighting::Light,
    material::{Color, MaterialKind},
    math::{refraction_vec, Ray, Vector3},
    object::{Hit, Intersect, SceneObject},
};

/// Intersections closer than this to a ray's origin are ignored, so secondary
/// rays do not strike the surface they leave from.
pub const HIT_EPSILON: f64 = 1e-3;

/// How far a shadow ray starts from its surface point, toward the light.
pub const SHADOW_EPSILON: f64 = 0.01;

/// How far a ray travelling through glass is nudged past each refracting surface.
pub const GLASS_EPSILON: f64 = 0.01;

/// Rays deeper than this many bounces resolve to the background.
pub const MAX_RAY_DEPTH: u32 = 5;

/// Index of refraction of glass; the surrounding medium is air at 1.0.
pub const GLASS_IOR: f64 = 1.5;

/// Tint applied to every specular highlight.
pub const SPECULAR_TINT: Vector3 = Vector3::splat(0.7);

/// The color of a ray that escapes the scene or runs out of bounces.
pub const BACKGROUND: Vector3 = Vector3::zero();

/// An error in the scene description itself.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("plane normal {0:?} is degenerate")]
    DegeneratePlane(Vector3),

    #[error("sphere radius {0} must be positive")]
    InvalidRadius(f64),
}

/// An error while writing a rendered image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Render options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,
}

impl RenderOptions {
    /// Number of pixels in the image, computed without overflowing `u32`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/// A scene, which contains a list of objects, lights, and the ambient color.
///
/// The scene is read-only while rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Light>,

    /// The ambient color of the scene.
    pub ambient: Vector3,
}

impl Scene {
    /// Find the nearest object struck by a ray. Objects are tested in order, and
    /// on an exact tie in distance the earlier object wins.
    pub fn cast_ray(&self, ray: &Ray) -> Option<(&SceneObject, Hit)> {
        let mut nearest: Option<(&SceneObject, Hit, f64)> = None;
        let scale = ray.direction.magnitude();

        // iterate over every object in the scene and test for an intersection
        for object in self.objects.iter() {
            let hit = match object.intersect(ray) {
                Some(hit) => hit,
                None => continue,
            };

            let distance = hit.t * scale;
            if distance <= HIT_EPSILON {
                continue;
            }

            if nearest.as_ref().map_or(true, |(_, _, d)| distance < *d) {
                nearest = Some((object, hit, distance));
            }
        }

        nearest.map(|(object, hit, _)| (object, hit))
    }

    /// Whether anything lies between `point` and a light `max_distance` away in
    /// `direction`. `direction` must be unit length.
    pub fn is_occluded(&self, point: Vector3, direction: Vector3, max_distance: f64) -> bool {
        let shadow_ray = Ray::new(point + direction * SHADOW_EPSILON, direction);

        self.objects.iter().any(|object| match object.intersect(&shadow_ray) {
            Some(hit) => hit.distance_from(point) < max_distance,
            None => false,
        })
    }

    /// Trace out a ray, getting its linear color. `depth` is the number of
    /// bounces that led to this ray; primary rays start at 0.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Vector3 {
        if depth > MAX_RAY_DEPTH {
            return BACKGROUND;
        }

        let (object, hit) = match self.cast_ray(ray) {
            Some(r) => r,
            None => return BACKGROUND,
        };

        match object.material().kind {
            MaterialKind::Standard => self.shade(ray, object, &hit),
            MaterialKind::Mirror => self.reflect(ray, object, &hit, depth),
            MaterialKind::Glass => self.refract(ray, object, &hit, depth),
        }
    }

    /// Local illumination of an opaque surface: ambient plus, for each light
    /// that reaches the point, Lambertian diffuse and Phong specular.
    ///
    /// Plane checkerboards darken only the diffuse term.
    fn shade(&self, ray: &Ray, object: &SceneObject, hit: &Hit) -> Vector3 {
        let material = object.material();
        let point = hit.point;
        let normal = object.normal_at(point).normalize();
        let view = (ray.origin - point).normalize();
        let diffuse_color = material.color * object.shape.pattern_at(point);

        let mut color = material.color * self.ambient;
        for light in self.lights.iter() {
            let shading = match light.shading(point, normal, view, material.shininess, self) {
                Some(shading) => shading,
                None => continue,
            };

            let lcol = light.color();
            color += diffuse_color * lcol * shading.diffuse;
            color += SPECULAR_TINT * lcol * shading.specular;
        }

        color
    }

    /// Sum of specular highlights only, for surfaces that have no diffuse body.
    fn highlights(&self, ray: &Ray, object: &SceneObject, hit: &Hit) -> Vector3 {
        let point = hit.point;
        let normal = object.normal_at(point).normalize();
        let view = (ray.origin - point).normalize();
        let shininess = object.material().shininess;

        let mut color = Vector3::zero();
        for light in self.lights.iter() {
            if let Some(shading) = light.shading(point, normal, view, shininess, self) {
                color += SPECULAR_TINT * light.color() * shading.specular;
            }
        }

        color
    }

    /// A mirror shows only what its reflected ray sees.
    fn reflect(&self, ray: &Ray, object: &SceneObject, hit: &Hit, depth: u32) -> Vector3 {
        let normal = object.normal_at(hit.point).normalize();
        let incoming = Ray::new(ray.origin, ray.direction.normalize());
        let reflected = incoming.reflect(hit.point, normal, HIT_EPSILON);

        self.trace_ray(&reflected, depth + 1)
    }

    /// Send the ray through a glass object: refract on the way in, find where it
    /// leaves the same object, refract again on the way out and keep tracing.
    /// Total internal reflection at either surface reflects instead.
    fn refract(&self, ray: &Ray, object: &SceneObject, hit: &Hit, depth: u32) -> Vector3 {
        let direction = ray.direction.normalize();
        let normal = object.normal_at(hit.point).normalize();

        let inside = refraction_vec(direction, normal, 1., GLASS_IOR)
            .unwrap_or_else(|| direction.reflect(normal));

        let internal = Ray::new(hit.point + inside * GLASS_EPSILON, inside);
        let transmitted = match object.intersect(&internal) {
            Some(exit) => {
                // flip the outward normal so it faces against the internal ray
                let exit_normal = -object.normal_at(exit.point).normalize();
                let outside = refraction_vec(inside, exit_normal, GLASS_IOR, 1.)
                    .unwrap_or_else(|| inside.reflect(exit_normal));

                let exit_ray = Ray::new(exit.point + outside * GLASS_EPSILON, outside);
                self.trace_ray(&exit_ray, depth + 1)
            }
            None => Vector3::zero(),
        };

        transmitted + self.highlights(ray, object, hit)
    }

    /// Trace out a pixel, where top-left of the image is (0, 0). Rays go
    /// through pixel centers.
    pub fn trace_pixel(&self, camera: &Camera, x: u32, y: u32, options: &RenderOptions) -> Color {
        let ray = camera.generate_ray(
            x as f64 + 0.5,
            y as f64 + 0.5,
            options.width,
            options.height,
        );

        self.trace_ray(&ray, 0).into()
    }

    /// Render the image out as a row-major list of Colors.
    ///
    /// Pixels are independent of one another and the scene is only read, so
    /// they are traced in parallel.
    pub fn render(&self, camera: &Camera, options: &RenderOptions) -> Vec<Color> {
        let vw = options.width as usize;
        log::debug!(
            "rendering {}x{}: {} objects, {} lights",
            options.width,
            options.height,
            self.objects.len(),
            self.lights.len()
        );

        let now = Instant::now();
        let pixels = (0..options.pixel_count())
            .into_par_iter()
            .map(|i| self.trace_pixel(camera, (i % vw) as u32, (i / vw) as u32, options))
            .collect::<Vec<_>>();

        log::debug!("traced {} pixels in {}s", pixels.len(), now.elapsed().as_secs_f32());
        pixels
    }

    /// Render to a row-major buffer of RGB bytes, three per pixel.
    pub fn render_buffer(&self, camera: &Camera, options: &RenderOptions) -> Vec<u8> {
        self.render(camera, options)
            .into_iter()
            .flat_map(<[u8; 3]>::from)
            .collect()
    }

    /// Render the image out to a PNG file at `path`.
    pub fn render_to<P: AsRef<Path>>(
        &self,
        camera: &Camera,
        options: &RenderOptions,
        path: P,
    ) -> Result<(), RenderError> {
        let rendered = self.render(camera, options);

        // spit out an image
        let vw = options.width as usize;
        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(options.width, options.height);
        for (i, color) in rendered.into_iter().enumerate() {
            imgbuf.put_pixel((i % vw) as u32, (i / vw) as u32, color.into());
        }

        imgbuf.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
