use std::io::BufRead;

use raytracer::{
    camera::Camera,
    lighting::{Directional, Light, Spot},
    material::{Material, MaterialKind},
    math::Vector3,
    object::{Plane, SceneObject, Sphere},
    scene::{Scene, SceneError},
};
use thiserror::Error;

use crate::tokenize::{Command, TokenizeError, Tokenizer};

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizeError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("line {line}: '{kind}' expects at least {expected} values, got {got}")]
    MissingValues {
        line: usize,
        kind: char,
        expected: usize,
        got: usize,
    },
}

/// The interpreter turns a list of scene commands into a scene and the camera
/// that views it.
///
/// Several commands configure the *first* entity that is still unconfigured:
/// `p` places the first unplaced spot light, `i` colors the first uncolored
/// light, and `c` colors the first uncolored object. A directive with no such
/// entity is dropped.
pub struct Interpreter {
    commands: Vec<Command>,
    scene: Scene,
    camera: Camera,
}

impl Interpreter {
    /// Create a new interpreter by tokenizing the whole input up front.
    pub fn new<R: BufRead>(reader: R) -> Result<Self, InterpretError> {
        Ok(Interpreter {
            commands: Tokenizer::new(reader).tokenize()?,
            scene: Scene::default(),
            camera: Camera::default(),
        })
    }

    /// Start execution of the interpreter. The returned camera still has to be
    /// configured for the output resolution.
    pub fn run(mut self) -> Result<(Scene, Camera), InterpretError> {
        let commands = std::mem::take(&mut self.commands);
        for command in commands.iter() {
            self.apply(command)?;
        }

        log::debug!(
            "scene has {} objects and {} lights",
            self.scene.objects.len(),
            self.scene.lights.len()
        );

        Ok((self.scene, self.camera))
    }

    fn apply(&mut self, command: &Command) -> Result<(), InterpretError> {
        match command.kind {
            'e' => {
                self.camera.eye = vector(command)?;
                if let Some(&focal) = command.values.get(3) {
                    self.camera.focal_length = focal;
                }
            }
            'u' => {
                self.camera.up = vector(command)?;
                if let Some(&height) = command.values.get(3) {
                    self.camera.viewport_height = height;
                }
            }
            'f' => {
                self.camera.forward = vector(command)?;
                if let Some(&width) = command.values.get(3) {
                    self.camera.viewport_width = width;
                }
            }
            'a' => self.scene.ambient = vector(command)?,
            'd' => {
                let [x, y, z, kind] = values::<4>(command)?;
                let direction = Vector3::new(x, y, z);
                let light: Light = if kind == 0. {
                    Directional::new(direction).into()
                } else {
                    Spot::new(direction).into()
                };
                self.scene.lights.push(light);
            }
            'p' => {
                let [x, y, z, cutoff] = values::<4>(command)?;
                let spot = self.scene.lights.iter_mut().find_map(|light| match light {
                    Light::Spot(spot) if !spot.is_placed() => Some(spot),
                    _ => None,
                });

                match spot {
                    Some(spot) => spot.place(Vector3::new(x, y, z), cutoff),
                    None => unclaimed(command),
                }
            }
            'i' => {
                let color = vector(command)?;
                let light = self
                    .scene
                    .lights
                    .iter_mut()
                    .find(|light| !matches!(light, Light::Ambient(_)) && !light.is_color_set());

                match light {
                    Some(light) => light.set_color(color),
                    None => unclaimed(command),
                }
            }
            'o' | 'r' | 't' => {
                let kind = match command.kind {
                    'o' => MaterialKind::Standard,
                    'r' => MaterialKind::Mirror,
                    _ => MaterialKind::Glass,
                };
                let [x, y, z, w] = values::<4>(command)?;
                let v = Vector3::new(x, y, z);
                let material = Material::new(kind);

                // positive w is a sphere radius, otherwise the plane n . p + w = 0
                let object = if w > 0. {
                    SceneObject::new(Sphere::new(v, w)?, material)
                } else {
                    SceneObject::new(Plane::new(v, -w)?, material)
                };
                self.scene.objects.push(object);
            }
            'c' => {
                let [r, g, b, shininess] = values::<4>(command)?;
                let object = self
                    .scene
                    .objects
                    .iter_mut()
                    .find(|object| !object.material.is_color_set());

                match object {
                    Some(object) => object
                        .material
                        .set_color(Vector3::new(r, g, b), shininess),
                    None => unclaimed(command),
                }
            }
            _ => log::warn!("line {}: ignoring unknown command '{}'", command.line, command.kind),
        }

        Ok(())
    }
}

/// The first `N` values of a command.
fn values<const N: usize>(command: &Command) -> Result<[f64; N], InterpretError> {
    if command.values.len() < N {
        return Err(InterpretError::MissingValues {
            line: command.line,
            kind: command.kind,
            expected: N,
            got: command.values.len(),
        });
    }

    let mut out = [0.; N];
    out.copy_from_slice(&command.values[..N]);
    Ok(out)
}

fn vector(command: &Command) -> Result<Vector3, InterpretError> {
    let [x, y, z] = values::<3>(command)?;
    Ok(Vector3::new(x, y, z))
}

fn unclaimed(command: &Command) {
    log::warn!(
        "line {}: nothing left to configure, ignoring '{}'",
        command.line,
        command
    );
}
