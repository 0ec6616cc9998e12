use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{value_t, App, Arg};
use raytracer::scene::{RenderError, RenderOptions};
use thiserror::Error;

use crate::interpret::{InterpretError, Interpreter};

mod interpret;
mod tokenize;

/// Why one scene of a batch could not be rendered.
#[derive(Debug, Error)]
enum BatchError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Where the image for scene file `source` is written: the file stem with a
/// `.png` extension, inside `output_dir`.
fn output_path(source: &str, output_dir: &Path) -> PathBuf {
    let stem = Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_owned());

    output_dir.join(format!("{}.png", stem))
}

/// Load, render and save one scene. Every scene starts from a fresh scene and
/// camera, so nothing carries over between files.
fn render(source: &str, output_dir: &Path, options: &RenderOptions) -> Result<PathBuf, BatchError> {
    let now = Instant::now();
    let file = File::open(source).map_err(|source_err| BatchError::Open {
        path: source.to_owned(),
        source: source_err,
    })?;

    let (scene, mut camera) = Interpreter::new(BufReader::new(file))?.run()?;
    camera.configure(options.width, options.height);
    log::debug!("scene constructed in {}s", now.elapsed().as_secs_f32());

    let path = output_path(source, output_dir);
    scene.render_to(&camera, options, &path)?;
    log::debug!("scene complete in {}s", now.elapsed().as_secs_f32());

    Ok(path)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Raytracer Scene Renderer")
        .version("1.0")
        .about("Renders a batch of scene description files to PNG images")
        .arg(
            Arg::with_name("SCENES")
                .help("The scene files to render, in order")
                .required(true)
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .long("output-dir")
                .short("o")
                .help("The directory images are written to")
                .default_value("results")
                .required(false),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("The image width in pixels")
                .default_value("800")
                .required(false),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("The image height in pixels")
                .default_value("800")
                .required(false),
        )
        .get_matches();

    let options = RenderOptions {
        width: value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit()),
        height: value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit()),
    };

    let output_dir = PathBuf::from(matches.value_of("output").unwrap_or("results"));
    if let Err(e) = fs::create_dir_all(&output_dir) {
        log::error!("cannot create {}: {}", output_dir.display(), e);
        process::exit(1);
    }

    let sources: Vec<&str> = matches
        .values_of("SCENES")
        .map(|values| values.collect())
        .unwrap_or_default();

    let mut failed = 0;
    for source in sources.iter() {
        log::info!("processing {}", source);
        match render(source, &output_dir, &options) {
            Ok(path) => log::info!("saved {}", path.display()),
            Err(e) => {
                log::error!("failed to render {}: {}", source, e);
                failed += 1;
            }
        }
    }

    log::info!(
        "rendered {} of {} scenes",
        sources.len() - failed,
        sources.len()
    );

    if failed > 0 {
        process::exit(1);
    }
}
