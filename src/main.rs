use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use rayshade::camera::Camera;
use rayshade::output::{save_image_as_exr, save_image_as_png, save_image_as_ppm, write_ppm};
use rayshade::scene::{load_scene, SceneConfig};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Where the rendered image goes, chosen from the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Stdout,
    Ppm,
    Png,
    Exr,
}

fn output_format(output: &str) -> Option<OutputFormat> {
    if output == "-" {
        return Some(OutputFormat::Stdout);
    }
    let extension = Path::new(output).extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "ppm" => Some(OutputFormat::Ppm),
        "png" => Some(OutputFormat::Png),
        "exr" => Some(OutputFormat::Exr),
        _ => None,
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(format) = output_format(&args.output) else {
        bail!(
            "Unsupported output '{}'. Use '-' for stdout or a .ppm, .png or .exr file.",
            args.output
        );
    };

    let scene = match &args.scene {
        Some(path) => load_scene(path).with_context(|| format!("failed to load scene {}", path))?,
        None => SceneConfig::demo(),
    };
    let world = scene.build_world();
    let settings = scene.camera_settings();

    let width = args.width;
    let height = args.height.unwrap_or_else(|| settings.image_height_for(width));
    info!("Image resolution: {}x{}, {} sphere(s)", width, height, world.len());

    let mut camera = Camera::new(width, height, settings);
    camera.show_progress = !args.no_progress;
    let image = camera.render(&world);

    match format {
        OutputFormat::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_ppm(&mut writer, &image).context("failed to write PPM to stdout")?;
        }
        OutputFormat::Ppm => save_image_as_ppm(&image, &args.output)
            .with_context(|| format!("failed to save PPM image {}", args.output))?,
        OutputFormat::Png => save_image_as_png(&image, &args.output)
            .with_context(|| format!("failed to save PNG image {}", args.output))?,
        OutputFormat::Exr => save_image_as_exr(&image, &args.output)
            .with_context(|| format!("failed to save EXR image {}", args.output))?,
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("rayshade - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_by_extension() {
        assert_eq!(output_format("-"), Some(OutputFormat::Stdout));
        assert_eq!(output_format("render.ppm"), Some(OutputFormat::Ppm));
        assert_eq!(output_format("out/render.PNG"), Some(OutputFormat::Png));
        assert_eq!(output_format("render.exr"), Some(OutputFormat::Exr));
        assert_eq!(output_format("render.jpg"), None);
        assert_eq!(output_format("render"), None);
    }

    #[test]
    fn unsupported_output_fails_before_rendering() {
        let args = Args::parse_from(["rayshade", "-o", "render.bmp", "--no-progress"]);
        let err = run(args).expect_err("bmp is not supported");
        assert!(err.to_string().contains("render.bmp"));
    }

    #[test]
    fn missing_scene_file_is_reported() {
        let args = Args::parse_from([
            "rayshade",
            "--scene",
            "no/such/scene.toml",
            "-o",
            "render.ppm",
            "--no-progress",
        ]);
        let err = run(args).expect_err("scene file does not exist");
        assert!(format!("{:#}", err).contains("no/such/scene.toml"));
    }

    #[test]
    fn renders_small_ppm_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("render.ppm");
        let path_str = path.to_str().expect("utf-8 path");
        let args = Args::parse_from([
            "rayshade",
            "--width",
            "8",
            "-o",
            path_str,
            "--no-progress",
        ]);
        run(args).expect("render succeeds");

        let text = std::fs::read_to_string(&path).expect("ppm written");
        // 8 / (16/9) = 4.5 rounds down to 4
        assert!(text.starts_with("P3\n8 4\n255\n"));
        assert_eq!(text.lines().count(), 3 + 8 * 4);
    }

    #[test]
    fn failed_write_fails_the_run() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no/such/dir/render.ppm");
        let path_str = path.to_str().expect("utf-8 path");
        let args = Args::parse_from(["rayshade", "--width", "4", "-o", path_str, "--no-progress"]);

        let err = run(args).expect_err("write failure should fail the run");
        assert!(format!("{:#}", err).contains("failed to save PPM image"));
        assert!(!path.exists());
    }
}
