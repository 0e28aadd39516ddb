use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "rayshade")]
#[command(about = "Cast one ray per pixel into a sphere scene and shade by surface normal")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels; derived from the camera aspect ratio when omitted
    #[arg(long, help = "Image height in pixels (default: width / aspect ratio)")]
    pub height: Option<u32>,

    /// TOML scene description; the built-in two-sphere scene is used when omitted
    #[arg(long, help = "TOML scene file (default: built-in two-sphere scene)")]
    pub scene: Option<String>,

    /// Output path: "-" for PPM on stdout, or a .ppm, .png or .exr file
    #[arg(short, long, default_value = "-", help = "Output path: '-' for PPM on stdout, or a .ppm/.png/.exr file")]
    pub output: String,

    /// Hide the scanline progress bar
    #[arg(long, help = "Hide the scanline progress bar")]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rayshade"]);
        assert_eq!(args.width, 400);
        assert_eq!(args.height, None);
        assert_eq!(args.output, "-");
        assert!(args.scene.is_none());
        assert!(!args.no_progress);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "rayshade",
            "--width",
            "256",
            "--height",
            "256",
            "--scene",
            "scenes/demo.toml",
            "-o",
            "out.png",
            "--debug-level",
            "trace",
            "--no-progress",
        ]);
        assert_eq!(args.width, 256);
        assert_eq!(args.height, Some(256));
        assert_eq!(args.scene.as_deref(), Some("scenes/demo.toml"));
        assert_eq!(args.output, "out.png");
        assert!(args.no_progress);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Trace);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
