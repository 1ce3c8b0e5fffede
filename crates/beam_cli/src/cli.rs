use std::path::PathBuf;

use beam_renderer::SceneDescription;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "beamburst")]
#[command(about = "A minimal Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "example.png")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the maximum number of surface hits per pixel
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Only count occluders between a surface and the light
    #[arg(long)]
    pub bounded_shadows: bool,

    /// Print the scene description as JSON and exit
    #[arg(long)]
    pub print_scene: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a loaded description.
    pub fn apply_overrides(&self, description: &mut SceneDescription) {
        if let Some(width) = self.width {
            description.width = width;
        }
        if let Some(height) = self.height {
            description.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            description.max_depth = max_depth;
        }
        if self.bounded_shadows {
            description.bounded_shadows = true;
        }
    }
}
