use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "An interactive sphere ray caster in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Framebuffer width in pixels
    #[arg(long, default_value = "800", help = "Framebuffer width in pixels")]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value = "600", help = "Framebuffer height in pixels")]
    pub height: u32,

    /// Scene description file (the built-in demo scene when omitted)
    #[arg(short, long, help = "Scene description file")]
    pub scene: Option<String>,

    /// Generate a random scene with this many spheres instead of the demo
    #[arg(long, help = "Generate a random scene with this many spheres")]
    pub random: Option<u32>,

    /// Render a single frame to a PNG file instead of opening a window
    #[arg(short, long, help = "Render a single frame to this .png path and exit")]
    pub output: Option<String>,

    /// Run the rendering core isolated in a worker thread
    #[arg(long, help = "Run the rendering core isolated in a worker thread")]
    pub worker: bool,
}
