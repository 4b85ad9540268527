use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render the Lumen demo scene with a Whitted ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Time budget per render slice in milliseconds (unbounded if omitted)
    #[arg(long)]
    pub budget_ms: Option<u64>,

    /// Maximum reflection depth (overrides the config file)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Trace the pixels of each row in parallel
    #[arg(long)]
    pub parallel: bool,

    /// JSON render configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image file to use as the floor texture
    #[arg(short, long)]
    pub texture: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
