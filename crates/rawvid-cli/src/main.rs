//! rawvid - Raw video format guessing tool
//!
//! Reports frame size, frame rate, bit depth and pixel format of headerless
//! YUV or RGB files, inferred from their names and sizes.
//!
//! # Usage
//!
//! ```bash
//! rawvid guess clip_1920x1080_yuv420p10le.yuv
//! rawvid guess --kind rgb capture_bgra/frame_0001.raw
//! rawvid guess --size 6220800 --json sample_1920x1080_nv12.yuv
//! rawvid names
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rawvid")]
#[command(author, version, about = "Guess the format of raw YUV/RGB video files")]
#[command(long_about = "Guess the frame size and pixel format of headerless raw video files \
from the file name, the parent folder name and the file size.\n\n\
Examples:\n  \
rawvid guess clip_1920x1080_yuv420p10le.yuv\n  \
rawvid guess --kind rgb capture_bgra/frame_0001.raw\n  \
rawvid guess --size 6220800 --json sample_1920x1080_nv12.yuv\n  \
rawvid names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess frame and pixel format of raw files
    #[command(visible_alias = "g")]
    Guess(GuessArgs),

    /// List the names recognized for subsampling, plane, packing and channel orders
    #[command(visible_alias = "n")]
    Names,
}

/// Pixel format family to guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PixelKind {
    /// Y'CbCr, planar or packed
    Yuv,
    /// RGB with optional alpha
    Rgb,
}

#[derive(Args)]
pub struct GuessArgs {
    /// Raw video file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Pixel format family
    #[arg(short, long, value_enum, default_value = "yuv")]
    kind: PixelKind,

    /// File size in bytes, used instead of the size on disk
    #[arg(short, long)]
    size: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// `-v` and `-vv` override `RUST_LOG`; without them `RUST_LOG` applies,
/// falling back to warnings only. Logs go to stderr.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Guess(args) => commands::guess::run(args, cli.verbose),
        Commands::Names => commands::names::run(),
    }
}
