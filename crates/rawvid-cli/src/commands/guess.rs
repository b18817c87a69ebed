//! Guess command - infer frame and pixel format from names and sizes

use crate::{GuessArgs, PixelKind};
use anyhow::Result;
use rawvid_core::{BytesPerFrame, PixelFormatRgb, PixelFormatYuv};
use rawvid_guess::{
    guess_frame_format, guess_rgb_pixel_format, guess_yuv_pixel_format, FileInfoForGuess,
    GuessedFrameFormat,
};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, trace, warn};

use super::{file_info, format_size, or_dash};

/// Guessed pixel format of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PixelFormat {
    /// Y'CbCr format
    Yuv(PixelFormatYuv),
    /// RGB format
    Rgb(PixelFormatRgb),
}

impl PixelFormat {
    fn bytes_per_frame(&self, guessed: &GuessedFrameFormat) -> Option<u64> {
        let size = guessed.frame_size?;
        let bytes = match self {
            Self::Yuv(format) => format.bytes_per_frame(size),
            Self::Rgb(format) => format.bytes_per_frame(size),
        };
        (bytes > 0).then_some(bytes)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yuv(format) => write!(f, "{format}"),
            Self::Rgb(format) => write!(f, "{format}"),
        }
    }
}

/// Everything guessed about one file.
#[derive(Debug, Clone, Serialize)]
pub struct GuessReport {
    /// Path as given on the command line
    pub path: String,
    /// Evidence the guess was made from
    pub file_info: FileInfoForGuess,
    /// Frame geometry hints
    pub frame: GuessedFrameFormat,
    /// Pixel format, if one could be determined
    pub pixel_format: Option<PixelFormat>,
    /// Bytes of one frame in `pixel_format`
    pub bytes_per_frame: Option<u64>,
    /// Whole frames in the file
    pub frame_count: Option<u64>,
}

impl GuessReport {
    /// Run the frame guesser, then the pixel format guesser for `kind`.
    pub fn new(path: &Path, file_info: FileInfoForGuess, kind: PixelKind) -> Self {
        let frame = guess_frame_format(&file_info);
        let pixel_format = match kind {
            PixelKind::Yuv => guess_yuv_pixel_format(&frame, &file_info).map(PixelFormat::Yuv),
            PixelKind::Rgb => guess_rgb_pixel_format(&frame, &file_info).map(PixelFormat::Rgb),
        };
        let bytes_per_frame = pixel_format.and_then(|p| p.bytes_per_frame(&frame));
        let frame_count = match (file_info.file_size, bytes_per_frame) {
            (Some(file_size), Some(bytes)) => Some(file_size / bytes),
            _ => None,
        };

        Self {
            path: path.display().to_string(),
            file_info,
            frame,
            pixel_format,
            bytes_per_frame,
            frame_count,
        }
    }

    /// Human readable summary, one field per line.
    pub fn to_text(&self, verbose: u8) -> String {
        let mut lines = vec![
            self.path.clone(),
            format!("  File size:    {}", or_dash(self.file_info.file_size.map(format_size))),
            format!("  Frame size:   {}", or_dash(self.frame.frame_size)),
            format!("  Frame rate:   {}", or_dash(self.frame.frame_rate)),
            format!("  Bit depth:    {}", or_dash(self.frame.bit_depth)),
            format!("  Layout hint:  {}", or_dash(self.frame.data_layout)),
            format!("  Pixel format: {}", or_dash(self.pixel_format)),
        ];
        if verbose > 0 {
            lines.push(format!("  Frame bytes:  {}", or_dash(self.bytes_per_frame)));
            lines.push(format!("  Frames:       {}", or_dash(self.frame_count)));
            lines.push(format!("  Parent:       {}", self.file_info.parent_folder_name));
        }
        lines.join("\n")
    }
}

pub fn run(args: GuessArgs, verbose: u8) -> Result<()> {
    trace!(inputs = args.input.len(), kind = ?args.kind, "guess::run");

    let mut reports = Vec::with_capacity(args.input.len());
    for path in &args.input {
        let info = file_info(path, args.size)?;
        if info.file_size.is_none() {
            warn!(path = %path.display(), "file size unknown, size checks disabled");
        }
        debug!(filename = %info.filename, parent = %info.parent_folder_name, size = ?info.file_size, "evidence");

        let report = GuessReport::new(path, info, args.kind);
        match report.pixel_format {
            Some(format) => info!(path = %report.path, %format, "guessed"),
            None => info!(path = %report.path, "no pixel format fits"),
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let text: Vec<String> = reports.iter().map(|r| r.to_text(verbose)).collect();
        println!("{}", text.join("\n\n"));
    }
    Ok(())
}
