//! # rawvid-guess
//!
//! Infers the frame geometry and pixel format of headerless raw video files
//! from the file name, the parent folder name and the file size.
//!
//! Nothing here reads file content. Names are searched for conventional
//! markers (`1920x1080`, `_60hz`, `10bit`, `yuv420p10le`, `_bgra_`, ...) and
//! every candidate pixel format must divide the file size into whole frames.
//!
//! # Pipeline
//!
//! 1. [`guess_frame_format`] - size, frame rate, bit depth, packed hint
//! 2. Either [`guess_yuv_pixel_format`] or [`guess_rgb_pixel_format`],
//!    depending on what the caller expects the file to contain
//!
//! # Example
//!
//! ```rust
//! use rawvid_core::{PlaneOrder, Size, Subsampling, YuvOrder};
//! use rawvid_guess::{guess_frame_format, guess_yuv_pixel_format, FileInfoForGuess};
//!
//! let frame = 1920 * 1080 * 3; // 4:2:0, 16 bits per sample
//! let info = FileInfoForGuess::new("clip_1920x1080_yuv420p10le.yuv", "", Some(frame * 5));
//!
//! let guessed = guess_frame_format(&info);
//! assert_eq!(guessed.frame_size, Some(Size::new(1920, 1080)));
//!
//! let format = guess_yuv_pixel_format(&guessed, &info).unwrap();
//! assert_eq!(format.subsampling, Subsampling::Yuv420);
//! assert_eq!(format.bits_per_sample, 10);
//! assert_eq!(format.order, YuvOrder::Planar(PlaneOrder::Yuv));
//! ```
//!
//! # Dependencies
//!
//! - [`regex`] - Name pattern matching
//! - [`tracing`] - Diagnostics for each stage and candidate
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`FileInfoForGuess`] and [`GuessedFrameFormat`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod file_info;
pub mod frame;
pub mod oracle;
pub mod patterns;
pub mod rgb;
pub mod yuv;

pub use file_info::FileInfoForGuess;
pub use frame::{guess_frame_format, guess_frame_format_with, GuessedFrameFormat};
pub use oracle::matches_file_size;
pub use patterns::GuessPatterns;
pub use rgb::{guess_rgb_pixel_format, guess_rgb_pixel_format_with};
pub use yuv::{guess_yuv_pixel_format, guess_yuv_pixel_format_with};
