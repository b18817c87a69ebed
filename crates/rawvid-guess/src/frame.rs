//! Frame geometry from file and folder names.
//!
//! Each name is lower-cased and run through a cascade of rules until one of
//! them yields a frame size:
//!
//! 1. `WxH_rate_depth`, `WxH_rate`, `WxH` (separator `x` or `*`)
//! 2. `1080pNN` / `720pNN` (size plus frame rate)
//! 3. Acronyms: `_cif`, `_qcif`, `_4cif`, `uhd`, `hd`, `1080p`, `720p`
//!
//! Once a size is known, the current name may also fill the frame rate, bit
//! depth and packed flag if they are still unknown. A name that is checked
//! while no size is known contributes nothing. The file name is tried before
//! the parent folder name and no field is overwritten once set.
//!
//! # Example
//!
//! ```rust
//! use rawvid_core::Size;
//! use rawvid_guess::{guess_frame_format, FileInfoForGuess};
//!
//! let info = FileInfoForGuess::new("clip_1280x720_50hz_10bit.yuv", "", None);
//! let guessed = guess_frame_format(&info);
//! assert_eq!(guessed.frame_size, Some(Size::new(1280, 720)));
//! assert_eq!(guessed.frame_rate, Some(50));
//! assert_eq!(guessed.bit_depth, Some(10));
//! ```

use crate::file_info::FileInfoForGuess;
use crate::patterns::GuessPatterns;
use rawvid_core::{DataLayout, Size};
use regex::{Captures, Regex};
use tracing::{debug, trace};

/// Acronyms checked as plain substrings, first hit wins.
const RESOLUTION_ACRONYMS: [(&str, Size); 7] = [
    ("_cif", Size::new(352, 288)),
    ("_qcif", Size::new(176, 144)),
    ("_4cif", Size::new(704, 576)),
    ("uhd", Size::new(3840, 2160)),
    ("hd", Size::new(1920, 1080)),
    ("1080p", Size::new(1920, 1080)),
    ("720p", Size::new(1280, 720)),
];

/// Frame geometry recovered from names. Unknown fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessedFrameFormat {
    /// Frame width and height.
    pub frame_size: Option<Size>,
    /// Frames per second.
    pub frame_rate: Option<u32>,
    /// Bits per sample.
    pub bit_depth: Option<u32>,
    /// Only ever set to [`DataLayout::Packed`].
    pub data_layout: Option<DataLayout>,
}

impl GuessedFrameFormat {
    /// True if no field is known.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Guesses frame geometry with the shared [`GuessPatterns`].
pub fn guess_frame_format(file_info: &FileInfoForGuess) -> GuessedFrameFormat {
    guess_frame_format_with(GuessPatterns::global(), file_info)
}

/// Guesses frame geometry from the file name, then the parent folder name.
///
/// Returns an empty result if the file name is empty.
pub fn guess_frame_format_with(
    patterns: &GuessPatterns,
    file_info: &FileInfoForGuess,
) -> GuessedFrameFormat {
    trace!(filename = %file_info.filename, "guess_frame_format");

    let mut result = GuessedFrameFormat::default();
    if file_info.filename.is_empty() {
        return result;
    }

    for name in file_info.lowercase_names() {
        if result.frame_size.is_none() {
            result = from_dimensions(patterns, &name);
        }
        if result.frame_size.is_none() {
            result = from_resolution_rate(patterns, &name);
        }
        if result.frame_size.is_none() {
            result.frame_size = from_acronym(&name);
        }
        if result.frame_size.is_none() {
            continue;
        }

        if result.frame_rate.is_none() {
            result.frame_rate = first_number(&patterns.frame_rate, &name);
        }
        if result.bit_depth.is_none() {
            result.bit_depth = patterns
                .bit_depth
                .iter()
                .find_map(|re| first_number(re, &name));
        }
        if result.data_layout.is_none() && patterns.packed.is_match(&name) {
            result.data_layout = Some(DataLayout::Packed);
        }
    }

    debug!(?result, "frame format");
    result
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn first_number(re: &Regex, name: &str) -> Option<u32> {
    re.captures(name).and_then(|caps| number(&caps, 1))
}

/// First matching dimension rule replaces the whole result.
fn from_dimensions(patterns: &GuessPatterns, name: &str) -> GuessedFrameFormat {
    let Some(caps) = patterns.dimensions.iter().find_map(|re| re.captures(name)) else {
        return GuessedFrameFormat::default();
    };
    let frame_size = match (number(&caps, 1), number(&caps, 2)) {
        (Some(width), Some(height)) => Some(Size::new(width, height)),
        _ => None,
    };
    GuessedFrameFormat {
        frame_size,
        frame_rate: number(&caps, 3),
        bit_depth: number(&caps, 4),
        data_layout: None,
    }
}

fn from_resolution_rate(patterns: &GuessPatterns, name: &str) -> GuessedFrameFormat {
    patterns
        .resolution_rates
        .iter()
        .find_map(|(re, size)| {
            re.captures(name).map(|caps| GuessedFrameFormat {
                frame_size: Some(*size),
                frame_rate: number(&caps, 1),
                ..Default::default()
            })
        })
        .unwrap_or_default()
}

fn from_acronym(name: &str) -> Option<Size> {
    RESOLUTION_ACRONYMS
        .iter()
        .find(|(acronym, _)| name.contains(acronym))
        .map(|(_, size)| *size)
}
