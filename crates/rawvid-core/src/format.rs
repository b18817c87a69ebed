//! Attributes shared by the YUV and RGB pixel formats.
//!
//! # Types
//!
//! - [`DataLayout`] - Packed (interleaved samples) or planar (separate planes)
//! - [`Endianness`] - Byte order of multi-byte samples
//! - [`BytesPerFrame`] - Size of one frame under a pixel format; the quantity
//!   a raw file's length must be a multiple of

use crate::size::Size;
use std::fmt;

/// Sample arrangement in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataLayout {
    /// All components of a pixel are stored next to each other.
    #[default]
    Packed,
    /// Each component is stored in its own contiguous plane.
    Planar,
}

impl DataLayout {
    /// Lower-case name, as used in file names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Packed => "packed",
            Self::Planar => "planar",
        }
    }
}

impl fmt::Display for DataLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of samples wider than 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// FFmpeg-style suffix (`le` / `be`).
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Little => "le",
            Self::Big => "be",
        }
    }
}

/// Number of bytes a single frame occupies under a pixel format.
///
/// Implementations return 0 when the format is invalid, cannot be laid
/// out at the given size or the byte count overflows `u64`; callers treat 0
/// as "never matches".
pub trait BytesPerFrame {
    /// Bytes of one frame of `size` pixels.
    fn bytes_per_frame(&self, size: Size) -> u64;
}

/// Storage bytes for one sample of `bits` bits.
#[inline]
pub const fn bytes_per_sample(bits: u32) -> u64 {
    (bits as u64).div_ceil(8)
}
