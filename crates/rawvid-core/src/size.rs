//! Frame dimensions.

use std::fmt;

/// Width and height of a video frame in pixels.
///
/// A size with a zero dimension is representable but not
/// [valid](Size::is_valid): every bytes-per-frame computation returns 0 for
/// it, so no pixel format ever matches a file size at that geometry.
///
/// # Example
///
/// ```rust
/// use rawvid_core::Size;
///
/// let hd = Size::new(1920, 1080);
/// assert!(hd.is_valid());
/// assert_eq!(hd.pixels(), 2_073_600);
/// assert_eq!(hd.to_string(), "1920x1080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if both dimensions are non-zero.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of pixels, computed in 64 bits.
    #[inline]
    pub const fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
