//! File-size validation.
//!
//! A raw file holds a whole number of frames, so a candidate pixel format
//! is only plausible if the file size is a multiple of its frame size.

use rawvid_core::{BytesPerFrame, Size};
use tracing::trace;

/// True if a file of `file_size` bytes can hold whole frames of `format` at
/// `frame_size`.
///
/// Unknown file size always matches. A format that cannot be laid out at
/// this size (bytes per frame of 0) never does.
///
/// ```rust
/// use rawvid_core::{ChannelOrder, PixelFormatRgb, Size};
/// use rawvid_guess::matches_file_size;
///
/// let rgb = PixelFormatRgb::new(ChannelOrder::Rgb, 8);
/// let size = Size::new(4, 4);
/// assert!(matches_file_size(&rgb, size, Some(48 * 10)));
/// assert!(!matches_file_size(&rgb, size, Some(50)));
/// assert!(matches_file_size(&rgb, size, None));
/// ```
pub fn matches_file_size<F: BytesPerFrame + ?Sized>(
    format: &F,
    frame_size: Size,
    file_size: Option<u64>,
) -> bool {
    let Some(file_size) = file_size else {
        return true;
    };
    let bytes_per_frame = format.bytes_per_frame(frame_size);
    if bytes_per_frame == 0 {
        return false;
    }
    let fits = file_size % bytes_per_frame == 0;
    trace!(bytes_per_frame, file_size, fits, "size check");
    fits
}
