//! # rawvid-core
//!
//! Core types for describing headerless raw video files.
//!
//! A raw `.yuv` or `.rgb` file is just frames of samples back to back. To
//! read one you need its frame geometry and pixel format; this crate models
//! both and computes the size of one frame:
//!
//! - [`Size`] - Frame width and height
//! - [`PixelFormatYuv`] - Subsampling, bit depth, plane/packing order, endianness
//! - [`PixelFormatRgb`] - Channel order, alpha, bit depth, layout, endianness
//! - [`BytesPerFrame`] - Bytes one frame occupies under a pixel format
//! - [`NamedEnum`] / [`named_enum!`] - Bidirectional enum <-> name registry
//!
//! ## Crate Structure
//!
//! ```text
//! rawvid-core (this crate)
//!    ^
//!    |
//!    +-- rawvid-guess (name heuristics)
//!          ^
//!          |
//!          +-- rawvid-cli (`rawvid` binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod named;
pub mod rgb;
pub mod size;
pub mod yuv;

// Re-exports for convenience
pub use error::*;
pub use format::*;
pub use named::NamedEnum;
pub use rgb::*;
pub use size::*;
pub use yuv::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rawvid_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{BytesPerFrame, DataLayout, Endianness};
    pub use crate::named::NamedEnum;
    pub use crate::rgb::{AlphaMode, ChannelOrder, PixelFormatRgb};
    pub use crate::size::Size;
    pub use crate::yuv::{
        PackingOrder, PixelFormatYuv, PlaneOrder, PredefinedPixelFormat, Subsampling, YuvOrder,
    };
}
