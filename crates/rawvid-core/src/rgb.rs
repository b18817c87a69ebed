//! RGB pixel formats.
//!
//! A [`PixelFormatRgb`] is a channel order, an optional alpha channel, the
//! bits per sample, the data layout and the byte order. Frame size is
//! `width * height * channels * bytes_per_sample` regardless of layout.
//!
//! ```rust
//! use rawvid_core::{AlphaMode, BytesPerFrame, ChannelOrder, PixelFormatRgb, Size};
//!
//! let bgra = PixelFormatRgb::new(ChannelOrder::Bgr, 8).with_alpha(AlphaMode::Last);
//! assert_eq!(bgra.name(), "BGRA 8-bit packed");
//! assert_eq!(bgra.bytes_per_frame(Size::new(2, 2)), 16);
//! ```

use crate::format::{bytes_per_sample, BytesPerFrame, DataLayout, Endianness};
use crate::named::NamedEnum;
use crate::named_enum;
use crate::size::Size;
use std::fmt;

/// Bit depths an RGB format can have.
pub const RGB_BIT_DEPTHS: [u32; 4] = [8, 10, 12, 16];

named_enum! {
    /// Order of the three color channels.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum ChannelOrder {
        /// Red, green, blue.
        Rgb => "RGB",
        /// Red, blue, green.
        Rbg => "RBG",
        /// Green, red, blue.
        Grb => "GRB",
        /// Green, blue, red.
        Gbr => "GBR",
        /// Blue, red, green.
        Brg => "BRG",
        /// Blue, green, red.
        Bgr => "BGR",
    }
}

/// Presence and position of an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaMode {
    /// Three channels.
    #[default]
    None,
    /// Alpha precedes the color channels.
    First,
    /// Alpha follows the color channels.
    Last,
}

/// An RGB pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelFormatRgb {
    /// Bits per sample, one of [`RGB_BIT_DEPTHS`] for a valid format.
    pub bits_per_sample: u32,
    /// Packed or planar.
    pub data_layout: DataLayout,
    /// Color channel order.
    pub channel_order: ChannelOrder,
    /// Alpha channel position.
    pub alpha_mode: AlphaMode,
    /// Byte order; always little for 8-bit formats.
    pub endianness: Endianness,
}

impl Default for PixelFormatRgb {
    /// 8-bit packed RGB without alpha.
    fn default() -> Self {
        Self::new(ChannelOrder::Rgb, 8)
    }
}

impl PixelFormatRgb {
    /// Packed, little-endian, no alpha.
    pub const fn new(channel_order: ChannelOrder, bits_per_sample: u32) -> Self {
        Self {
            bits_per_sample,
            data_layout: DataLayout::Packed,
            channel_order,
            alpha_mode: AlphaMode::None,
            endianness: Endianness::Little,
        }
    }

    /// Sets the alpha mode.
    pub const fn with_alpha(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    /// Sets the byte order. Ignored for 8-bit samples, which have none.
    pub const fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = if self.bits_per_sample > 8 {
            endianness
        } else {
            Endianness::Little
        };
        self
    }

    /// Sets the data layout.
    pub const fn with_data_layout(mut self, data_layout: DataLayout) -> Self {
        self.data_layout = data_layout;
        self
    }

    /// 3, or 4 with alpha.
    pub const fn nr_channels(&self) -> u64 {
        match self.alpha_mode {
            AlphaMode::None => 3,
            AlphaMode::First | AlphaMode::Last => 4,
        }
    }

    /// True if the bit depth is supported.
    pub fn is_valid(&self) -> bool {
        RGB_BIT_DEPTHS.contains(&self.bits_per_sample)
    }

    /// Channel letters including alpha, e.g. `ARGB`.
    pub fn channels_name(&self) -> String {
        let order = self.channel_order.name();
        match self.alpha_mode {
            AlphaMode::None => order.to_string(),
            AlphaMode::First => format!("A{order}"),
            AlphaMode::Last => format!("{order}A"),
        }
    }

    /// Human-readable description, e.g. `RGBA 16-bit BE planar`.
    pub fn name(&self) -> String {
        let mut name = format!("{} {}-bit", self.channels_name(), self.bits_per_sample);
        if self.bits_per_sample > 8 {
            name.push(' ');
            name.push_str(&self.endianness.suffix().to_ascii_uppercase());
        }
        name.push(' ');
        name.push_str(self.data_layout.name());
        name
    }
}

impl BytesPerFrame for PixelFormatRgb {
    fn bytes_per_frame(&self, size: Size) -> u64 {
        if !size.is_valid() || !self.is_valid() {
            return 0;
        }
        size.pixels()
            .checked_mul(self.nr_channels() * bytes_per_sample(self.bits_per_sample))
            .unwrap_or(0)
    }
}

impl fmt::Display for PixelFormatRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
