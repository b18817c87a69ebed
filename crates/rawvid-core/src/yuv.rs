//! YUV pixel formats.
//!
//! A [`PixelFormatYuv`] describes how Y'CbCr samples of a raw frame are
//! laid out: chroma subsampling, bits per sample, plane or packing order,
//! byte order and whether the two chroma planes are interleaved
//! (semi-planar, as in NV12).
//!
//! # Frame size
//!
//! Planar formats store a full-resolution luma plane followed by two chroma
//! planes reduced by the subsampling divisors (and an optional alpha plane).
//! Packed formats interleave samples; only 4:4:4 and 4:2:2 can be packed.
//!
//! ```rust
//! use rawvid_core::{BytesPerFrame, PixelFormatYuv, PlaneOrder, Size, Subsampling};
//!
//! let fmt = PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv);
//! assert_eq!(fmt.bytes_per_frame(Size::new(1920, 1080)), 1920 * 1080 * 3 / 2);
//! ```

use crate::format::{bytes_per_sample, BytesPerFrame, DataLayout};
use crate::named::NamedEnum;
use crate::named_enum;
use crate::size::Size;
use std::fmt;

/// Bit depths a YUV format can have.
pub const YUV_BIT_DEPTHS: [u32; 6] = [8, 9, 10, 12, 14, 16];

named_enum! {
    /// Chroma subsampling relative to luma.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Subsampling {
        /// Full chroma resolution.
        Yuv444 => "444",
        /// Chroma halved horizontally.
        Yuv422 => "422",
        /// Chroma halved in both directions.
        Yuv420 => "420",
        /// Luma only.
        Yuv400 => "400",
    }
}

impl Subsampling {
    /// Ratio notation, e.g. `4:2:0`.
    pub const fn ratio(&self) -> &'static str {
        match self {
            Self::Yuv444 => "4:4:4",
            Self::Yuv422 => "4:2:2",
            Self::Yuv420 => "4:2:0",
            Self::Yuv400 => "4:0:0",
        }
    }

    /// Horizontal and vertical chroma divisors, `None` without chroma.
    pub const fn chroma_divisors(&self) -> Option<(u64, u64)> {
        match self {
            Self::Yuv444 => Some((1, 1)),
            Self::Yuv422 => Some((2, 1)),
            Self::Yuv420 => Some((2, 2)),
            Self::Yuv400 => None,
        }
    }

    /// Packing orders that exist for this subsampling.
    pub const fn supported_packings(&self) -> &'static [PackingOrder] {
        match self {
            Self::Yuv444 => &[
                PackingOrder::Yuv,
                PackingOrder::Yvu,
                PackingOrder::Ayuv,
                PackingOrder::Yuva,
                PackingOrder::Vuya,
            ],
            Self::Yuv422 => &[
                PackingOrder::Uyvy,
                PackingOrder::Vyuy,
                PackingOrder::Yuyv,
                PackingOrder::Yvyu,
            ],
            Self::Yuv420 | Self::Yuv400 => &[],
        }
    }
}

named_enum! {
    /// Order of the planes of a planar format.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum PlaneOrder {
        /// Y, U, V.
        Yuv => "YUV",
        /// Y, V, U.
        Yvu => "YVU",
        /// Y, U, V, alpha.
        Yuva => "YUVA",
        /// Y, V, U, alpha.
        Yvua => "YVUA",
    }
}

impl PlaneOrder {
    /// True if an alpha plane follows the chroma planes.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Yuva | Self::Yvua)
    }
}

named_enum! {
    /// Sample order within one packed unit.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum PackingOrder {
        /// 4:4:4 Y U V.
        Yuv => "YUV",
        /// 4:4:4 Y V U.
        Yvu => "YVU",
        /// 4:4:4 alpha Y U V.
        Ayuv => "AYUV",
        /// 4:4:4 Y U V alpha.
        Yuva => "YUVA",
        /// 4:4:4 V U Y alpha.
        Vuya => "VUYA",
        /// 4:2:2 U Y V Y.
        Uyvy => "UYVY",
        /// 4:2:2 Y U Y V.
        Yuyv => "YUYV",
        /// 4:2:2 Y V Y U.
        Yvyu => "YVYU",
        /// 4:2:2 V Y U Y.
        Vyuy => "VYUY",
    }
}

impl PackingOrder {
    /// True if the packed unit carries an alpha sample.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Ayuv | Self::Yuva | Self::Vuya)
    }
}

named_enum! {
    /// Formats with a fixed layout that does not follow the generic rules.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum PredefinedPixelFormat {
        /// 10-bit 4:2:2, three samples in each 32-bit word, lines padded to
        /// 48 pixels.
        V210 => "V210",
    }
}

/// Position of chroma samples relative to luma, in 1/2 luma sample units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromaOffset {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

/// Plane order of a planar format or packing order of a packed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YuvOrder {
    /// Separate planes in this order.
    Planar(PlaneOrder),
    /// Interleaved samples in this order.
    Packed(PackingOrder),
}

impl YuvOrder {
    /// Layout implied by the order kind.
    pub const fn data_layout(&self) -> DataLayout {
        match self {
            Self::Planar(_) => DataLayout::Planar,
            Self::Packed(_) => DataLayout::Packed,
        }
    }

    /// True if the order includes alpha.
    pub const fn has_alpha(&self) -> bool {
        match self {
            Self::Planar(order) => order.has_alpha(),
            Self::Packed(order) => order.has_alpha(),
        }
    }

    /// Canonical name of the wrapped order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planar(order) => order.name(),
            Self::Packed(order) => order.name(),
        }
    }
}

/// A YUV pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelFormatYuv {
    /// Chroma subsampling.
    pub subsampling: Subsampling,
    /// Bits per sample, one of [`YUV_BIT_DEPTHS`] for a valid format.
    pub bits_per_sample: u32,
    /// Plane or packing order (this also decides packed vs. planar).
    pub order: YuvOrder,
    /// Samples wider than 8 bits are stored big-endian.
    pub big_endian: bool,
    /// Chroma sample position, if known.
    pub chroma_offset: Option<ChromaOffset>,
    /// U and V are interleaved in a single chroma plane (semi-planar).
    pub uv_interleaved: bool,
    /// Set for formats with a fixed special layout.
    pub predefined: Option<PredefinedPixelFormat>,
}

impl PixelFormatYuv {
    /// Planar format, little-endian, separate chroma planes.
    pub const fn planar(subsampling: Subsampling, bits_per_sample: u32, order: PlaneOrder) -> Self {
        Self {
            subsampling,
            bits_per_sample,
            order: YuvOrder::Planar(order),
            big_endian: false,
            chroma_offset: None,
            uv_interleaved: false,
            predefined: None,
        }
    }

    /// Packed format, little-endian.
    pub const fn packed(
        subsampling: Subsampling,
        bits_per_sample: u32,
        order: PackingOrder,
    ) -> Self {
        Self {
            subsampling,
            bits_per_sample,
            order: YuvOrder::Packed(order),
            big_endian: false,
            chroma_offset: None,
            uv_interleaved: false,
            predefined: None,
        }
    }

    /// Luma-only format (4:0:0 planar).
    pub const fn gray(bits_per_sample: u32) -> Self {
        Self::planar(Subsampling::Yuv400, bits_per_sample, PlaneOrder::Yuv)
    }

    /// One of the formats with a fixed layout.
    pub const fn predefined(format: PredefinedPixelFormat) -> Self {
        match format {
            PredefinedPixelFormat::V210 => Self {
                predefined: Some(PredefinedPixelFormat::V210),
                ..Self::packed(Subsampling::Yuv422, 10, PackingOrder::Uyvy)
            },
        }
    }

    /// Sets the byte order.
    pub const fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    /// Sets the chroma interleave flag.
    pub const fn with_uv_interleaved(mut self, uv_interleaved: bool) -> Self {
        self.uv_interleaved = uv_interleaved;
        self
    }

    /// Sets the chroma sample position.
    pub const fn with_chroma_offset(mut self, offset: ChromaOffset) -> Self {
        self.chroma_offset = Some(offset);
        self
    }

    /// Packed or planar.
    pub const fn data_layout(&self) -> DataLayout {
        self.order.data_layout()
    }

    /// True for a planar format.
    pub const fn is_planar(&self) -> bool {
        matches!(self.order, YuvOrder::Planar(_))
    }

    /// True if the bit depth is supported (predefined formats always are).
    pub fn is_valid(&self) -> bool {
        self.predefined.is_some() || YUV_BIT_DEPTHS.contains(&self.bits_per_sample)
    }

    /// Human-readable description, e.g. `YUV 4:2:0 10-bit LE planar`.
    pub fn name(&self) -> String {
        if let Some(predefined) = self.predefined {
            return predefined.name().to_string();
        }
        let mut name = format!(
            "{} {} {}-bit",
            self.order.name(),
            self.subsampling.ratio(),
            self.bits_per_sample
        );
        if self.bits_per_sample > 8 {
            name.push_str(if self.big_endian { " BE" } else { " LE" });
        }
        name.push(' ');
        name.push_str(self.data_layout().name());
        if self.uv_interleaved {
            name.push_str(" UV-interleaved");
        }
        name
    }

    fn planar_bytes(&self, size: Size) -> Option<u64> {
        let bps = bytes_per_sample(self.bits_per_sample);
        let luma = size.pixels().checked_mul(bps)?;
        let chroma = match self.subsampling.chroma_divisors() {
            Some((dx, dy)) => (size.width as u64 / dx)
                .checked_mul(size.height as u64 / dy)?
                .checked_mul(2 * bps)?,
            None => 0,
        };
        let alpha = if self.order.has_alpha() { luma } else { 0 };
        luma.checked_add(chroma)?.checked_add(alpha)
    }

    /// Frame size in bytes, `None` if it does not fit in `u64`.
    fn checked_bytes_per_frame(&self, size: Size) -> Option<u64> {
        if let Some(PredefinedPixelFormat::V210) = self.predefined {
            let aligned_width = (size.width as u64).div_ceil(48) * 48;
            return (aligned_width / 6 * 16).checked_mul(size.height as u64);
        }

        match self.order {
            // Byte aligned packed samples: no per-plane rounding.
            YuvOrder::Packed(packing) if self.bits_per_sample % 8 == 0 => {
                let bps = bytes_per_sample(self.bits_per_sample);
                match self.subsampling {
                    Subsampling::Yuv444 => {
                        let samples = if packing.has_alpha() { 4 } else { 3 };
                        size.pixels().checked_mul(samples * bps)
                    }
                    // Two pixels share one U and one V sample.
                    Subsampling::Yuv422 => (size.pixels() / 2).checked_mul(4 * bps),
                    Subsampling::Yuv420 | Subsampling::Yuv400 => Some(0),
                }
            }
            _ => self.planar_bytes(size),
        }
    }
}

impl BytesPerFrame for PixelFormatYuv {
    fn bytes_per_frame(&self, size: Size) -> u64 {
        if !size.is_valid() || !self.is_valid() {
            return 0;
        }
        self.checked_bytes_per_frame(size).unwrap_or(0)
    }
}

impl fmt::Display for PixelFormatYuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
