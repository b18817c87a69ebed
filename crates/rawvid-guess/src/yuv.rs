//! YUV pixel format from names and file size.
//!
//! Stages, first accepted candidate wins:
//!
//! 1. File extension: `.raw` (luma only) and `.v210`
//! 2. For the file name, then the parent folder name:
//!    - `nv12` / `nv21` (semi-planar 4:2:0)
//!    - FFmpeg pixel format names (`yuv420p10le`, `uyvy422`, `gray10le`, ...)
//!    - A bare subsampling (`420`) anywhere in the name
//! 3. Common planar formats checked against the file size only
//!
//! Every candidate has to pass [`matches_file_size`]. Candidate names are
//! generated lazily, so the search stops at the first hit.

use crate::file_info::FileInfoForGuess;
use crate::frame::GuessedFrameFormat;
use crate::oracle::matches_file_size;
use crate::patterns::GuessPatterns;
use rawvid_core::{
    DataLayout, NamedEnum, PackingOrder, PixelFormatYuv, PlaneOrder, PredefinedPixelFormat, Size,
    Subsampling, YUV_BIT_DEPTHS,
};
use std::path::Path;
use tracing::{debug, trace};

/// Planar name prefixes. `yuvj` is full-range YUV, same layout.
const PLANAR_TOKENS: [(&str, PlaneOrder); 5] = [
    ("yuv", PlaneOrder::Yuv),
    ("yuva", PlaneOrder::Yuva),
    ("yuvj", PlaneOrder::Yuv),
    ("yvu", PlaneOrder::Yvu),
    ("yvua", PlaneOrder::Yvua),
];

/// Suffixes marking interleaved chroma; empty means separate planes.
const UV_INTERLEAVE_TOKENS: [&str; 3] = ["uvi", "interlaced", ""];

/// Bit depths tried when the name gave none, most specific first.
const DETECTION_BIT_DEPTHS: [u32; 5] = [10, 12, 14, 16, 8];

const PACKED_SUBSAMPLINGS: [Subsampling; 5] = [
    Subsampling::Yuv444,
    Subsampling::Yuv422,
    Subsampling::Yuv422,
    Subsampling::Yuv444,
    Subsampling::Yuv400,
];

const PLANAR_SUBSAMPLINGS: [Subsampling; 4] = [
    Subsampling::Yuv420,
    Subsampling::Yuv422,
    Subsampling::Yuv444,
    Subsampling::Yuv400,
];

const SIZE_ONLY_SUBSAMPLINGS: [Subsampling; 3] =
    [Subsampling::Yuv420, Subsampling::Yuv444, Subsampling::Yuv422];

/// A format together with the name token that selects it.
type Candidate = (String, PixelFormatYuv);

/// Guesses a YUV pixel format with the shared [`GuessPatterns`].
pub fn guess_yuv_pixel_format(
    guessed: &GuessedFrameFormat,
    file_info: &FileInfoForGuess,
) -> Option<PixelFormatYuv> {
    guess_yuv_pixel_format_with(GuessPatterns::global(), guessed, file_info)
}

/// Guesses a YUV pixel format.
///
/// Returns `None` without a frame size or file name, or if no candidate
/// fits the file size.
pub fn guess_yuv_pixel_format_with(
    patterns: &GuessPatterns,
    guessed: &GuessedFrameFormat,
    file_info: &FileInfoForGuess,
) -> Option<PixelFormatYuv> {
    let frame_size = guessed.frame_size?;
    if file_info.filename.is_empty() {
        return None;
    }
    trace!(filename = %file_info.filename, %frame_size, "guess_yuv_pixel_format");

    let search = YuvSearch {
        patterns,
        guessed,
        frame_size,
        file_size: file_info.file_size,
    };

    let found = search.from_extension(&file_info.filename).or_else(|| {
        file_info.lowercase_names().iter().find_map(|name| {
            search
                .from_nv_indicator(name)
                .or_else(|| search.from_ffmpeg_name(name))
                .or_else(|| search.from_subsampling_indicator(name))
        })
    });
    let found = found.or_else(|| search.from_size_only());

    match &found {
        Some(format) => debug!(%format, "yuv format"),
        None => debug!("no yuv format"),
    }
    found
}

/// Bit depths to try: the known one, or all in detection order.
pub fn detection_bit_depths(known: Option<u32>) -> Vec<u32> {
    match known {
        Some(bits) => vec![bits],
        None => DETECTION_BIT_DEPTHS.to_vec(),
    }
}

/// Subsamplings to try: the detected one first, then the defaults for the
/// layout without the detected one.
pub fn detection_subsamplings(detected: Option<Subsampling>, packed: bool) -> Vec<Subsampling> {
    let defaults: &[Subsampling] = if packed {
        &PACKED_SUBSAMPLINGS
    } else {
        &PLANAR_SUBSAMPLINGS
    };
    detected
        .into_iter()
        .chain(defaults.iter().copied().filter(|s| Some(*s) != detected))
        .collect()
}

fn endianness_tokens(bits: u32) -> &'static [&'static str] {
    if bits > 8 { &["le", "be"] } else { &["le"] }
}

/// `10le` style suffix, empty for 8-bit.
fn depth_suffix(bits: u32, endian: &str) -> String {
    if bits > 8 {
        format!("{bits}{endian}")
    } else {
        String::new()
    }
}

/// `yuv420p10le`, plus `yuvp10le` when 4:2:0 was already found elsewhere
/// in the name.
fn planar_candidates<'a>(
    detected: Option<Subsampling>,
    bit_depths: &'a [u32],
) -> impl Iterator<Item = Candidate> + 'a {
    let subsamplings = detection_subsamplings(detected, false);
    PLANAR_TOKENS.into_iter().flat_map(move |(token, order)| {
        subsamplings.clone().into_iter().flat_map(move |subsampling| {
            bit_depths.iter().flat_map(move |&bits| {
                endianness_tokens(bits).iter().flat_map(move |&endian| {
                    UV_INTERLEAVE_TOKENS.into_iter().flat_map(move |interleave| {
                        let format = PixelFormatYuv::planar(subsampling, bits, order)
                            .with_big_endian(endian == "be")
                            .with_uv_interleaved(!interleave.is_empty());
                        let depth = depth_suffix(bits, endian);
                        let full = format!("{token}{}p{depth}{interleave}", subsampling.name());
                        let short = (Some(subsampling) == detected)
                            .then(|| format!("{token}p{depth}{interleave}"));
                        std::iter::once(full).chain(short).map(move |name| (name, format))
                    })
                })
            })
        })
    })
}

/// `uyvy422`, `yuva44416be`, plus the variant without the subsampling
/// when it was already found elsewhere in the name.
fn packed_candidates<'a>(
    detected: Option<Subsampling>,
    bit_depths: &'a [u32],
) -> impl Iterator<Item = Candidate> + 'a {
    detection_subsamplings(detected, true)
        .into_iter()
        .flat_map(move |subsampling| {
            subsampling.supported_packings().iter().flat_map(move |&packing| {
                bit_depths.iter().flat_map(move |&bits| {
                    endianness_tokens(bits).iter().flat_map(move |&endian| {
                        let format = PixelFormatYuv::packed(subsampling, bits, packing)
                            .with_big_endian(endian == "be");
                        let packing_name = packing.name().to_ascii_lowercase();
                        let depth = depth_suffix(bits, endian);
                        let full = format!("{packing_name}{}{depth}", subsampling.name());
                        let short = (Some(subsampling) == detected)
                            .then(|| format!("{packing_name}{depth}"));
                        std::iter::once(full).chain(short).map(move |name| (name, format))
                    })
                })
            })
        })
}

/// Inputs shared by every stage of one guess.
struct YuvSearch<'a> {
    patterns: &'a GuessPatterns,
    guessed: &'a GuessedFrameFormat,
    frame_size: Size,
    file_size: Option<u64>,
}

impl YuvSearch<'_> {
    fn fits(&self, format: &PixelFormatYuv) -> bool {
        matches_file_size(format, self.frame_size, self.file_size)
    }

    fn accept(&self, format: PixelFormatYuv) -> Option<PixelFormatYuv> {
        self.fits(&format).then_some(format)
    }

    /// First candidate whose token appears in `name` and that fits.
    fn first_match(
        &self,
        name: &str,
        mut candidates: impl Iterator<Item = Candidate>,
    ) -> Option<PixelFormatYuv> {
        candidates
            .find(|(token, format)| name.contains(token.as_str()) && self.fits(format))
            .map(|(_, format)| format)
    }

    fn bit_depths(&self) -> Vec<u32> {
        detection_bit_depths(self.guessed.bit_depth)
    }

    fn from_extension(&self, filename: &str) -> Option<PixelFormatYuv> {
        let extension = Path::new(filename).extension()?.to_str()?;
        match extension {
            // Raw bayer data: one sample per pixel.
            "raw" => self.accept(PixelFormatYuv::gray(self.guessed.bit_depth.unwrap_or(8))),
            "v210" | "V210" => {
                self.accept(PixelFormatYuv::predefined(PredefinedPixelFormat::V210))
            }
            _ => None,
        }
    }

    fn from_nv_indicator(&self, name: &str) -> Option<PixelFormatYuv> {
        let nv12 = PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv)
            .with_uv_interleaved(true);
        let nv21 = PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yvu)
            .with_uv_interleaved(true);
        [("nv12", nv12), ("nv21", nv21)]
            .into_iter()
            .find(|(token, format)| name.contains(token) && self.fits(format))
            .map(|(_, format)| format)
    }

    fn from_ffmpeg_name(&self, name: &str) -> Option<PixelFormatYuv> {
        let detected = self
            .patterns
            .subsampling
            .captures(name)
            .and_then(|caps| Subsampling::from_name(&caps[1]));
        trace!(?detected, name, "ffmpeg name search");

        let planar = || self.from_planar_name(name, detected);
        let packed = || self.from_packed_name(name, detected);
        let found = if self.guessed.data_layout == Some(DataLayout::Packed) {
            packed().or_else(planar)
        } else {
            planar().or_else(packed)
        };

        found
            .or_else(|| {
                let ayuv = PixelFormatYuv::packed(Subsampling::Yuv444, 16, PackingOrder::Ayuv);
                if name.contains("ayuv64le") { self.accept(ayuv) } else { None }
            })
            .or_else(|| {
                self.bit_depths()
                    .into_iter()
                    .filter(|bits| name.contains(&format!("gray{bits}le")))
                    .map(PixelFormatYuv::gray)
                    .find(|format| self.fits(format))
            })
    }

    fn from_planar_name(&self, name: &str, detected: Option<Subsampling>) -> Option<PixelFormatYuv> {
        let bit_depths = self.bit_depths();
        self.first_match(name, planar_candidates(detected, &bit_depths))
    }

    fn from_packed_name(&self, name: &str, detected: Option<Subsampling>) -> Option<PixelFormatYuv> {
        if self.patterns.v210.is_match(name) {
            let v210 = PixelFormatYuv::predefined(PredefinedPixelFormat::V210);
            if self.fits(&v210) {
                return Some(v210);
            }
        }
        let bit_depths = self.bit_depths();
        self.first_match(name, packed_candidates(detected, &bit_depths))
    }

    /// Any subsampling name in the file name, order YUV, little-endian.
    fn from_subsampling_indicator(&self, name: &str) -> Option<PixelFormatYuv> {
        let bit_depths = self.known_or_all_bit_depths();
        let packed = self.guessed.data_layout == Some(DataLayout::Packed);
        Subsampling::values()
            .filter(|subsampling| name.contains(subsampling.name()))
            .flat_map(|subsampling| {
                bit_depths.iter().map(move |&bits| {
                    if packed {
                        PixelFormatYuv::packed(subsampling, bits, PackingOrder::Yuv)
                    } else {
                        PixelFormatYuv::planar(subsampling, bits, PlaneOrder::Yuv)
                    }
                })
            })
            .find(|format| self.fits(format))
    }

    fn from_size_only(&self) -> Option<PixelFormatYuv> {
        let bit_depths = self.known_or_all_bit_depths();
        SIZE_ONLY_SUBSAMPLINGS
            .into_iter()
            .flat_map(|subsampling| {
                bit_depths
                    .iter()
                    .map(move |&bits| PixelFormatYuv::planar(subsampling, bits, PlaneOrder::Yuv))
            })
            .find(|format| self.fits(format))
    }

    fn known_or_all_bit_depths(&self) -> Vec<u32> {
        match self.guessed.bit_depth {
            Some(bits) => vec![bits],
            None => YUV_BIT_DEPTHS.to_vec(),
        }
    }
}
