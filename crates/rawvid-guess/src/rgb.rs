//! RGB pixel format from names and file size.
//!
//! Stages, first accepted candidate wins:
//!
//! 1. `.cmyk` extension (four 8-bit channels)
//! 2. A delimited format token in the file name, e.g. `_bgra_`, `_rgb16be_`
//! 3. The file extension as channel order, e.g. `.bgr`
//! 4. Stages 2 and 3 on the parent folder name
//! 5. 8-bit packed RGB, without any size check
//!
//! Stages 2 and 3 also look for a delimited `packed` or `planar` token to
//! set the data layout.

use crate::file_info::FileInfoForGuess;
use crate::frame::GuessedFrameFormat;
use crate::oracle::matches_file_size;
use crate::patterns::GuessPatterns;
use rawvid_core::{AlphaMode, ChannelOrder, DataLayout, NamedEnum, PixelFormatRgb, Size};
use std::path::Path;
use tracing::{debug, trace};

/// Guesses an RGB pixel format with the shared [`GuessPatterns`].
pub fn guess_rgb_pixel_format(
    guessed: &GuessedFrameFormat,
    file_info: &FileInfoForGuess,
) -> Option<PixelFormatRgb> {
    guess_rgb_pixel_format_with(GuessPatterns::global(), guessed, file_info)
}

/// Guesses an RGB pixel format.
///
/// Returns `None` only without a frame size or file name. If nothing in the
/// names fits, the result is plain 8-bit RGB whether or not it matches the
/// file size.
pub fn guess_rgb_pixel_format_with(
    patterns: &GuessPatterns,
    guessed: &GuessedFrameFormat,
    file_info: &FileInfoForGuess,
) -> Option<PixelFormatRgb> {
    let frame_size = guessed.frame_size?;
    if file_info.filename.is_empty() {
        return None;
    }
    trace!(filename = %file_info.filename, %frame_size, "guess_rgb_pixel_format");

    let search = RgbSearch {
        patterns,
        frame_size,
        file_size: file_info.file_size,
    };
    let [filename, parent] = file_info.lowercase_names();

    let found = search.from_cmyk_extension(&filename).or_else(|| {
        [filename.as_str(), parent.as_str()].into_iter().find_map(|name| {
            search
                .from_format_token(name)
                .or_else(|| search.from_extension(name))
        })
    });

    Some(match found {
        Some(format) => {
            debug!(%format, "rgb format");
            format
        }
        None => {
            let format = PixelFormatRgb::default();
            debug!(%format, "no rgb indicator, using default");
            format
        }
    })
}

struct RgbSearch<'a> {
    patterns: &'a GuessPatterns,
    frame_size: Size,
    file_size: Option<u64>,
}

impl RgbSearch<'_> {
    fn fits(&self, format: &PixelFormatRgb) -> bool {
        matches_file_size(format, self.frame_size, self.file_size)
    }

    /// Delimited `packed` / `planar` token, packed if there is none.
    fn data_layout(&self, name: &str) -> DataLayout {
        match self.patterns.rgb_layout.captures(name) {
            Some(caps) if &caps[1] == "planar" => DataLayout::Planar,
            _ => DataLayout::Packed,
        }
    }

    fn from_cmyk_extension(&self, filename: &str) -> Option<PixelFormatRgb> {
        if extension(filename)? != "cmyk" {
            return None;
        }
        let cmyk = PixelFormatRgb::new(ChannelOrder::Rgb, 8).with_alpha(AlphaMode::Last);
        self.fits(&cmyk).then_some(cmyk)
    }

    /// Only the leftmost token counts; if it does not fit, this stage fails.
    fn from_format_token(&self, name: &str) -> Option<PixelFormatRgb> {
        let caps = self.patterns.rgb_format.captures(name)?;
        let format = *self.patterns.rgb_tokens.get(&caps[1])?;
        if !self.fits(&format) {
            trace!(token = &caps[1], "rgb token rejected by size");
            return None;
        }
        Some(format.with_data_layout(self.data_layout(name)))
    }

    fn from_extension(&self, name: &str) -> Option<PixelFormatRgb> {
        let order = ChannelOrder::from_name_ignore_case(extension(name)?)?;
        let format = PixelFormatRgb::new(order, 8);
        self.fits(&format)
            .then(|| format.with_data_layout(self.data_layout(name)))
    }
}

fn extension(name: &str) -> Option<&str> {
    Path::new(name).extension()?.to_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(filename: &str, parent: &str, file_size: Option<u64>) -> Option<PixelFormatRgb> {
        let guessed = GuessedFrameFormat {
            frame_size: Some(Size::new(4, 4)),
            ..Default::default()
        };
        guess_rgb_pixel_format(&guessed, &FileInfoForGuess::new(filename, parent, file_size))
    }

    #[test]
    fn test_needs_frame_size_and_name() {
        let info = FileInfoForGuess::new("clip_rgb.raw", "", None);
        assert_eq!(guess_rgb_pixel_format(&GuessedFrameFormat::default(), &info), None);
        assert_eq!(guess("", "", None), None);
    }

    #[test]
    fn test_extension_as_channel_order() {
        let format = guess("clip.BGR", "", Some(4 * 4 * 3)).unwrap();
        assert_eq!(format.channel_order, ChannelOrder::Bgr);
        assert_eq!(format.data_layout, DataLayout::Packed);

        let format = guess("clip_planar.gbr", "", None).unwrap();
        assert_eq!(format.channel_order, ChannelOrder::Gbr);
        assert_eq!(format.data_layout, DataLayout::Planar);
    }

    #[test]
    fn test_parent_folder() {
        let format = guess("clip.raw", "set_bgra_planar", Some(4 * 4 * 4)).unwrap();
        assert_eq!(format.channel_order, ChannelOrder::Bgr);
        assert_eq!(format.alpha_mode, AlphaMode::Last);
        // The trailing `planar` has no delimiter after it.
        assert_eq!(format.data_layout, DataLayout::Packed);

        let format = guess("clip.raw", "dump.brg", None).unwrap();
        assert_eq!(format.channel_order, ChannelOrder::Brg);
    }

    #[test]
    fn test_filename_before_parent() {
        let format = guess("clip_rgb.raw", "set_bgr_", None).unwrap();
        assert_eq!(format.channel_order, ChannelOrder::Rgb);
    }

    #[test]
    fn test_default_is_not_size_checked() {
        let format = guess("clip.raw", "", Some(7)).unwrap();
        assert_eq!(format, PixelFormatRgb::default());
    }
}
