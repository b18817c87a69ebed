//! RGB pixel format guessing from names and file size.

use rawvid_core::{AlphaMode, ChannelOrder, DataLayout, Endianness, PixelFormatRgb, Size};
use rawvid_guess::{guess_frame_format, guess_rgb_pixel_format, FileInfoForGuess, GuessedFrameFormat};

/// Twelve 8-bit RGB frames.
const BYTES_NO_ALPHA: u64 = 1920 * 1080 * 12 * 3;
const NOT_ENOUGH_BYTES: u64 = 22;
const UNFITTING_BYTES: u64 = 1920 * 1080 * 5;

fn hd() -> GuessedFrameFormat {
    GuessedFrameFormat {
        frame_size: Some(Size::new(1920, 1080)),
        ..Default::default()
    }
}

fn rgb(bits: u32, order: ChannelOrder) -> PixelFormatRgb {
    PixelFormatRgb::new(order, bits)
}

fn check(cases: &[(&str, u64, PixelFormatRgb)]) {
    for (filename, file_size, want) in cases {
        let info = FileInfoForGuess::new(*filename, "", Some(*file_size));
        let got = guess_rgb_pixel_format(&hd(), &info).expect("frame size is known");
        assert!(got.is_valid(), "filename: {filename}");
        assert_eq!(got, *want, "filename: {filename}");
    }
}

#[test]
fn no_indicator_gives_default() {
    let info = FileInfoForGuess::new("noIndicatorHere.yuv", "", Some(0));
    let guessed = GuessedFrameFormat {
        frame_size: Some(Size::new(0, 0)),
        ..Default::default()
    };
    assert_eq!(guess_rgb_pixel_format(&guessed, &info), Some(PixelFormatRgb::default()));

    check(&[("something_1920x1080.yuv", BYTES_NO_ALPHA, PixelFormatRgb::default())]);
}

#[test]
fn no_frame_size_gives_nothing() {
    let info = FileInfoForGuess::new("something_rgb.yuv", "", None);
    assert_eq!(guess_rgb_pixel_format(&GuessedFrameFormat::default(), &info), None);
}

#[test]
fn channel_orders_without_alpha() {
    use ChannelOrder::*;
    check(&[
        ("something_1920x1080_rgb.yuv", BYTES_NO_ALPHA, rgb(8, Rgb)),
        ("something_1920x1080_rbg.yuv", BYTES_NO_ALPHA, rgb(8, Rbg)),
        ("something_1920x1080_grb.yuv", BYTES_NO_ALPHA, rgb(8, Grb)),
        ("something_1920x1080_gbr.yuv", BYTES_NO_ALPHA, rgb(8, Gbr)),
        ("something_1920x1080_brg.yuv", BYTES_NO_ALPHA, rgb(8, Brg)),
        ("something_1920x1080_bgr.yuv", BYTES_NO_ALPHA, rgb(8, Bgr)),
    ]);
}

#[test]
fn alpha_first() {
    use ChannelOrder::*;
    let first = |order| rgb(8, order).with_alpha(AlphaMode::First);
    check(&[
        ("something_1920x1080_argb.yuv", BYTES_NO_ALPHA, first(Rgb)),
        ("something_1920x1080_arbg.yuv", BYTES_NO_ALPHA, first(Rbg)),
        ("something_1920x1080_agrb.yuv", BYTES_NO_ALPHA, first(Grb)),
        ("something_1920x1080_agbr.yuv", BYTES_NO_ALPHA, first(Gbr)),
        ("something_1920x1080_abrg.yuv", BYTES_NO_ALPHA, first(Brg)),
        ("something_1920x1080_abgr.yuv", BYTES_NO_ALPHA, first(Bgr)),
    ]);
}

#[test]
fn alpha_last() {
    use ChannelOrder::*;
    let last = |order| rgb(8, order).with_alpha(AlphaMode::Last);
    check(&[
        ("something_1920x1080_rgba.yuv", BYTES_NO_ALPHA, last(Rgb)),
        ("something_1920x1080_rbga.yuv", BYTES_NO_ALPHA, last(Rbg)),
        ("something_1920x1080_grba.yuv", BYTES_NO_ALPHA, last(Grb)),
        ("something_1920x1080_gbra.yuv", BYTES_NO_ALPHA, last(Gbr)),
        ("something_1920x1080_brga.yuv", BYTES_NO_ALPHA, last(Brg)),
        ("something_1920x1080_bgra.yuv", BYTES_NO_ALPHA, last(Bgr)),
    ]);
}

#[test]
fn bit_depths() {
    use ChannelOrder::Rgb;
    check(&[
        ("something_1920x1080_rgb10.yuv", BYTES_NO_ALPHA, rgb(10, Rgb)),
        ("something_1920x1080_rgb12.yuv", BYTES_NO_ALPHA, rgb(12, Rgb)),
        ("something_1920x1080_rgb16.yuv", BYTES_NO_ALPHA, rgb(16, Rgb)),
        ("something_1920x1080_rgb48.yuv", BYTES_NO_ALPHA, rgb(16, Rgb)),
        ("something_1920x1080_rgb64.yuv", BYTES_NO_ALPHA, rgb(16, Rgb)),
        ("something_1920x1080_rgb11.yuv", BYTES_NO_ALPHA, rgb(8, Rgb)),
    ]);
}

#[test]
fn endianness() {
    use ChannelOrder::Rgb;
    let big = |bits| rgb(bits, Rgb).with_endianness(Endianness::Big);
    check(&[
        ("something_1920x1080_rgb8le.yuv", BYTES_NO_ALPHA, rgb(8, Rgb)),
        ("something_1920x1080_rgb8be.yuv", BYTES_NO_ALPHA, rgb(8, Rgb)),
        ("something_1920x1080_rgb10le.yuv", BYTES_NO_ALPHA, rgb(10, Rgb)),
        ("something_1920x1080_rgb10be.yuv", BYTES_NO_ALPHA, big(10)),
        ("something_1920x1080_rgb16be.yuv", BYTES_NO_ALPHA, big(16)),
    ]);
}

#[test]
fn data_layout() {
    use ChannelOrder::Rgb;
    let planar = |format: PixelFormatRgb| format.with_data_layout(DataLayout::Planar);
    let big = |bits| rgb(bits, Rgb).with_endianness(Endianness::Big);
    check(&[
        ("something_1920x1080_rgb_packed.yuv", BYTES_NO_ALPHA, rgb(8, Rgb)),
        ("something_1920x1080_rgb_planar.yuv", BYTES_NO_ALPHA, planar(rgb(8, Rgb))),
        ("something_1920x1080_rgb10le_planar.yuv", BYTES_NO_ALPHA, planar(rgb(10, Rgb))),
        ("something_1920x1080_rgb10be_planar.yuv", BYTES_NO_ALPHA, planar(big(10))),
        ("something_1920x1080_rgb16_planar.yuv", BYTES_NO_ALPHA, planar(rgb(16, Rgb))),
        ("something_1920x1080_rgb16be_planar.yuv", BYTES_NO_ALPHA, planar(big(16))),
    ]);
}

#[test]
fn file_size_must_fit() {
    use ChannelOrder::Rgb;
    check(&[
        ("something_1920x1080_rgb10.yuv", NOT_ENOUGH_BYTES, rgb(8, Rgb)),
        ("something_1920x1080_rgb16be.yuv", NOT_ENOUGH_BYTES, rgb(8, Rgb)),
        ("something_1920x1080_rgb16be.yuv", UNFITTING_BYTES, rgb(8, Rgb)),
    ]);
}

#[test]
fn cmyk_extension() {
    let guessed = GuessedFrameFormat {
        frame_size: Some(Size::new(512, 768)),
        ..Default::default()
    };
    let info = FileInfoForGuess::new("something_512x768.cmyk", "", Some(512 * 768 * 4 * 12));
    let format = guess_rgb_pixel_format(&guessed, &info).unwrap();
    assert_eq!(format, rgb(8, ChannelOrder::Rgb).with_alpha(AlphaMode::Last));
    assert_eq!(format.nr_channels(), 4);
}

#[test]
fn cmyk_size_mismatch_falls_through() {
    let info = FileInfoForGuess::new("something.CMYK", "", Some(1920 * 1080 * 3));
    let format = guess_rgb_pixel_format(&hd(), &info).unwrap();
    assert_eq!(format, PixelFormatRgb::default());
}

#[test]
fn parent_folder_indicator() {
    let info = FileInfoForGuess::new("frame_0001.raw", "capture_abgr_", Some(1920 * 1080 * 4));
    let format = guess_rgb_pixel_format(&hd(), &info).unwrap();
    assert_eq!(format, rgb(8, ChannelOrder::Bgr).with_alpha(AlphaMode::First));
}

#[test]
fn huge_dimensions_do_not_overflow() {
    let info = FileInfoForGuess::new("clip_4294967295x4294967295.rgb", "", Some(1000));
    let guessed = guess_frame_format(&info);
    assert_eq!(guessed.frame_size, Some(Size::new(u32::MAX, u32::MAX)));
    // No candidate fits, so the unchecked default comes back.
    assert_eq!(guess_rgb_pixel_format(&guessed, &info), Some(PixelFormatRgb::default()));
}

#[test]
fn guess_is_repeatable() {
    let file_size = Some(BYTES_NO_ALPHA * 4);
    let info = FileInfoForGuess::new("clip_1920x1080_bgra_planar_.raw", "set_rgb16be_", file_size);
    let guessed = guess_frame_format(&info);
    let first = guess_rgb_pixel_format(&guessed, &info);
    assert!(first.is_some());
    assert_eq!(first, guess_rgb_pixel_format(&guessed, &info));
    assert_eq!(info.file_size, file_size);
}
