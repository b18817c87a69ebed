//! YUV pixel format guessing from names and file size.

use rawvid_core::{
    PackingOrder, PixelFormatYuv, PlaneOrder, PredefinedPixelFormat, Size, Subsampling,
};
use rawvid_guess::{
    guess_frame_format, guess_yuv_pixel_format, FileInfoForGuess, GuessedFrameFormat,
};

/// Luma samples of one 1920x1080 frame.
const HD_PIXELS: u64 = 1920 * 1080;

fn guess(filename: &str, parent: &str, file_size: Option<u64>) -> Option<PixelFormatYuv> {
    let info = FileInfoForGuess::new(filename, parent, file_size);
    let guessed = guess_frame_format(&info);
    guess_yuv_pixel_format(&guessed, &info)
}

#[test]
fn nv12_and_nv21() {
    let nv12 = guess("clip_1920x1080_nv12.yuv", "", Some(HD_PIXELS * 3 / 2 * 4)).unwrap();
    assert_eq!(
        nv12,
        PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv).with_uv_interleaved(true)
    );

    let nv21 = guess("clip_1920x1080_NV21.yuv", "", None).unwrap();
    assert_eq!(
        nv21,
        PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yvu).with_uv_interleaved(true)
    );
}

#[test]
fn nothing_fits_odd_size() {
    assert_eq!(guess("clip_1920x1080_nv12.yuv", "", Some(HD_PIXELS * 6 + 1)), None);
    assert_eq!(guess("clip_1920x1080.yuv", "", Some(7)), None);
}

#[test]
fn requires_frame_size() {
    assert_eq!(guess("clip_yuv420p.yuv", "", None), None);

    let info = FileInfoForGuess::new("", "", None);
    let guessed = GuessedFrameFormat {
        frame_size: Some(Size::new(16, 16)),
        ..Default::default()
    };
    assert_eq!(guess_yuv_pixel_format(&guessed, &info), None);
}

#[test]
fn ffmpeg_planar_names() {
    let format = guess("clip_1920x1080_yuv420p10le.yuv", "", Some(HD_PIXELS * 3 * 5)).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 10, PlaneOrder::Yuv));

    let format = guess("clip_1920x1080_yuv422p16be.yuv", "", Some(HD_PIXELS * 4 * 2)).unwrap();
    assert_eq!(
        format,
        PixelFormatYuv::planar(Subsampling::Yuv422, 16, PlaneOrder::Yuv).with_big_endian(true)
    );

    let format = guess("clip_1920x1080_yuv420p10leuvi.yuv", "", None).unwrap();
    assert!(format.uv_interleaved);
    assert_eq!(format.bits_per_sample, 10);

    let format = guess("clip_1920x1080_yuvj420p.yuv", "", None).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv));

    let format = guess("clip_1920x1080_yvu420p.yuv", "", None).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yvu));
}

#[test]
fn planar_name_without_subsampling_uses_detected() {
    let format = guess("clip_444_yuvp_1920x1080.yuv", "", Some(HD_PIXELS * 3 * 2)).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv444, 8, PlaneOrder::Yuv));
}

#[test]
fn packed_first_when_name_says_packed() {
    let size = Some(HD_PIXELS * 3);

    let planar = guess("clip_1920x1080_yuv444p.yuv", "", size).unwrap();
    assert_eq!(planar, PixelFormatYuv::planar(Subsampling::Yuv444, 8, PlaneOrder::Yuv));

    let packed = guess("clip_1920x1080_packed_yuv444p.yuv", "", size).unwrap();
    assert_eq!(packed, PixelFormatYuv::packed(Subsampling::Yuv444, 8, PackingOrder::Yuv));
}

#[test]
fn packed_sample_names() {
    let frame = 1280 * 720 * 3 * 2;
    let expected = PixelFormatYuv::packed(Subsampling::Yuv444, 16, PackingOrder::Yuv);
    for name in [
        "sample_1280x720_16b_yuv44416le_packed_20200109_114812.yuv",
        "sample_1280x720_16b_yuv16le_packed_444_20200109_114812",
        "sample_1280x720_16bit_444_packed_20200109_114812.yuv",
    ] {
        assert_eq!(guess(name, "", Some(frame * 3)), Some(expected), "filename: {name}");
    }
}

#[test]
fn packed_422_names() {
    let format = guess("clip_1920x1080_uyvy422.yuv", "", Some(HD_PIXELS * 2 * 10)).unwrap();
    assert_eq!(format, PixelFormatYuv::packed(Subsampling::Yuv422, 8, PackingOrder::Uyvy));

    let format = guess("clip_1920x1080_yuyv422.yuv", "", None).unwrap();
    assert_eq!(format.order, rawvid_core::YuvOrder::Packed(PackingOrder::Yuyv));
}

#[test]
fn ayuv64le_and_gray() {
    let ayuv = guess("clip_1920x1080_ayuv64le.yuv", "", Some(HD_PIXELS * 8)).unwrap();
    assert_eq!(ayuv, PixelFormatYuv::packed(Subsampling::Yuv444, 16, PackingOrder::Ayuv));

    let gray = guess("clip_1920x1080_gray10le.yuv", "", Some(HD_PIXELS * 2 * 3)).unwrap();
    assert_eq!(gray, PixelFormatYuv::gray(10));
}

#[test]
fn v210_extension_and_token() {
    let v210 = PixelFormatYuv::predefined(PredefinedPixelFormat::V210);
    let frame = 5120 * 1080;

    assert_eq!(guess("clip_1920x1080.v210", "", Some(frame * 2)), Some(v210));
    assert_eq!(guess("clip_1920x1080.V210", "", Some(frame * 2)), Some(v210));
    assert_eq!(guess("clip_v210_1920x1080.yuv", "", Some(frame)), Some(v210));
}

#[test]
fn raw_extension_is_luma_only() {
    let format = guess("bayer_1920x1080_12bit.raw", "", Some(HD_PIXELS * 2 * 4)).unwrap();
    assert_eq!(format, PixelFormatYuv::gray(12));

    let format = guess("bayer_1920x1080.raw", "", Some(HD_PIXELS)).unwrap();
    assert_eq!(format, PixelFormatYuv::gray(8));
}

#[test]
fn bare_subsampling_in_name() {
    let format = guess("clip_1920x1080_420.yuv", "", Some(HD_PIXELS * 3)).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv));

    let format = guess("clip_1920x1080_420_10bit.yuv", "", Some(HD_PIXELS * 3)).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 10, PlaneOrder::Yuv));
}

#[test]
fn size_only_fallback() {
    // Only 8-bit 4:2:2 divides two luma planes' worth of bytes.
    let format = guess("clip_1920x1080.yuv", "", Some(HD_PIXELS * 2)).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv422, 8, PlaneOrder::Yuv));

    let format = guess("clip_1920x1080.yuv", "", None).unwrap();
    assert_eq!(format, PixelFormatYuv::planar(Subsampling::Yuv420, 8, PlaneOrder::Yuv));
}

#[test]
fn parent_folder_names() {
    let format = guess("frame_0001.yuv", "seq_1920x1080_nv21", None).unwrap();
    assert_eq!(format.order, rawvid_core::YuvOrder::Planar(PlaneOrder::Yvu));
    assert!(format.uv_interleaved);
}

#[test]
fn guess_is_repeatable() {
    let info = FileInfoForGuess::new("clip_1920x1080_yuv420p10le.yuv", "", Some(HD_PIXELS * 3));
    let guessed = guess_frame_format(&info);
    let first = guess_yuv_pixel_format(&guessed, &info);
    assert_eq!(first, guess_yuv_pixel_format(&guessed, &info));
    assert_eq!(guessed, guess_frame_format(&info));
}

#[test]
fn huge_dimensions_do_not_overflow() {
    let info = FileInfoForGuess::new("clip_4294967295x4294967295.yuv", "", Some(1000));
    let guessed = guess_frame_format(&info);
    assert_eq!(guessed.frame_size, Some(Size::new(u32::MAX, u32::MAX)));
    assert_eq!(guess_yuv_pixel_format(&guessed, &info), None);

    assert_eq!(guess("clip_4294967295x4294967295_nv12.yuv", "", Some(1000)), None);
}
