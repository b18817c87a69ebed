//! Evidence handed to the guessers.

use rawvid_core::{Error, Result};
use std::path::Path;

/// Name and size evidence for one raw file.
///
/// The guessers only ever look at these three values; file content is never
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileInfoForGuess {
    /// File name including the extension. Nothing is guessed when empty.
    pub filename: String,
    /// Name of the directory containing the file, may be empty.
    pub parent_folder_name: String,
    /// Size in bytes. `None` disables size validation.
    pub file_size: Option<u64>,
}

impl FileInfoForGuess {
    /// Creates file info from its parts.
    pub fn new(
        filename: impl Into<String>,
        parent_folder_name: impl Into<String>,
        file_size: Option<u64>,
    ) -> Self {
        Self {
            filename: filename.into(),
            parent_folder_name: parent_folder_name.into(),
            file_size,
        }
    }

    /// Collects the evidence for a file on disk.
    ///
    /// Uses the last path component as file name and the name of the direct
    /// parent directory. The size comes from the file metadata and stays
    /// `None` if the file does not exist or cannot be queried.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the path has no file name or it is not
    /// valid UTF-8. A parent folder name that is not valid UTF-8 does not
    /// fail; it is converted lossily, with `U+FFFD` replacing invalid bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::invalid_path(path.display().to_string()))?;

        let parent_folder_name = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file_size = std::fs::metadata(path).ok().map(|m| m.len());

        Ok(Self::new(filename, parent_folder_name, file_size))
    }

    /// Same info with a different file size.
    pub fn with_file_size(mut self, file_size: Option<u64>) -> Self {
        self.file_size = file_size;
        self
    }

    /// File name then parent folder name, each lower-cased.
    pub(crate) fn lowercase_names(&self) -> [String; 2] {
        [
            self.filename.to_lowercase(),
            self.parent_folder_name.to_lowercase(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_uses_direct_parent() {
        let info = FileInfoForGuess::from_path("/data/captures/day1/clip_1920x1080.yuv").unwrap();
        assert_eq!(info.filename, "clip_1920x1080.yuv");
        assert_eq!(info.parent_folder_name, "day1");
        assert_eq!(info.file_size, None);
    }

    #[test]
    fn test_from_path_no_parent() {
        let info = FileInfoForGuess::from_path("clip.yuv").unwrap();
        assert_eq!(info.filename, "clip.yuv");
        assert_eq!(info.parent_folder_name, "");
    }

    #[test]
    fn test_from_path_reads_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame_16x16.yuv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 384]).unwrap();
        drop(file);

        let info = FileInfoForGuess::from_path(&path).unwrap();
        assert_eq!(info.file_size, Some(384));
        assert_eq!(info.filename, "frame_16x16.yuv");
    }

    #[test]
    fn test_from_path_without_file_name() {
        let err = FileInfoForGuess::from_path("/").unwrap_err();
        assert!(err.is_path_error());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_path_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::path::PathBuf;

        let bad = OsStr::from_bytes(b"set_\xff_720p");
        let info = FileInfoForGuess::from_path(PathBuf::from(bad).join("clip.yuv")).unwrap();
        assert_eq!(info.filename, "clip.yuv");
        assert_eq!(info.parent_folder_name, "set_\u{FFFD}_720p");

        let err = FileInfoForGuess::from_path(Path::new("dir").join(bad)).unwrap_err();
        assert!(err.is_path_error());
    }

    #[test]
    fn test_lowercase_names() {
        let info = FileInfoForGuess::new("Clip_NV12.YUV", "HD_Folder", None);
        assert_eq!(info.lowercase_names(), ["clip_nv12.yuv", "hd_folder"]);
    }
}
