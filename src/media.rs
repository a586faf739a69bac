use std::path::PathBuf;

/// Extensions eligible for organizing, compared case-insensitively.
pub const MEDIA_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".mp4", ".mov", ".avi"];

#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Absolute path of the source file
    pub path: PathBuf,
    /// Just the filename
    pub filename: String,
    /// Lower-cased extension, including the dot
    pub extension: String,
    /// File size in bytes
    pub size: u64,
}

impl MediaFile {
    pub fn new(path: PathBuf, filename: String, extension: String, size: u64) -> Self {
        Self {
            path,
            filename,
            extension,
            size,
        }
    }

    pub fn is_media_extension(ext: &str) -> bool {
        MEDIA_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
