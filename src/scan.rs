use std::fs;
use std::path::Path;

use crate::media::MediaFile;

/// Enumerate eligible media files among the direct children of `source`.
/// Subdirectories are never descended into; entries we cannot stat are
/// skipped. Results are sorted by filename so collision suffixes are
/// assigned in a stable order.
pub fn scan_source(source: &Path) -> anyhow::Result<Vec<MediaFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(source)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let extension = format!(".{}", ext.to_ascii_lowercase());
        if !MediaFile::is_media_extension(&extension) {
            continue;
        }

        let Ok(meta) = entry.metadata() else { continue };
        files.push(MediaFile::new(
            path.clone(),
            filename.to_string(),
            extension,
            meta.len(),
        ));
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}
