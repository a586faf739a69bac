use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::date::CaptureDate;

/// Name of the archive directory created under the source root.
pub const ARCHIVE_DIR: &str = "已整理";

/// Compute a collision-free destination for `filename` under the year/month
/// folder for `date`, creating the folder if needed. Check-then-act: the
/// returned path does not exist at the moment of return, which is only safe
/// under the single-writer assumption.
pub fn place(archive_root: &Path, date: &CaptureDate, filename: &str) -> io::Result<PathBuf> {
    let folder = archive_root
        .join(date.year_folder())
        .join(date.month_folder());
    fs::create_dir_all(&folder)?;

    let candidate = folder.join(filename);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    let ext = Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    // Counter restarts at 1 for every call; bounded by actual files on disk.
    let mut counter = 1u32;
    loop {
        let dest = folder.join(format!("{stem}_{counter}{ext}"));
        if !dest.exists() {
            return Ok(dest);
        }
        counter += 1;
    }
}
