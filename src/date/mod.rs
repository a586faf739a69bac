pub mod exif;
pub mod guess;

use std::fs;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::media::MediaFile;

/// EXIF read cap; larger files are treated as a tier-1 miss.
const MAX_EXIF_READ: u64 = 32 * 1024 * 1024;

/// A resolved capture date: 4-digit year, zero-padded 2-digit month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDate {
    pub year: String,
    pub month: String,
}

impl CaptureDate {
    /// Every tier funnels through here so the month is always zero-padded,
    /// even when the source already guarantees two digits.
    pub fn new(year: impl Into<String>, month: &str) -> Self {
        Self {
            year: year.into(),
            month: format!("{:0>2}", month),
        }
    }

    fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self::new(dt.format("%Y").to_string(), &dt.format("%m").to_string())
    }

    pub fn year_folder(&self) -> String {
        format!("{}年", self.year)
    }

    pub fn month_folder(&self) -> String {
        format!("{}月", self.month)
    }
}

/// Resolve a capture date for `file`. Total: tiers are tried in priority
/// order (EXIF, filename pattern, mtime) and every metadata problem is a
/// silent miss that falls through to the next tier.
pub fn resolve_date(file: &MediaFile) -> CaptureDate {
    exif_tier(file)
        .or_else(|| guess::guess_date_from_filename(&file.filename))
        .unwrap_or_else(|| mtime_tier(file))
}

fn exif_tier(file: &MediaFile) -> Option<CaptureDate> {
    if file.size > MAX_EXIF_READ {
        return None;
    }
    let is_image = mime_guess::from_path(&file.filename)
        .first()
        .map_or(false, |mime| mime.type_() == mime_guess::mime::IMAGE);
    if !is_image {
        return None;
    }
    let bytes = fs::read(&file.path).ok()?;
    exif::extract_exif_date(&bytes).map(|dt| CaptureDate::from_datetime(&dt))
}

fn mtime_tier(file: &MediaFile) -> CaptureDate {
    // Last resort and cannot miss: if even the stat fails (the file vanished
    // mid-run), fall back to the current time to keep the contract total.
    let modified = fs::metadata(&file.path)
        .and_then(|m| m.modified())
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now());
    CaptureDate::new(
        modified.format("%Y").to_string(),
        &modified.format("%m").to_string(),
    )
}
