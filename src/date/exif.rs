use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use std::io::Cursor;

/// Extract the original capture date from EXIF data in raw image bytes.
/// Anything that fails along the way (not an image, no EXIF, missing tag,
/// malformed value) is a miss, never an error.
pub fn extract_exif_date(bytes: &[u8]) -> Option<NaiveDateTime> {
    let reader = Reader::new().read_from_container(&mut Cursor::new(bytes)).ok()?;
    let field = reader.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    parse_exif_datetime(&field.display_value().to_string())
}

fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    // The display value may render separators as '-', '/' or '.'; normalize
    // back to the EXIF wire format before the strict parse.
    let cleaned = s
        .replace('-', ":")
        .replace('/', ":")
        .replace('\\', ":")
        .replace('.', ":");

    NaiveDateTime::parse_from_str(cleaned.trim(), "%Y:%m:%d %H:%M:%S").ok()
}
