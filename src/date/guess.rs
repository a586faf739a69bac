use regex::Regex;
use std::sync::LazyLock;

use super::CaptureDate;

// Year starting with "20", optional separator, 2-digit month, then a 2-digit
// day that only anchors the match. Month values are not calendar-validated.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20\d{2})[-/]?(\d{2})[-/]?\d{2}").unwrap());

/// Guess a date from a substring of the filename; first match wins.
pub fn guess_date_from_filename(filename: &str) -> Option<CaptureDate> {
    let caps = DATE_PATTERN.captures(filename)?;
    Some(CaptureDate::new(&caps[1], &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_patterns() {
        let d = guess_date_from_filename("IMG_20240512.jpg").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("2024", "05"));

        let d = guess_date_from_filename("scan-2019-07-11-final.png").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("2019", "07"));

        let d = guess_date_from_filename("clip_2021/0304.mov").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("2021", "03"));
    }

    #[test]
    fn test_first_match_wins() {
        let d = guess_date_from_filename("20190102_copy_of_20200304.jpg").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("2019", "01"));
    }

    #[test]
    fn test_no_match() {
        assert!(guess_date_from_filename("random_photo.jpg").is_none());
        // Bare year: the month and day digits are required to anchor
        assert!(guess_date_from_filename("2012.jpg").is_none());
        // Pre-2000 years never match
        assert!(guess_date_from_filename("19991231.jpg").is_none());
    }

    #[test]
    fn test_month_not_calendar_validated() {
        let d = guess_date_from_filename("doc_20121399.jpg").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("2012", "13"));
    }
}
