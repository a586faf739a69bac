use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

/// Name of the run log created in the source root.
pub const LOG_FILENAME: &str = "photo_organizer.log";

/// Append-only run log: one timestamped line per processed file. Reopening
/// never truncates an existing log.
pub struct RunLog {
    file: File,
}

impl RunLog {
    pub fn open(source_root: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(source_root.join(LOG_FILENAME))?;
        Ok(Self { file })
    }

    pub fn success(&mut self, filename: &str, dest: &Path) {
        self.write_line("INFO", &format!("moved: {} -> {}", filename, dest.display()));
    }

    pub fn failure(&mut self, filename: &str, reason: &str) {
        self.write_line("ERROR", &format!("failed: {filename} - {reason}"));
    }

    fn write_line(&mut self, level: &str, message: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        // A failed log write must not fail the move it records.
        let _ = writeln!(self.file, "{stamp} - {level}: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_log_lines_append() {
        let dir = tempfile::tempdir().unwrap();

        let mut log = RunLog::open(dir.path()).unwrap();
        log.success("a.jpg", Path::new("2023年/11月/a.jpg"));
        log.failure("b.jpg", "permission denied");
        drop(log);

        // Reopen and append another line; the first two must survive.
        let mut log = RunLog::open(dir.path()).unwrap();
        log.success("c.jpg", Path::new("2024年/01月/c.jpg"));
        drop(log);

        let text = fs::read_to_string(dir.path().join(LOG_FILENAME)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("INFO: moved: a.jpg -> 2023年/11月/a.jpg"));
        assert!(lines[1].contains("ERROR: failed: b.jpg - permission denied"));
        assert!(lines[2].contains("INFO: moved: c.jpg"));
    }
}
