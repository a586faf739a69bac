use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Move a file into the archive. Rename when possible; when source and
/// archive sit on different filesystems, fall back to copy-then-delete,
/// keeping the original mtime on the copy.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_then_delete(src, dst),
        other => other,
    }
}

fn copy_then_delete(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    fs::copy(src, dst)?;
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_mtime(dst, mtime).ok();
    fs::remove_file(src)
}
