//! On-disk image cache.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use dailywall_core::cache::cache_path;
use dailywall_core::{Error, Result};

/// Write `bytes` as the cached image for `date`, creating `dir` if needed.
///
/// An existing file for the same date is replaced (last write wins).
pub fn persist(dir: &Path, date: NaiveDate, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::fs(dir, e))?;

    let path = cache_path(dir, date);
    tracing::info!(path = %path.display(), "writing file");
    atomic_write(&path, bytes)?;
    Ok(path)
}

fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let tmp = dir.join(format!(
        ".{}.tmp",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("dailywall")
    ));

    fs::write(&tmp, bytes).map_err(|e| Error::fs(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::fs(path, e)
    })
}
