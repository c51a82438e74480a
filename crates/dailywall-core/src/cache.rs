//! Date-keyed cache layout.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Cache directory name relative to the working directory.
pub const CACHE_DIR_NAME: &str = "data";

pub const IMAGE_EXTENSION: &str = "jpg";

/// `YYYY-MM-DD.jpg`
pub fn cache_file_name(date: NaiveDate) -> String {
    format!("{}.{IMAGE_EXTENSION}", date.format("%Y-%m-%d"))
}

pub fn cache_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(cache_file_name(date))
}
