//! Download today's image and optionally apply it.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use dailywall_core::classification::Classification;
use dailywall_core::Result;

use crate::cache::persist;
use crate::feed::ImageFeed;
use crate::process_runner::CommandRunner;
use crate::wallpaper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOutcome {
    /// Cached image for the requested date.
    pub image: PathBuf,
    /// Set when the wallpaper was applied.
    pub applied: Option<Classification>,
}

/// Capabilities the pipeline needs from the host.
pub struct Pipeline<'a> {
    pub feed: &'a dyn ImageFeed,
    pub runner: &'a dyn CommandRunner,
    pub detect: &'a dyn Fn() -> Classification,
}

impl Pipeline<'_> {
    /// Feed metadata -> image bytes -> `<cache_dir>/<date>.jpg`.
    pub fn download(&self, cache_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        let url = self.feed.fetch_daily_image_metadata()?;
        let bytes = self.feed.download_image(&url)?;
        let path = persist(cache_dir, date, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "download complete");
        Ok(path)
    }

    pub fn download_and_apply(
        &self,
        cache_dir: &Path,
        date: NaiveDate,
        set_wallpaper: bool,
    ) -> Result<DailyOutcome> {
        let image = self.download(cache_dir, date)?;

        if !set_wallpaper {
            return Ok(DailyOutcome {
                image,
                applied: None,
            });
        }

        let classification = (self.detect)();
        let image = wallpaper::set_wallpaper(&classification, &image, self.runner)?;

        Ok(DailyOutcome {
            image,
            applied: Some(classification),
        })
    }
}
