use std::path::Path;

use dailywall_core::Result;

use super::{path_str, WallpaperBackend};
use crate::process_runner::{run_checked, CommandRunner};

const BACKDROP_KEY: &str = "/backdrop/screen0/monitor0/workspace0/last-image";

pub(super) struct Xfce<'a> {
    pub runner: &'a dyn CommandRunner,
}

impl WallpaperBackend for Xfce<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        run_checked(
            self.runner,
            "xfconf-query",
            &[
                "-c",
                "xfce4-desktop",
                "-p",
                BACKDROP_KEY,
                "-s",
                path_str(image_abs)?,
            ],
            BACKDROP_KEY,
        )
    }
}
