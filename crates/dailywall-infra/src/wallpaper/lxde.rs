use std::path::Path;

use dailywall_core::Result;

use super::{path_str, WallpaperBackend};
use crate::process_runner::{run_checked, CommandRunner};

/// LXDE and LXQt both delegate the desktop to pcmanfm.
pub(super) struct Lxde<'a> {
    pub runner: &'a dyn CommandRunner,
}

impl WallpaperBackend for Lxde<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        run_checked(
            self.runner,
            "pcmanfm",
            &["--set-wallpaper", path_str(image_abs)?],
            "--set-wallpaper",
        )
    }
}
