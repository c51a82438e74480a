use std::path::Path;

use dailywall_core::uri::file_uri;
use dailywall_core::Result;

use super::WallpaperBackend;
use crate::process_runner::{run_checked, CommandRunner};

pub(super) struct Cinnamon<'a> {
    pub runner: &'a dyn CommandRunner,
}

impl WallpaperBackend for Cinnamon<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        let uri = file_uri(image_abs)?;
        run_checked(
            self.runner,
            "gsettings",
            &["set", "org.cinnamon.desktop.background", "picture-uri", uri.as_str()],
            "org.cinnamon.desktop.background picture-uri",
        )
    }
}
