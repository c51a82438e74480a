use std::path::Path;

use dailywall_core::{Error, Result};

use super::{path_str, WallpaperBackend};
use crate::process_runner::{failed, CommandRunner, RunOutcome};

/// Generic setters for desktops we don't recognize, in order.
const UTILITIES: &[(&str, &str)] = &[("feh", "--bg-scale"), ("nitrogen", "--set-scaled")];

pub(super) struct Fallback<'a> {
    pub runner: &'a dyn CommandRunner,
    /// Raw desktop identifier, for the error message.
    pub desktop: String,
}

impl WallpaperBackend for Fallback<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        let path = path_str(image_abs)?;

        // Only a missing binary moves on; an installed tool that fails is terminal.
        for &(program, flag) in UTILITIES {
            match self.runner.run(program, &[flag, path])? {
                RunOutcome::Success => return Ok(()),
                RunOutcome::Failed(code) => return Err(failed(program, flag, code)),
                RunOutcome::NotFound => {
                    tracing::warn!(program, "not installed, trying next fallback");
                }
            }
        }

        tracing::warn!("no fallback wallpaper tool found; install feh or nitrogen");
        let desktop = if self.desktop.is_empty() {
            "unknown".to_string()
        } else {
            self.desktop.clone()
        };
        Err(Error::UnsupportedEnvironment(desktop))
    }
}
