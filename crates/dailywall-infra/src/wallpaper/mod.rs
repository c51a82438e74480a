//! Desktop wallpaper backends.
//!
//! One backend per [`Classification`]; each invokes exactly one platform
//! mechanism and consults only its exit status.

use std::path::{Path, PathBuf};

use dailywall_core::classification::Classification;
use dailywall_core::{Error, Result};

use crate::process_runner::CommandRunner;

mod cinnamon;
mod fallback;
mod gnome;
mod kde;
mod lxde;
mod mate;
mod win32;
mod xfce;

pub trait WallpaperBackend {
    fn apply(&self, image_abs: &Path) -> Result<()>;
}

struct Unsupported {
    os: String,
}

impl WallpaperBackend for Unsupported {
    fn apply(&self, _image_abs: &Path) -> Result<()> {
        Err(Error::UnsupportedEnvironment(self.os.clone()))
    }
}

pub fn backend_for<'a>(
    classification: &Classification,
    runner: &'a dyn CommandRunner,
) -> Box<dyn WallpaperBackend + 'a> {
    match classification {
        Classification::Windows => Box::new(win32::Windows),
        Classification::Gnome => Box::new(gnome::Gnome { runner }),
        Classification::Kde => Box::new(kde::Kde { runner }),
        Classification::Xfce => Box::new(xfce::Xfce { runner }),
        Classification::Mate => Box::new(mate::Mate { runner }),
        Classification::Cinnamon => Box::new(cinnamon::Cinnamon { runner }),
        Classification::Lxde => Box::new(lxde::Lxde { runner }),
        Classification::Unknown(desktop) => Box::new(fallback::Fallback {
            runner,
            desktop: desktop.clone(),
        }),
        Classification::Unsupported(os) => Box::new(Unsupported { os: os.clone() }),
    }
}

/// Make `image` absolute (relative to the cwd) and require it to exist.
pub fn resolve_image(image: &Path) -> Result<PathBuf> {
    let abs = if image.is_absolute() {
        image.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::fs(".", e))?;
        cwd.join(image)
    };

    match std::fs::metadata(&abs) {
        Ok(_) => Ok(abs),
        Err(e) => Err(Error::fs(abs, e)),
    }
}

/// Apply `image` as the wallpaper for `classification`. Returns the absolute path used.
pub fn set_wallpaper(
    classification: &Classification,
    image: &Path,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    let abs = resolve_image(image)?;

    backend_for(classification, runner).apply(&abs)?;

    tracing::info!(path = %abs.display(), desktop = %classification, "wallpaper set");
    Ok(abs)
}

pub(crate) fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| Error::Platform(format!("path is not valid UTF-8: {path:?}")))
}
