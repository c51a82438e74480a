use std::path::Path;

use dailywall_core::Result;

use super::WallpaperBackend;

pub(super) struct Windows;

impl WallpaperBackend for Windows {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        set_desk_wallpaper(image_abs)
    }
}

/// `SystemParametersInfoW(SPI_SETDESKWALLPAPER, 0, path, SPIF_UPDATEINIFILE | SPIF_SENDCHANGE)`
#[cfg(windows)]
fn set_desk_wallpaper(path: &Path) -> Result<()> {
    use std::ffi::c_void;
    use std::os::windows::ffi::OsStrExt;

    use windows::Win32::UI::WindowsAndMessaging::{
        SystemParametersInfoW, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SPI_SETDESKWALLPAPER,
    };

    let mut wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();

    tracing::debug!(path = %path.display(), "SystemParametersInfoW");
    unsafe {
        SystemParametersInfoW(
            SPI_SETDESKWALLPAPER,
            0,
            Some(wide.as_mut_ptr() as *mut c_void),
            SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
        )
    }
    .map_err(|e| {
        dailywall_core::Error::Platform(format!(
            "SystemParametersInfoW(SPI_SETDESKWALLPAPER) failed: {e}"
        ))
    })
}

#[cfg(not(windows))]
fn set_desk_wallpaper(_path: &Path) -> Result<()> {
    Err(dailywall_core::Error::Platform(
        "SystemParametersInfoW is only available on Windows".into(),
    ))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn non_windows_build_reports_platform_error() {
        let err = Windows.apply(Path::new("C:\\a.jpg")).unwrap_err();
        assert!(matches!(err, dailywall_core::Error::Platform(_)));
    }
}
