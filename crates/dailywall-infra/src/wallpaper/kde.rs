use std::path::Path;

use dailywall_core::uri::file_uri;
use dailywall_core::Result;

use super::WallpaperBackend;
use crate::process_runner::{failed, CommandRunner, RunOutcome};

pub(super) struct Kde<'a> {
    pub runner: &'a dyn CommandRunner,
}

fn script(uri: &str) -> String {
    // Based on the standard PlasmaShell JS API.
    format!(
        "var allDesktops = desktops();\n\
         for (var i = 0; i < allDesktops.length; i++) {{\n\
           var d = allDesktops[i];\n\
           d.wallpaperPlugin = 'org.kde.image';\n\
           d.currentConfigGroup = ['Wallpaper', 'org.kde.image', 'General'];\n\
           d.writeConfig('Image', '{uri}');\n\
         }}\n"
    )
}

impl WallpaperBackend for Kde<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        let uri = file_uri(image_abs)?;
        let script = script(&uri);
        let args = [
            "org.kde.plasmashell",
            "/PlasmaShell",
            "org.kde.PlasmaShell.evaluateScript",
            script.as_str(),
        ];

        // Plasma 6 often ships qdbus6, Plasma 5 ships qdbus.
        for qdbus in ["qdbus6", "qdbus"] {
            match self.runner.run(qdbus, &args)? {
                RunOutcome::Success => return Ok(()),
                RunOutcome::Failed(code) => {
                    return Err(failed(qdbus, "PlasmaShell.evaluateScript", code));
                }
                RunOutcome::NotFound => continue,
            }
        }

        Err(dailywall_core::Error::Platform(
            "qdbus not found (qdbus6/qdbus)".into(),
        ))
    }
}
