use std::path::Path;

use dailywall_core::uri::file_uri;
use dailywall_core::Result;

use super::WallpaperBackend;
use crate::process_runner::{run_checked, CommandRunner};

const SCHEMA: &str = "org.gnome.desktop.background";

/// GNOME, Unity and Budgie read the same dconf keys.
pub(super) struct Gnome<'a> {
    pub runner: &'a dyn CommandRunner,
}

impl WallpaperBackend for Gnome<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        let uri = file_uri(image_abs)?;

        // Light then dark variant (GNOME 42+ keeps them separate).
        for key in ["picture-uri", "picture-uri-dark"] {
            run_checked(
                self.runner,
                "gsettings",
                &["set", SCHEMA, key, uri.as_str()],
                &format!("{SCHEMA} {key}"),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process_runner::fake::FakeRunner;
    use crate::process_runner::RunOutcome;
    use dailywall_core::Error;

    #[test]
    fn sets_light_and_dark_uri() {
        let runner = FakeRunner::default();
        Gnome { runner: &runner }
            .apply(Path::new("/data/2026-10-19.jpg"))
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(
            calls[0],
            [
                "gsettings",
                "set",
                SCHEMA,
                "picture-uri",
                "file:///data/2026-10-19.jpg"
            ]
        );
        assert_eq!(calls[1][3], "picture-uri-dark");
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn first_failure_stops() {
        let runner = FakeRunner::default().with("gsettings", RunOutcome::Failed(Some(1)));
        let err = Gnome { runner: &runner }
            .apply(Path::new("/x.jpg"))
            .unwrap_err();

        assert!(matches!(err, Error::Platform(ref m) if m.contains("picture-uri")));
        assert_eq!(runner.calls.borrow().len(), 1);
    }
}
