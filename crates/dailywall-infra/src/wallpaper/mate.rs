use std::path::Path;

use dailywall_core::Result;

use super::{path_str, WallpaperBackend};
use crate::process_runner::{run_checked, CommandRunner};

pub(super) struct Mate<'a> {
    pub runner: &'a dyn CommandRunner,
}

impl WallpaperBackend for Mate<'_> {
    fn apply(&self, image_abs: &Path) -> Result<()> {
        run_checked(
            self.runner,
            "gsettings",
            &[
                "set",
                "org.mate.background",
                "picture-filename",
                path_str(image_abs)?,
            ],
            "org.mate.background picture-filename",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process_runner::fake::FakeRunner;
    use crate::process_runner::RunOutcome;
    use dailywall_core::Error;

    #[test]
    fn uses_plain_filename() {
        let runner = FakeRunner::default();
        Mate { runner: &runner }.apply(Path::new("/d/a.jpg")).unwrap();
        assert_eq!(
            runner.calls.borrow()[0],
            ["gsettings", "set", "org.mate.background", "picture-filename", "/d/a.jpg"]
        );
    }

    #[test]
    fn nonzero_exit_is_platform_error() {
        let runner = FakeRunner::default().with("gsettings", RunOutcome::Failed(Some(1)));
        let err = Mate { runner: &runner }.apply(Path::new("/d/a.jpg")).unwrap_err();
        assert!(matches!(err, Error::Platform(ref m) if m.contains("exit code 1")));
    }
}
