//! CLI output formatting.

use std::path::Path;

pub fn debug_enabled() -> bool {
    std::env::var_os("DAILYWALL_DEBUG").is_some_and(|v| !v.is_empty())
}

pub fn print_error(err: &anyhow::Error) {
    if debug_enabled() {
        eprintln!("{err:?}");
    } else {
        // Single line, full context chain.
        eprintln!("{err:#}");
    }
}

pub fn print_saved(path: &Path) {
    println!("Saved to: {}", path.display());
}

pub fn print_applied(path: &Path) {
    println!("Wallpaper set to: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn debug_enabled_tracks_env() {
        let _g = ENV_LOCK.lock().unwrap();
        let old = std::env::var_os("DAILYWALL_DEBUG");

        unsafe {
            std::env::remove_var("DAILYWALL_DEBUG");
        }
        assert!(!debug_enabled());

        unsafe {
            std::env::set_var("DAILYWALL_DEBUG", "1");
        }
        assert!(debug_enabled());

        unsafe {
            std::env::set_var("DAILYWALL_DEBUG", "");
        }
        assert!(!debug_enabled());

        unsafe {
            match old {
                Some(v) => std::env::set_var("DAILYWALL_DEBUG", v),
                None => std::env::remove_var("DAILYWALL_DEBUG"),
            }
        }
    }
}
