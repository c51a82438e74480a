//! Host classification (OS + desktop environment).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Windows,
    Gnome,
    Kde,
    Xfce,
    Mate,
    Cinnamon,
    Lxde,
    /// Linux with a desktop identifier nothing in the table matched (raw, as read).
    Unknown(String),
    /// Neither Windows nor Linux; carries the OS name.
    Unsupported(String),
}

/// Substring table, checked top to bottom. First hit wins.
const DESKTOP_TABLE: &[(&[&str], Classification)] = &[
    (&["gnome", "unity", "budgie"], Classification::Gnome),
    (&["kde", "plasma"], Classification::Kde),
    (&["xfce"], Classification::Xfce),
    (&["mate"], Classification::Mate),
    (&["cinnamon"], Classification::Cinnamon),
    (&["lxde", "lxqt"], Classification::Lxde),
];

/// Classify a Linux desktop identifier (e.g. `XDG_CURRENT_DESKTOP`).
pub fn classify_desktop(identifier: &str) -> Classification {
    let de = identifier.to_lowercase();

    for (needles, kind) in DESKTOP_TABLE {
        if needles.iter().any(|n| de.contains(*n)) {
            return kind.clone();
        }
    }

    Classification::Unknown(identifier.to_string())
}

/// Classify from an OS identifier as reported by `std::env::consts::OS`
/// (`"windows"`, `"linux"`, ...). Case-insensitive.
pub fn classify(os: &str, desktop_identifier: &str) -> Classification {
    match os.to_ascii_lowercase().as_str() {
        "windows" => Classification::Windows,
        "linux" => classify_desktop(desktop_identifier),
        _ => Classification::Unsupported(os.to_string()),
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::Gnome => f.write_str("GNOME"),
            Self::Kde => f.write_str("KDE Plasma"),
            Self::Xfce => f.write_str("XFCE"),
            Self::Mate => f.write_str("MATE"),
            Self::Cinnamon => f.write_str("Cinnamon"),
            Self::Lxde => f.write_str("LXDE/LXQt"),
            Self::Unknown(de) if de.is_empty() => f.write_str("unknown desktop"),
            Self::Unknown(de) => write!(f, "unknown desktop ({de})"),
            Self::Unsupported(os) => write!(f, "unsupported OS ({os})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_classify() {
        let cases = [
            ("GNOME", Classification::Gnome),
            ("ubuntu:GNOME", Classification::Gnome),
            ("Unity", Classification::Gnome),
            ("Budgie:GNOME", Classification::Gnome),
            ("KDE", Classification::Kde),
            ("plasma", Classification::Kde),
            ("XFCE", Classification::Xfce),
            ("MATE", Classification::Mate),
            ("X-Cinnamon", Classification::Cinnamon),
            ("LXDE", Classification::Lxde),
            ("LXQt", Classification::Lxde),
        ];
        for (id, want) in cases {
            assert_eq!(classify_desktop(id), want, "identifier {id:?}");
        }
    }

    #[test]
    fn first_table_entry_wins() {
        assert_eq!(classify_desktop("kde-xfce"), Classification::Kde);
        assert_eq!(classify_desktop("xfce-kde"), Classification::Kde);
        assert_eq!(classify_desktop("gnome-plasma"), Classification::Gnome);
        assert_eq!(classify_desktop("mate+lxqt"), Classification::Mate);
    }

    #[test]
    fn unmatched_identifier_keeps_raw_string() {
        assert_eq!(
            classify_desktop("Hyprland"),
            Classification::Unknown("Hyprland".into())
        );
        assert_eq!(classify_desktop(""), Classification::Unknown(String::new()));
    }

    #[test]
    fn os_dispatch() {
        assert_eq!(classify("windows", "kde"), Classification::Windows);
        assert_eq!(classify("linux", "GNOME"), Classification::Gnome);
        assert_eq!(
            classify("Darwin", ""),
            Classification::Unsupported("Darwin".into())
        );
        assert_eq!(
            classify("macos", "gnome"),
            Classification::Unsupported("macos".into())
        );
    }

    #[test]
    fn display_names_raw_identifier() {
        assert_eq!(
            Classification::Unknown("sway".into()).to_string(),
            "unknown desktop (sway)"
        );
    }
}
