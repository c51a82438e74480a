//! `file://` URIs for desktop settings that expect them.

use std::path::Path;

use crate::error::{Error, Result};

/// Percent-encode an absolute path into a `file://` URI.
///
/// Unreserved characters and `/` pass through; everything else is
/// encoded byte-wise, so spaces and non-ASCII names survive gsettings.
pub fn file_uri(path: &Path) -> Result<String> {
    let s = path
        .to_str()
        .ok_or_else(|| Error::Platform(format!("path is not valid UTF-8: {path:?}")))?;

    let mut out = String::with_capacity(s.len() + 7);
    out.push_str("file://");
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path() {
        assert_eq!(
            file_uri(Path::new("/home/me/data/2024-01-01.jpg")).unwrap(),
            "file:///home/me/data/2024-01-01.jpg"
        );
    }

    #[test]
    fn spaces_and_unicode_are_encoded() {
        assert_eq!(
            file_uri(Path::new("/home/me/My Pics/é.jpg")).unwrap(),
            "file:///home/me/My%20Pics/%C3%A9.jpg"
        );
    }
}
