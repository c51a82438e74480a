//! Environment detection (OS + desktop session).

use dailywall_core::classification::{classify, Classification};

/// Desktop identifier: `XDG_CURRENT_DESKTOP`, else `DESKTOP_SESSION`, else empty.
pub fn desktop_identifier() -> String {
    ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"]
        .iter()
        .filter_map(|k| std::env::var(k).ok())
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Classify the running host. Never cached; call once per operation.
pub fn detect() -> Classification {
    let os = std::env::consts::OS;
    let desktop = if os == "linux" {
        desktop_identifier()
    } else {
        String::new()
    };

    let c = classify(os, &desktop);
    tracing::debug!(os, desktop = %desktop, classification = %c, "detected environment");
    c
}
