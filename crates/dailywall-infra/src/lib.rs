//! dailywall-infra: OS adapters (feed HTTP client, cache writes, desktop backends).

pub mod cache;
pub mod daily;
pub mod env_detect;
pub mod feed;
pub mod process_runner;
pub mod wallpaper;
