//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dailywall_infra::feed::FEED_ENDPOINT;

#[derive(Debug, Parser)]
#[command(name = "dailywall")]
#[command(about = "Download the image of the day and use it as wallpaper", long_about = None)]
pub struct Cli {
    /// Directory for downloaded images [default: ./data]
    #[arg(long, global = true, env = "DAILYWALL_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Feed endpoint returning the image-of-the-day document.
    #[arg(long, global = true, env = "DAILYWALL_FEED_URL", default_value = FEED_ENDPOINT)]
    pub feed_url: String,

    /// Network timeout per request, in seconds.
    #[arg(long, global = true, env = "DAILYWALL_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download today's image into the cache.
    Fetch {
        /// Also apply it as the desktop wallpaper.
        #[arg(long, env = "DAILYWALL_SET_WALLPAPER")]
        set_wallpaper: bool,
    },

    /// Set wallpaper to the given image path.
    Set {
        /// Absolute or relative path to an image file.
        image: PathBuf,
    },

    /// Print the detected OS / desktop environment.
    Detect,
}
