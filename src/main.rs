mod args;
mod logging;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use dailywall_core::cache::CACHE_DIR_NAME;
use dailywall_infra::daily::Pipeline;
use dailywall_infra::env_detect;
use dailywall_infra::feed::BingFeed;
use dailywall_infra::process_runner::SystemRunner;
use dailywall_infra::wallpaper;

fn main() {
    logging::init();

    if let Err(err) = real_main() {
        output::print_error(&err);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let cli = args::Cli::parse();
    let runner = SystemRunner;

    match cli.cmd {
        args::Command::Fetch { set_wallpaper } => {
            let cache_dir = match cli.cache_dir {
                Some(dir) => dir,
                None => default_cache_dir()?,
            };
            // Computed once; every step below targets the same file.
            let date = chrono::Local::now().date_naive();
            tracing::debug!(cache_dir = %cache_dir.display(), %date, "fetch");

            let feed = BingFeed::new(cli.feed_url, Duration::from_secs(cli.timeout))?;
            let pipeline = Pipeline {
                feed: &feed,
                runner: &runner,
                detect: &env_detect::detect,
            };

            let out = pipeline
                .download_and_apply(&cache_dir, date, set_wallpaper)
                .context("daily image")?;

            output::print_saved(&out.image);
            if out.applied.is_some() {
                output::print_applied(&out.image);
            }
            Ok(())
        }
        args::Command::Set { image } => {
            let desktop = env_detect::detect();
            let abs = wallpaper::set_wallpaper(&desktop, &image, &runner)
                .with_context(|| format!("{desktop} wallpaper"))?;
            output::print_applied(&abs);
            Ok(())
        }
        args::Command::Detect => {
            println!("{}", env_detect::detect());
            Ok(())
        }
    }
}

fn default_cache_dir() -> anyhow::Result<PathBuf> {
    Ok(std::env::current_dir().context("cwd")?.join(CACHE_DIR_NAME))
}
