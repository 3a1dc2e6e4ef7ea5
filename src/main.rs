use anyhow::{Context, Result};
use env_logger::Env;
use podium::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = podium::generate_site(&config).context("Failed to generate site")?;

    if !config.no_open
        && let Err(e) = open::that(site.index_path())
    {
        log::warn!("Failed to open {}: {}", site.index_path().display(), e);
    }

    Ok(())
}
