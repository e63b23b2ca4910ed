#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use clap::Parser;
use coco_park::{app::App, config::Cli, constants::LOOP_TIME, formatter::CustomFormatter};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")
}

/// Runs the park headless with the autopilot playing. See `--help` for the flags.
pub fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let (config, options) = Cli::parse().into_config().context("Invalid arguments")?;

    let mut app = App::new(config, options).context("Could not start the game")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!(rounds = app.rounds_finished(), "Exiting");
    Ok(())
}
