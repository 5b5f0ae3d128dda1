//! Example forwarding `log` facade records through sitelog
//!
//! Run with `cargo run --example bridge --features log-compat`.

use sitelog::{Config, LogBridge, Logger};

fn main() -> anyhow::Result<()> {
    let logger = Logger::with_config(Config::development());
    LogBridge::new(logger.clone())
        .max_level(log::LevelFilter::Debug)
        .install()?;

    log::info!("routed through the bridge");
    log::warn!("retrying in {}s", 5);
    log::debug!("debug records map to info");

    // Direct calls and bridged records share one configuration
    logger.configure(|config| config.show_level = false);
    log::error!("level labels now hidden");

    Ok(())
}
