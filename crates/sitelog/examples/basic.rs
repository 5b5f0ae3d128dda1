//! Example showing the global logger and its configuration
//!
//! Run with `SITELOG_SHOW_LEVEL=1 SITELOG_TIME=iso8601 cargo run --example basic`
//! to see the prefix change.

use sitelog::prelude::*;
use sitelog::{List, timestamp};

fn main() {
    // Plain defaults: call site and payload only
    info!("Hello world!");

    // Pick up settings from the environment
    sitelog::global().replace(Config::from_env());
    info!("configured from environment");

    // Turn everything on
    sitelog::global().configure(|config| {
        config.show_level = true;
        config.timestamp = Some(timestamp::iso8601());
    });
    let colored = sitelog::global().set_color_enabled(true);
    info!("colors enabled:", colored);
    warn!("cache miss ratio", 0.42);

    // Structured payloads
    let request = Record::named("Request")
        .with("method", "GET")
        .with("path", "/health")
        .with("headers", Record::new().with("accept", "*/*"));
    error!("upstream failed for", &request);

    // Cycles are rendered once
    let ring = List::new();
    ring.push(1);
    ring.push(&ring);
    info!("ring:", &ring);

    // A dedicated logger with its own backends
    let audit = Logger::with_config(Config::default().with_info(
        |timestamp: &str, level: &str, callsite: &str, payload: &str| {
            println!("[audit] {timestamp}{level}{callsite} {payload}");
        },
    ));
    info!(logger: audit; "user", "ada", "signed in");
}
