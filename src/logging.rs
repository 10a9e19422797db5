// src/logging.rs
//
// tracing subscriber setup, once per process.

use crate::config::LoggingConfig;
use tracing::Level;

pub fn init(config: &LoggingConfig) {
    // validated with the rest of the config, fall back just in case
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);

    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}
