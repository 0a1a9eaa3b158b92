// src/core/config.rs
use std::env;

use log::LevelFilter;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(val) = env::var("LOG_LEVEL") {
            match val.parse() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Unknown log level '{}', using Info", val),
            }
        }

        config
    }
}
