use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Page
    pub page_file: PathBuf,

    // Preferences
    pub prefs_file: PathBuf,

    // Contact form
    pub banner_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Page fixture loaded by the demo host
            page_file: std::env::var("PAGE_FILE")
                .unwrap_or_else(|_| "demos/page.json".to_string())
                .into(),

            // Locale preference file
            prefs_file: std::env::var("PREFS_FILE")
                .unwrap_or_else(|_| ".site-prefs.json".to_string())
                .into(),

            // Banner expiry
            banner_timeout: match std::env::var("BANNER_TIMEOUT_MS") {
                Ok(value) => Duration::from_millis(
                    value
                        .parse()
                        .context("BANNER_TIMEOUT_MS must be a number of milliseconds")?,
                ),
                Err(_) => crate::form::DEFAULT_BANNER_TIMEOUT,
            },
        })
    }
}
