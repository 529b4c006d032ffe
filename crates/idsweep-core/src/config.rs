//! Sweep configuration and compiled-in defaults

use std::path::PathBuf;

/// Default page endpoint; the ID is appended as the final path segment
pub const DEFAULT_BASE_URL: &str = "https://eticket.kiostix.com/e";

/// First ID the ticketing system ever issued — the sweep origin used
/// when neither a checkpoint nor an explicit start ID is available
pub const DEFAULT_START_ID: u64 = 16_816_356_000_000;

pub const DEFAULT_WORKERS: usize = 32;
pub const MAX_WORKERS: usize = 1024;

/// Runtime configuration for one sweep
#[derive(Clone, Debug)]
pub struct Config {
    /// Output root; category directories are created underneath
    pub out_dir: PathBuf,
    pub base_url: String,
    /// Explicit start ID; `None` resumes from the checkpoint (or the
    /// compiled-in origin)
    pub start_id: Option<u64>,
    /// End of the sweep, exclusive
    pub end_id: u64,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_string(),
            start_id: None,
            end_id: u64::MAX,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_WORKERS).contains(&self.workers),
            "worker count must be between 1 and {MAX_WORKERS}, got {}",
            self.workers
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn worker_bounds_enforced() {
        let mut config = Config::default();
        config.workers = 0;
        assert!(config.validate().is_err());
        config.workers = 1;
        assert!(config.validate().is_ok());
        config.workers = MAX_WORKERS;
        assert!(config.validate().is_ok());
        config.workers = MAX_WORKERS + 1;
        assert!(config.validate().is_err());
    }
}
