// src/logging.rs
use anyhow::{Result, anyhow};
use clap::Args;
use tracing::level_filters::LevelFilter;

#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LoggingOpts {
    #[must_use]
    pub const fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Installs a compact stderr subscriber as the global default.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already set.
    pub fn configure_logging(&self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(self.to_level_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .try_init()
            .map_err(|e| anyhow!("Failed to configure logging: {e}"))
    }
}
