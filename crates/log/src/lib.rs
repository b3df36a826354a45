//! # stockroom-log
//!
//! Logging setup shared by the stockroom binaries.
//!
//! ```rust,ignore
//! fn main() -> Result<(), stockroom_log::LogError> {
//!     stockroom_log::auto_init()?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```
//!
//! Libraries only emit `tracing` events; installing a subscriber is the
//! binary's job.

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Picks a configuration from the environment.
///
/// Explicit `STOCKROOM_LOG`/`RUST_LOG` settings win; otherwise debug builds
/// use [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<()> {
    if std::env::var("STOCKROOM_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
