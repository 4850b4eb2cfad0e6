//! Error type for site assembly
use thiserror::Error;

/// Failures surfaced by configuration loading and the site build. The
/// converter itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
