//! Runner error type.

use doorstep_core::{ConfigError, SimError};

/// Errors the runner can hit before or during autoplay.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The rules engine rejected an operation.
    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    /// An environment variable held an unparseable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidEnv {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
