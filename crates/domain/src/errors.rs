use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("Failed to resolve '{0}': no addresses found")]
    UnresolvedAddress(String),

    #[error("Timed out resolving '{0}'")]
    ResolveTimeout(String),

    #[error("Failed to decode DNS message: {0}")]
    DecodeError(String),

    #[error("Failed to encode DNS message: {0}")]
    EncodeError(String),

    #[error("Network restart command failed: {0}")]
    NetworkRestartFailed(String),

    #[error("Network restart command timed out after {0} seconds")]
    NetworkRestartTimeout(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
