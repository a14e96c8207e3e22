use thiserror::Error;

/// Errors from installing a [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A process-wide configuration is already in effect
    #[error("a resperr configuration is already installed")]
    AlreadyInstalled,
}
