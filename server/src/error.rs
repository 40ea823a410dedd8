//! Host startup errors.

use crate::config::ConfigError;

/// Failure that stops the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Environment configuration could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos site configuration is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the listener failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
