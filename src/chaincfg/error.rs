//! Contains chain configuration errors.
use thiserror::Error;

/// Network type errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTypeError {
    /// Name does not match a supported network.
    #[error("unknown network type: {0}")]
    UnknownNetwork(String),
}
