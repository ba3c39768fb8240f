//! Contains amount conversion errors.
use thiserror::Error;

/// Amount related errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Amount is negative, not finite, malformed, or past the maximum
    /// transactable amount.
    #[error("invalid coin amount")]
    InvalidAmount,
}
