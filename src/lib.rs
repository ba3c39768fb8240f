//! Package coinutil provides coin-specific convenience functions and types,
//! most notably conversion between the floating point coin display unit and
//! the integer atom base unit that amounts are counted in.

pub mod amount;
pub mod chaincfg;
