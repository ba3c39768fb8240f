//! Amount constants.

/// Number of atomic units in one coin cent.
pub const ATOMS_PER_CENT: u64 = 1_000_000;
/// Number of atomic units in one coin.
pub const ATOMS_PER_COIN: u64 = 100_000_000;
/// Maximum transaction amount allowed in atoms.
pub const MAX_AMOUNT: u64 = 21_000_000 * ATOMS_PER_COIN;
