//! Package amount provides coin monetary amount types and conversions
//! between the floating point coin display unit and the integer atom base
//! unit amounts are counted in.

pub mod constants;
mod error;

pub use error::AmountError;

use crate::chaincfg::NetworkType;
use log::warn;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Various denominations when describing a coin monetary amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Denomination {
    /// Coin * 10^6
    AmountMegaCoin,
    /// Coin * 10^3
    AmountKiloCoin,
    /// Coin
    AmountCoin,
    /// Coin * 10^-3
    AmountMilliCoin,
    /// Coin * 10^-6
    AmountMicroCoin,
    /// Coin * 10^-8
    AmountAtom,
}

impl Denomination {
    /// The number of decimal places.
    fn precision(self) -> i32 {
        match self {
            Denomination::AmountMegaCoin => 6,
            Denomination::AmountKiloCoin => 3,
            Denomination::AmountCoin => 0,
            Denomination::AmountMilliCoin => -3,
            Denomination::AmountMicroCoin => -6,
            Denomination::AmountAtom => -8,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Denomination::AmountMegaCoin => "MCOIN",
            Denomination::AmountKiloCoin => "kCOIN",
            Denomination::AmountCoin => "COIN",
            Denomination::AmountMilliCoin => "mCOIN",
            Denomination::AmountMicroCoin => "μCOIN",
            Denomination::AmountAtom => "Atom",
        })
    }
}

/// Converts a floating point number of atoms, which may or may not be
/// representable as an integer, to the Amount integer type by rounding to
/// the nearest integer.  Ties round away from zero; the input is never
/// negative by the time it reaches here, so this is performed by adding 0.5
/// and relying on integer truncation.
fn round(f: f64) -> u64 {
    (f + 0.5) as u64
}

/// Creates an Amount from a floating point value representing some value in
/// coins.  Errors if the value is NaN or +-Infinity, negative, or rounds to
/// an atom count past the maximum transactable amount.
///
/// It is specifically for converting coins to atoms (atomic units).  For
/// creating an Amount from an integer quantity of atoms, use a plain
/// `Amount::from` conversion.
pub fn new(coins: f64) -> Result<Amount, AmountError> {
    if !coins.is_finite() || coins < 0.0 {
        return Err(AmountError::InvalidAmount);
    }

    let atoms = round(coins * constants::ATOMS_PER_COIN as f64);
    if atoms > constants::MAX_AMOUNT {
        return Err(AmountError::InvalidAmount);
    }

    Ok(Amount(atoms))
}

/// Parses a user supplied coin string that may be empty.  An empty or
/// whitespace-only string is treated as no amount rather than an error.
pub fn try_coin_str_to_atoms<S: Into<String>>(s: S) -> Result<Option<Amount>, AmountError> {
    let s: String = s.into();
    let amount = s.trim();
    if amount.is_empty() {
        return Ok(None);
    }

    Ok(Some(amount.parse()?))
}

/// Amount represents a quantity of the base coin monetary unit
/// (colloquially referred to as an "atom").  A single Amount unit is equal
/// to 1e-8 of a coin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// The quantity of atoms as a bare integer.
    pub fn to_atoms(&self) -> u64 {
        self.0
    }

    /// Converts a monetary amount counted in coin base units to a floating
    /// point value representing an amount of coins.  Exact for every valid
    /// amount, as the whole transactable range sits below 2^53.
    pub fn to_unit(&self, denom: Denomination) -> f64 {
        self.0 as f64 / 10f64.powi(denom.precision() + 8)
    }

    // Equivalent of calling to_unit with AmountCoin.
    pub fn to_coin(&self) -> f64 {
        self.to_unit(Denomination::AmountCoin)
    }

    /// Formats a monetary amount counted in coin base units as a string for
    /// a given unit.  The conversion will succeed for any unit, and the
    /// value is formatted with an appended label describing the unit with
    /// SI notation, or "Atom" for the base unit.
    pub fn format(&self, denomination: Denomination) -> String {
        format!("{} {}", self.to_unit(denomination), denomination)
    }

    /// Formats the amount as an exact coin string followed by the currency
    /// suffix of the given network.
    pub fn format_with_suffix(&self, network_type: &NetworkType) -> String {
        format!("{} {}", self, network_type.currency_suffix())
    }

    /// Formats the amount as a coin string keeping all 8 fractional digits.
    pub fn to_coin_string_with_trailing_zeroes(&self) -> String {
        format!(
            "{}.{:08}",
            self.0 / constants::ATOMS_PER_COIN,
            self.0 % constants::ATOMS_PER_COIN
        )
    }

    /// Multiplies an Amount by a floating point value.  While this is not
    /// an operation that must typically be done by a full node or wallet,
    /// it is useful for services building on top of the coin (for example,
    /// calculating a fee by multiplying by a percentage).  Errors if the
    /// product is NaN, negative, or past the maximum transactable amount.
    pub fn mul_f64(&self, f: f64) -> Result<Amount, AmountError> {
        let product = self.0 as f64 * f;
        if !product.is_finite() || product < 0.0 {
            return Err(AmountError::InvalidAmount);
        }

        let atoms = round(product);
        if atoms > constants::MAX_AMOUNT {
            return Err(AmountError::InvalidAmount);
        }

        Ok(Amount(atoms))
    }
}

impl From<u64> for Amount {
    fn from(atoms: u64) -> Self {
        Amount(atoms)
    }
}

impl TryFrom<i64> for Amount {
    type Error = AmountError;

    /// Atom counts received as signed integers must be non-negative.
    fn try_from(atoms: i64) -> Result<Self, Self::Error> {
        if atoms < 0 {
            return Err(AmountError::InvalidAmount);
        }

        Ok(Amount(atoms as u64))
    }
}

impl fmt::Display for Amount {
    /// Writes the exact coin value of the amount, with the fraction trimmed
    /// of trailing zeros.  Formatting never passes through floating point.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let coins = self.0 / constants::ATOMS_PER_COIN;
        let mut fraction = self.0 % constants::ATOMS_PER_COIN;

        write!(f, "{coins}")?;

        if fraction > 0 {
            let mut width: usize = 8;

            while fraction % 10 == 0 {
                fraction /= 10;
                width -= 1;
            }

            write!(f, ".{fraction:0>width$}")?;
        }

        Ok(())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses a decimal coin string into an Amount using integer arithmetic
    /// only.  Fractional digits past the 8th are rounded half away from
    /// zero into the smallest representable unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.trim();
        if amount.is_empty() {
            return Err(AmountError::InvalidAmount);
        }

        let atoms = match amount.find('.') {
            None => coins_part_to_atoms(amount)?,
            Some(dot_idx) => {
                let integer = coins_part_to_atoms(&amount[..dot_idx])?;
                let decimal = fraction_part_to_atoms(&amount[dot_idx + 1..])?;

                integer
                    .checked_add(decimal)
                    .ok_or(AmountError::InvalidAmount)?
            }
        };

        if atoms > constants::MAX_AMOUNT {
            return Err(AmountError::InvalidAmount);
        }

        Ok(Amount(atoms))
    }
}

/// Scales the whole-coin part of a decimal string to atoms.
fn coins_part_to_atoms(s: &str) -> Result<u64, AmountError> {
    let coins = s.parse::<u64>().map_err(|_| AmountError::InvalidAmount)?;

    coins
        .checked_mul(constants::ATOMS_PER_COIN)
        .ok_or(AmountError::InvalidAmount)
}

/// Scales the fractional part of a decimal string to atoms, rounding
/// anything past 8 digits half away from zero.
fn fraction_part_to_atoms(s: &str) -> Result<u64, AmountError> {
    if s.is_empty() {
        return Ok(0);
    }

    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidAmount);
    }

    if s.len() <= 8 {
        let digits = s.parse::<u64>().map_err(|_| AmountError::InvalidAmount)?;

        return Ok(digits * 10u64.pow(8 - s.len() as u32));
    }

    warn!("coin amount fraction .{s} has more than 8 digits, rounding to the nearest atom");

    let kept = s[..8].parse::<u64>().map_err(|_| AmountError::InvalidAmount)?;
    if s.as_bytes()[8] >= b'5' {
        Ok(kept + 1)
    } else {
        Ok(kept)
    }
}

/// Amounts travel on the wire as a floating point number of coins.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_coin())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coins = f64::deserialize(deserializer)?;

        new(coins).map_err(de::Error::custom)
    }
}
