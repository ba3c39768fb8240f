use super::NetworkTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The coin networks an amount can be denominated on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
    /// The private simulation network.
    Simnet,
    /// The development network.
    Devnet,
}

impl NetworkType {
    /// The currency suffix appended to amounts formatted for this network.
    pub fn currency_suffix(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "COIN",
            NetworkType::Testnet => "TCOIN",
            NetworkType::Simnet => "SCOIN",
            NetworkType::Devnet => "DCOIN",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Simnet => "simnet",
            NetworkType::Devnet => "devnet",
        })
    }
}

impl FromStr for NetworkType {
    type Err = NetworkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(NetworkType::Mainnet),
            "testnet" => Ok(NetworkType::Testnet),
            "simnet" => Ok(NetworkType::Simnet),
            "devnet" => Ok(NetworkType::Devnet),
            _ => Err(NetworkTypeError::UnknownNetwork(s.to_string())),
        }
    }
}
