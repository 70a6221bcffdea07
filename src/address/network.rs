//! Network selection and per-network address parameters

use super::error::AddressError;
use crate::core::{SystemScript, ANYONE_CAN_PAY_MAINNET, ANYONE_CAN_PAY_TESTNET};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address parameters fixed by the protocol for one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Name used on the command line and in logs
    pub name: &'static str,
    /// Human-readable part of bech32 addresses
    pub prefix: &'static str,
    /// Anyone-can-pay lock, the only system lock deployed differently per network
    pub anyone_can_pay: SystemScript,
}

pub const MAINNET_PARAMS: NetworkParams = NetworkParams {
    name: "mainnet",
    prefix: "ckb",
    anyone_can_pay: ANYONE_CAN_PAY_MAINNET,
};

pub const TESTNET_PARAMS: NetworkParams = NetworkParams {
    name: "testnet",
    prefix: "ckt",
    anyone_can_pay: ANYONE_CAN_PAY_TESTNET,
};

/// The network an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Protocol parameters for this network
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Network::Mainnet => &MAINNET_PARAMS,
            Network::Testnet => &TESTNET_PARAMS,
        }
    }

    /// Human-readable address prefix (`ckb` or `ckt`)
    pub fn prefix(self) -> &'static str {
        self.params().prefix
    }

    /// Look up a network by its address prefix
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.prefix() == prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name)
    }
}

impl FromStr for Network {
    type Err = AddressError;

    /// Accepts network names as well as address prefixes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.params().name == s || n.prefix() == s)
            .ok_or_else(|| AddressError::UnknownNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Network::Mainnet.prefix(), "ckb");
        assert_eq!(Network::Testnet.prefix(), "ckt");
        assert_eq!(Network::from_prefix("ckt"), Some(Network::Testnet));
        assert_eq!(Network::from_prefix("bc"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("ckt".parse::<Network>(), Ok(Network::Testnet));
        assert_eq!(
            "devnet".parse::<Network>(),
            Err(AddressError::UnknownNetwork("devnet".to_string()))
        );
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
