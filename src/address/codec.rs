//! Bech32 address codec
//!
//! An address is `prefix | '1' | base32(payload) | checksum`. The checksum
//! covers both the network prefix and the payload. Full payloads use the
//! bech32m constant, short payloads the original bech32 constant.

use super::error::AddressError;
use super::network::Network;
use super::payload::AddressPayload;
use crate::core::Script;
use bech32::{FromBase32, ToBase32};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Longest address the BCH checksum protects with its full guarantees
pub const MAX_ADDRESS_LEN: usize = 1023;

/// A network-tagged address
///
/// Two addresses are equal when they pay to the same lock script on the same
/// network. The payload format only decides how the address is written.
#[derive(Debug, Clone)]
pub struct Address {
    network: Network,
    payload: AddressPayload,
}

impl Address {
    pub fn new(network: Network, payload: AddressPayload) -> Self {
        Self { network, payload }
    }

    /// Full-format address for any script
    pub fn from_script(network: Network, script: Script) -> Self {
        Self::new(network, AddressPayload::full(script))
    }

    /// Shortest address for a script, short format for system locks
    pub fn compact(network: Network, script: &Script) -> Self {
        Self::new(network, AddressPayload::compact(script, network))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn payload(&self) -> &AddressPayload {
        &self.payload
    }

    /// The lock script this address pays to
    pub fn lock_script(&self) -> Script {
        self.payload.to_script(self.network)
    }

    /// Encode into the textual address
    pub fn encode(&self) -> Result<String, AddressError> {
        let data = self.payload.to_bytes();
        let variant = self.payload.format().variant();
        let encoded = bech32::encode(self.network.prefix(), data.to_base32(), variant)
            .map_err(|e| AddressError::Encoding(e.to_string()))?;

        if encoded.len() > MAX_ADDRESS_LEN {
            return Err(AddressError::Encoding(format!(
                "address length {} exceeds {}",
                encoded.len(),
                MAX_ADDRESS_LEN
            )));
        }

        log::debug!(
            "encoded {} {} address ({} payload bytes)",
            self.network,
            self.payload.format().name(),
            data.len()
        );
        Ok(encoded)
    }

    /// Decode a textual address
    ///
    /// Only the canonical lowercase form is accepted, so every address
    /// string maps to exactly one `(network, payload)` pair.
    pub fn decode(address: &str) -> Result<Self, AddressError> {
        if address.len() > MAX_ADDRESS_LEN {
            return Err(AddressError::MalformedPayload(format!(
                "address length {} exceeds {}",
                address.len(),
                MAX_ADDRESS_LEN
            )));
        }
        if address.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(AddressError::MalformedPayload(
                "address must be lowercase".to_string(),
            ));
        }

        let (prefix, data, variant) = bech32::decode(address)?;
        let network =
            Network::from_prefix(&prefix).ok_or(AddressError::UnknownNetwork(prefix))?;
        let bytes = Vec::<u8>::from_base32(&data)?;
        let payload = AddressPayload::from_bytes(&bytes)?;

        if payload.format().variant() != variant {
            return Err(AddressError::MalformedPayload(format!(
                "{} address with {:?} checksum",
                payload.format().name(),
                variant
            )));
        }

        Ok(Self { network, payload })
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && self.lock_script() == other.lock_script()
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.network, state);
        Hash::hash(&self.lock_script(), state);
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Encode a lock script as a full-format address
pub fn encode(network: Network, lock_script: &Script) -> Result<String, AddressError> {
    Address::from_script(network, lock_script.clone()).encode()
}

/// Decode any supported address into its network and lock script
pub fn decode(address: &str) -> Result<(Network, Script), AddressError> {
    let address = Address::decode(address)?;
    Ok((address.network(), address.lock_script()))
}
