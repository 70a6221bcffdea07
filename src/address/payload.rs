//! Address payloads: the bytes wrapped by the bech32 encoding
//!
//! Two layouts are supported:
//! - full: `0x00 | code_hash (32) | hash_type (1) | args`, bech32m
//! - short: `0x01 | code_hash_index (1) | args`, bech32, system locks only
//!
//! The deprecated full layouts `0x02`/`0x04` are rejected on decode.

use super::error::AddressError;
use super::network::Network;
use crate::core::{Script, ScriptHashType, SystemScript, MULTISIG_ALL, SIGHASH_ALL};
use crate::crypto::{BLAKE160_LEN, HASH_LEN};
use bech32::Variant;
use std::ops::RangeInclusive;

// =============================================================================
// Format
// =============================================================================

/// Leading byte of an address payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressFormat {
    /// Any script: code hash, hash type and args
    Full = 0x00,
    /// System lock referenced by a one-byte index
    Short = 0x01,
}

const DEPRECATED_FULL_DATA: u8 = 0x02;
const DEPRECATED_FULL_TYPE: u8 = 0x04;

impl AddressFormat {
    /// Checksum variant mandated for this format
    pub fn variant(self) -> Variant {
        match self {
            AddressFormat::Full => Variant::Bech32m,
            AddressFormat::Short => Variant::Bech32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressFormat::Full => "full",
            AddressFormat::Short => "short",
        }
    }
}

// =============================================================================
// Code Hash Index
// =============================================================================

/// System lock selector used by the short format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CodeHashIndex {
    Sighash = 0x00,
    Multisig = 0x01,
    AnyoneCanPay = 0x02,
}

impl CodeHashIndex {
    pub const ALL: [CodeHashIndex; 3] = [
        CodeHashIndex::Sighash,
        CodeHashIndex::Multisig,
        CodeHashIndex::AnyoneCanPay,
    ];

    pub fn from_byte(byte: u8) -> Result<Self, AddressError> {
        Self::ALL
            .into_iter()
            .find(|index| *index as u8 == byte)
            .ok_or_else(|| {
                AddressError::MalformedPayload(format!("unknown code hash index {byte:#04x}"))
            })
    }

    /// The system lock this index refers to on a network
    pub fn system_script(self, network: Network) -> SystemScript {
        match self {
            CodeHashIndex::Sighash => SIGHASH_ALL,
            CodeHashIndex::Multisig => MULTISIG_ALL,
            CodeHashIndex::AnyoneCanPay => network.params().anyone_can_pay,
        }
    }

    /// Args lengths the short format accepts for this index
    ///
    /// Anyone-can-pay may append a CKB and a UDT minimum amount exponent.
    pub fn args_len_range(self) -> RangeInclusive<usize> {
        match self {
            CodeHashIndex::Sighash | CodeHashIndex::Multisig => BLAKE160_LEN..=BLAKE160_LEN,
            CodeHashIndex::AnyoneCanPay => BLAKE160_LEN..=BLAKE160_LEN + 2,
        }
    }
}

// =============================================================================
// Payload
// =============================================================================

/// Decoded content of an address, independent of its network prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressPayload {
    Short { index: CodeHashIndex, args: Vec<u8> },
    Full(Script),
}

impl AddressPayload {
    /// Short payload, checking the args length allowed for the index
    pub fn short(index: CodeHashIndex, args: Vec<u8>) -> Result<Self, AddressError> {
        if !index.args_len_range().contains(&args.len()) {
            return Err(AddressError::MalformedPayload(format!(
                "{} bytes of args not allowed for code hash index {:#04x}",
                args.len(),
                index as u8
            )));
        }
        Ok(AddressPayload::Short { index, args })
    }

    /// Full payload for any script
    pub fn full(script: Script) -> Self {
        AddressPayload::Full(script)
    }

    /// Shortest payload representing the script on a network
    ///
    /// System locks with args the short format can carry get the short
    /// layout; everything else falls back to the full layout.
    pub fn compact(script: &Script, network: Network) -> Self {
        CodeHashIndex::ALL
            .into_iter()
            .find(|index| {
                index.system_script(network).matches(script)
                    && index.args_len_range().contains(&script.args.len())
            })
            .map(|index| AddressPayload::Short {
                index,
                args: script.args.clone(),
            })
            .unwrap_or_else(|| AddressPayload::Full(script.clone()))
    }

    pub fn format(&self) -> AddressFormat {
        match self {
            AddressPayload::Short { .. } => AddressFormat::Short,
            AddressPayload::Full(_) => AddressFormat::Full,
        }
    }

    /// Lock script this payload stands for on a network
    pub fn to_script(&self, network: Network) -> Script {
        match self {
            AddressPayload::Short { index, args } => {
                index.system_script(network).lock(args.clone())
            }
            AddressPayload::Full(script) => script.clone(),
        }
    }

    /// Serialize to the bytes fed into the bech32 encoder
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AddressPayload::Short { index, args } => {
                let mut out = Vec::with_capacity(2 + args.len());
                out.push(AddressFormat::Short as u8);
                out.push(*index as u8);
                out.extend_from_slice(args);
                out
            }
            AddressPayload::Full(script) => {
                let mut out = Vec::with_capacity(2 + HASH_LEN + script.args.len());
                out.push(AddressFormat::Full as u8);
                out.extend_from_slice(&script.code_hash);
                out.push(script.hash_type.as_byte());
                out.extend_from_slice(&script.args);
                out
            }
        }
    }

    /// Parse payload bytes produced by [`AddressPayload::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let (&format, rest) = bytes
            .split_first()
            .ok_or_else(|| AddressError::MalformedPayload("empty payload".to_string()))?;

        match format {
            f if f == AddressFormat::Full as u8 => {
                if rest.len() < HASH_LEN + 1 {
                    return Err(AddressError::MalformedPayload(format!(
                        "full payload too short: {} bytes",
                        bytes.len()
                    )));
                }
                let mut code_hash = [0u8; HASH_LEN];
                code_hash.copy_from_slice(&rest[..HASH_LEN]);
                let hash_type = ScriptHashType::from_byte(rest[HASH_LEN])
                    .map_err(|e| AddressError::MalformedPayload(e.to_string()))?;
                let args = rest[HASH_LEN + 1..].to_vec();
                Ok(AddressPayload::Full(Script::new(code_hash, hash_type, args)))
            }
            f if f == AddressFormat::Short as u8 => {
                let (&index, args) = rest.split_first().ok_or_else(|| {
                    AddressError::MalformedPayload("short payload missing index".to_string())
                })?;
                Self::short(CodeHashIndex::from_byte(index)?, args.to_vec())
            }
            DEPRECATED_FULL_DATA | DEPRECATED_FULL_TYPE => Err(AddressError::MalformedPayload(
                format!("deprecated full address format {format:#04x}"),
            )),
            other => Err(AddressError::MalformedPayload(format!(
                "unknown address format {other:#04x}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multisig_lock() -> Script {
        MULTISIG_ALL.lock(vec![0x11; 20])
    }

    #[test]
    fn test_compact_picks_short_for_system_locks() {
        let payload = AddressPayload::compact(&multisig_lock(), Network::Testnet);
        assert_eq!(
            payload,
            AddressPayload::Short {
                index: CodeHashIndex::Multisig,
                args: vec![0x11; 20]
            }
        );
        assert_eq!(payload.format(), AddressFormat::Short);
        assert_eq!(payload.to_script(Network::Testnet), multisig_lock());
    }

    #[test]
    fn test_compact_falls_back_to_full() {
        // multisig args carrying a since value do not fit the short layout
        let lock = MULTISIG_ALL.lock(vec![0x11; 28]);
        let payload = AddressPayload::compact(&lock, Network::Mainnet);
        assert_eq!(payload.format(), AddressFormat::Full);
        assert_eq!(payload, AddressPayload::Full(lock));

        let data_lock = Script::new(SIGHASH_ALL.code_hash, ScriptHashType::Data, vec![0; 20]);
        assert!(matches!(
            AddressPayload::compact(&data_lock, Network::Mainnet),
            AddressPayload::Full(_)
        ));
    }

    #[test]
    fn test_anyone_can_pay_depends_on_network() {
        let acp = crate::core::ANYONE_CAN_PAY_TESTNET.lock(vec![0x22; 21]);
        assert!(matches!(
            AddressPayload::compact(&acp, Network::Testnet),
            AddressPayload::Short {
                index: CodeHashIndex::AnyoneCanPay,
                ..
            }
        ));
        assert!(matches!(
            AddressPayload::compact(&acp, Network::Mainnet),
            AddressPayload::Full(_)
        ));
    }

    #[test]
    fn test_full_layout() {
        let bytes = AddressPayload::full(multisig_lock()).to_bytes();
        assert_eq!(bytes.len(), 1 + 32 + 1 + 20);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[1..33], &MULTISIG_ALL.code_hash);
        assert_eq!(bytes[33], 0x01);
        assert_eq!(
            AddressPayload::from_bytes(&bytes).unwrap(),
            AddressPayload::Full(multisig_lock())
        );
    }

    #[test]
    fn test_short_args_length_checked() {
        assert!(AddressPayload::short(CodeHashIndex::Multisig, vec![0; 19]).is_err());
        assert!(AddressPayload::short(CodeHashIndex::Sighash, vec![0; 21]).is_err());
        assert!(AddressPayload::short(CodeHashIndex::AnyoneCanPay, vec![0; 22]).is_ok());
        assert!(AddressPayload::short(CodeHashIndex::AnyoneCanPay, vec![0; 23]).is_err());
    }

    #[test]
    fn test_rejects_malformed_bytes() {
        let cases: Vec<Vec<u8>> = vec![
            vec![],
            vec![0x00; 20],
            vec![0x01],
            vec![0x01, 0x07, 0x00],
            vec![0x02; 40],
            vec![0x04; 40],
            vec![0x09, 0x00],
        ];
        for bytes in cases {
            assert!(
                matches!(
                    AddressPayload::from_bytes(&bytes),
                    Err(AddressError::MalformedPayload(_))
                ),
                "accepted {}",
                hex::encode(&bytes)
            );
        }

        let mut bad_hash_type = AddressPayload::full(multisig_lock()).to_bytes();
        bad_hash_type[33] = 0x09;
        assert!(AddressPayload::from_bytes(&bad_hash_type).is_err());
    }
}
