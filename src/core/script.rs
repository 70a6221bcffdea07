//! Lock script model
//!
//! A CKB script is the triple `(code_hash, hash_type, args)`: `code_hash`
//! names the verifier program, `hash_type` says how that name is resolved
//! and `args` parameterizes the program (for multisig: the policy hash).

use crate::crypto::{finalize, new_blake2b, strip_hex_prefix, HASH_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Script Errors
// =============================================================================

/// Script-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Invalid hash type: {0:#04x}")]
    InvalidHashType(u8),
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Malformed script: {0}")]
    Malformed(String),
}

// =============================================================================
// Hash Type
// =============================================================================

/// How a script's `code_hash` is matched against deployed code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ScriptHashType {
    /// Match the hash of the cell data holding the code
    Data = 0x00,
    /// Match the hash of the type script of the cell holding the code
    Type = 0x01,
    /// Like `Data`, executed with the 2021 VM version
    Data1 = 0x02,
}

impl ScriptHashType {
    /// Parse a hash type from its wire byte
    pub fn from_byte(byte: u8) -> Result<Self, ScriptError> {
        match byte {
            0x00 => Ok(ScriptHashType::Data),
            0x01 => Ok(ScriptHashType::Type),
            0x02 => Ok(ScriptHashType::Data1),
            other => Err(ScriptError::InvalidHashType(other)),
        }
    }

    /// Wire byte of this hash type
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Name used in JSON and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ScriptHashType::Data => "data",
            ScriptHashType::Type => "type",
            ScriptHashType::Data1 => "data1",
        }
    }
}

impl fmt::Display for ScriptHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptHashType {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(ScriptHashType::Data),
            "type" => Ok(ScriptHashType::Type),
            "data1" => Ok(ScriptHashType::Data1),
            other => Err(ScriptError::Malformed(format!("unknown hash type {other:?}"))),
        }
    }
}

// =============================================================================
// Script
// =============================================================================

/// A lock (or type) script
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    #[serde(with = "hex_hash")]
    pub code_hash: [u8; 32],
    pub hash_type: ScriptHashType,
    #[serde(with = "hex_bytes")]
    pub args: Vec<u8>,
}

/// Size of the molecule table header: total size plus three field offsets
const MOLECULE_HEADER_LEN: usize = 4 * 4;

impl Script {
    /// Create a new script
    pub fn new(code_hash: [u8; 32], hash_type: ScriptHashType, args: Vec<u8>) -> Self {
        Self {
            code_hash,
            hash_type,
            args,
        }
    }

    /// Create a script from a hex code hash (optional `0x` prefix)
    pub fn from_hex(
        code_hash_hex: &str,
        hash_type: ScriptHashType,
        args: Vec<u8>,
    ) -> Result<Self, ScriptError> {
        let code_hash = parse_hash(code_hash_hex)?;
        Ok(Self::new(code_hash, hash_type, args))
    }

    /// Molecule `Script` table encoding, the form hashed on chain
    ///
    /// Layout: `total_size | offset(code_hash) | offset(hash_type) |
    /// offset(args) | code_hash | hash_type | args_len | args`, all integers
    /// little-endian `u32`.
    pub fn to_molecule(&self) -> Vec<u8> {
        let args_field_len = 4 + self.args.len();
        let total = MOLECULE_HEADER_LEN + HASH_LEN + 1 + args_field_len;
        let code_hash_offset = MOLECULE_HEADER_LEN;
        let hash_type_offset = code_hash_offset + HASH_LEN;
        let args_offset = hash_type_offset + 1;

        let mut out = Vec::with_capacity(total);
        for word in [total, code_hash_offset, hash_type_offset, args_offset] {
            out.extend_from_slice(&(word as u32).to_le_bytes());
        }
        out.extend_from_slice(&self.code_hash);
        out.push(self.hash_type.as_byte());
        out.extend_from_slice(&(self.args.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.args);
        out
    }

    /// Parse a molecule `Script` table
    pub fn from_molecule(bytes: &[u8]) -> Result<Self, ScriptError> {
        let read_u32 = |at: usize| -> Result<usize, ScriptError> {
            bytes
                .get(at..at + 4)
                .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
                .ok_or_else(|| ScriptError::Malformed("truncated molecule header".to_string()))
        };

        let total = read_u32(0)?;
        if total != bytes.len() {
            return Err(ScriptError::InvalidLength {
                expected: total,
                actual: bytes.len(),
            });
        }
        let offsets = [read_u32(4)?, read_u32(8)?, read_u32(12)?];
        if offsets != [16, 48, 49] {
            return Err(ScriptError::Malformed(format!(
                "unexpected field offsets {offsets:?}"
            )));
        }
        if bytes.len() < 53 {
            return Err(ScriptError::Malformed("truncated script fields".to_string()));
        }

        let mut code_hash = [0u8; 32];
        code_hash.copy_from_slice(&bytes[16..48]);
        let hash_type = ScriptHashType::from_byte(bytes[48])?;
        let args_len = read_u32(49)?;
        let args = &bytes[53..];
        if args.len() != args_len {
            return Err(ScriptError::InvalidLength {
                expected: args_len,
                actual: args.len(),
            });
        }

        Ok(Self::new(code_hash, hash_type, args.to_vec()))
    }

    /// Script hash: personalized BLAKE2b-256 of the molecule encoding
    ///
    /// For a lock script this is the "lock hash" indexers key cells by.
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = new_blake2b();
        hasher.update(&self.to_molecule());
        finalize(&hasher)
    }

    /// Script hash as `0x`-prefixed hex
    pub fn hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.hash()))
    }

    /// Args as `0x`-prefixed hex
    pub fn args_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.args))
    }
}

/// Parse a 32-byte hash from hex (optional `0x` prefix)
pub fn parse_hash(input: &str) -> Result<[u8; 32], ScriptError> {
    let bytes =
        hex::decode(strip_hex_prefix(input)).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| ScriptError::InvalidLength {
        expected: HASH_LEN,
        actual,
    })
}

/// Serde helpers rendering byte fields as `0x` hex strings
mod hex_bytes {
    use crate::crypto::strip_hex_prefix;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(strip_hex_prefix(&s)).map_err(D::Error::custom)
    }
}

mod hex_hash {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        super::hex_bytes::serialize(hash, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hash(&s).map_err(D::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MULTISIG_CODE_HASH: &str =
        "0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8";

    fn sample_script() -> Script {
        Script::from_hex(
            MULTISIG_CODE_HASH,
            ScriptHashType::Type,
            hex::decode("f04cec84bc37f683613bed2f242c9aa1b678e9fe").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_hash_type_bytes() {
        assert_eq!(ScriptHashType::Data.as_byte(), 0x00);
        assert_eq!(ScriptHashType::Type.as_byte(), 0x01);
        assert_eq!(ScriptHashType::Data1.as_byte(), 0x02);
        assert_eq!(ScriptHashType::from_byte(0x01), Ok(ScriptHashType::Type));
        assert_eq!(
            ScriptHashType::from_byte(0x07),
            Err(ScriptError::InvalidHashType(0x07))
        );
        assert_eq!("data1".parse::<ScriptHashType>(), Ok(ScriptHashType::Data1));
    }

    #[test]
    fn test_molecule_layout() {
        let script = sample_script();
        let bytes = script.to_molecule();
        assert_eq!(bytes.len(), 16 + 32 + 1 + 4 + 20);
        assert_eq!(&bytes[0..4], &(73u32).to_le_bytes());
        assert_eq!(bytes[48], 0x01);
        assert_eq!(Script::from_molecule(&bytes).unwrap(), script);
    }

    #[test]
    fn test_molecule_rejects_truncation() {
        let bytes = sample_script().to_molecule();
        assert!(Script::from_molecule(&bytes[..bytes.len() - 1]).is_err());
        assert!(Script::from_molecule(&bytes[..3]).is_err());
    }

    #[test]
    fn test_lock_hash() {
        assert_eq!(
            sample_script().hash_hex(),
            "0x8554f8c63791cb906f90748ea01b15490a0473244192904c0bf87bffa35c3e25"
        );
    }

    #[test]
    fn test_json_shape() {
        let script = sample_script();
        let json = serde_json::to_value(&script).unwrap();
        assert_eq!(json["code_hash"], MULTISIG_CODE_HASH);
        assert_eq!(json["hash_type"], "type");
        assert_eq!(json["args"], "0xf04cec84bc37f683613bed2f242c9aa1b678e9fe");

        let back: Script = serde_json::from_value(json).unwrap();
        assert_eq!(back, script);
    }

    #[test]
    fn test_parse_hash_length() {
        assert!(matches!(
            parse_hash("0xabcd"),
            Err(ScriptError::InvalidLength {
                expected: 32,
                actual: 2
            })
        ));
        assert!(matches!(parse_hash("0xzz"), Err(ScriptError::InvalidHex(_))));
    }
}
