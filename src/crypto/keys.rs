//! secp256k1 key helpers
//!
//! The multisig builder treats public keys as opaque 33-byte strings. These
//! helpers exist for callers that start from secret keys (the CLI and tests)
//! and need the compressed encoding the builder expects.

use rand::rngs::OsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use thiserror::Error;

use super::hash::key_hash160;

/// Length of a compressed secp256k1 public key
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Errors that can occur during key operations
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
}

/// A key pair consisting of a private key and its corresponding public key
#[derive(Clone)]
pub struct KeyPair {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, public_key) = secp.generate_keypair(&mut OsRng);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from an existing secret key
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::new();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from a hex-encoded private key (optional `0x` prefix)
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_key))
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        let secret_key =
            SecretKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::from_secret_key(secret_key))
    }

    /// Get the private key as a hex string
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }

    /// Compressed public key bytes
    pub fn compressed_public_key(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        self.public_key.serialize()
    }

    /// Get the public key as a hex string (compressed format)
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.compressed_public_key())
    }

    /// `blake160` of the compressed public key, the sighash lock argument
    pub fn lock_arg(&self) -> [u8; 20] {
        key_hash160(&self.compressed_public_key())
    }
}

/// Parse and validate a compressed public key from hex
pub fn public_key_from_hex(hex_key: &str) -> Result<PublicKey, KeyError> {
    let bytes = hex::decode(strip_hex_prefix(hex_key)).map_err(|_| KeyError::InvalidPublicKey)?;
    PublicKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPublicKey)
}

/// Strip an optional `0x`/`0X` prefix from a hex string
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pair_generation() {
        let kp = KeyPair::generate();
        assert_eq!(kp.private_key_hex().len(), 64);
        assert_eq!(kp.public_key_hex().len(), 66);
        assert!(matches!(kp.compressed_public_key()[0], 0x02 | 0x03));
    }

    #[test]
    fn test_key_pair_from_hex() {
        let kp1 = KeyPair::generate();
        let private_hex = format!("0x{}", kp1.private_key_hex());

        let kp2 = KeyPair::from_private_key_hex(&private_hex).unwrap();
        assert_eq!(kp1.public_key_hex(), kp2.public_key_hex());
        assert_eq!(kp1.lock_arg(), kp2.lock_arg());
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            KeyPair::from_private_key_hex("zz"),
            Err(KeyError::InvalidPrivateKey)
        ));
        // Zero and values at or above the curve order are rejected by secp256k1
        assert!(matches!(
            KeyPair::from_private_key_hex(&"00".repeat(32)),
            Err(KeyError::InvalidPrivateKey)
        ));
        assert!(matches!(
            KeyPair::from_private_key_hex(&"ff".repeat(32)),
            Err(KeyError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn test_public_key_from_hex() {
        let key = "0x032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288";
        let parsed = public_key_from_hex(key).unwrap();
        assert_eq!(hex::encode(parsed.serialize()), &key[2..]);
        assert!(matches!(
            public_key_from_hex("02abcd"),
            Err(KeyError::InvalidPublicKey)
        ));
        // Right length, wrong prefix byte
        assert!(matches!(
            public_key_from_hex(&format!("05{}", &key[4..])),
            Err(KeyError::InvalidPublicKey)
        ));
    }
}
