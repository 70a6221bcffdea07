//! Multisig script serialization
//!
//! The secp256k1/blake160 multisig lock commits to a policy through
//! `blake160` of this byte layout:
//!
//! ```text
//! | reserved (0x00) | require_first_n | threshold | key_count | key_count x blake160(pubkey) |
//! ```

use crate::address::AddressError;
use crate::crypto::{blake2b_256, key_hash160, script_hash, BLAKE160_LEN, COMPRESSED_PUBKEY_LEN};
use std::collections::HashSet;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// First header byte, always zero
pub const MULTISIG_RESERVED: u8 = 0x00;

/// Header size before the key hashes
pub const MULTISIG_HEADER_LEN: usize = 4;

/// The key count is a single byte
pub const MAX_MULTISIG_KEYS: usize = u8::MAX as usize;

/// Recoverable secp256k1 signature size in a witness
pub const SIGNATURE_LEN: usize = 65;

// =============================================================================
// Errors
// =============================================================================

/// Errors related to multisig policies and scripts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultisigError {
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
    #[error("Invalid public key length at index {index}: expected 33 bytes, got {length}")]
    InvalidKeyLength { index: usize, length: usize },
    #[error("Invalid public key hex at index {index}: {reason}")]
    InvalidKeyHex { index: usize, reason: String },
    #[error("Malformed multisig script: {0}")]
    MalformedScript(String),
    #[error("Address error: {0}")]
    Address(#[from] AddressError),
}

/// Check `1 <= threshold <= key_count <= 255` and `require_first_n <= threshold`
pub fn validate_policy(
    require_first_n: u8,
    threshold: u8,
    key_count: usize,
) -> Result<(), MultisigError> {
    if key_count > MAX_MULTISIG_KEYS {
        return Err(MultisigError::InvalidPolicy(format!(
            "{key_count} keys exceed the maximum of {MAX_MULTISIG_KEYS}"
        )));
    }
    if threshold == 0 {
        return Err(MultisigError::InvalidPolicy(
            "threshold must be at least 1".to_string(),
        ));
    }
    if threshold as usize > key_count {
        return Err(MultisigError::InvalidPolicy(format!(
            "threshold {threshold} exceeds key count {key_count}"
        )));
    }
    if require_first_n > threshold {
        return Err(MultisigError::InvalidPolicy(format!(
            "require_first_n {require_first_n} exceeds threshold {threshold}"
        )));
    }
    Ok(())
}

/// Check the policy, then that every key is a 33-byte compressed key
///
/// Reports the first offending key by index without hashing anything.
pub fn validate_keys<K: AsRef<[u8]>>(
    require_first_n: u8,
    threshold: u8,
    public_keys: &[K],
) -> Result<(), MultisigError> {
    validate_policy(require_first_n, threshold, public_keys.len())?;

    match public_keys
        .iter()
        .enumerate()
        .find(|(_, key)| key.as_ref().len() != COMPRESSED_PUBKEY_LEN)
    {
        Some((index, key)) => Err(MultisigError::InvalidKeyLength {
            index,
            length: key.as_ref().len(),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Multisig Script
// =============================================================================

/// A validated multisig policy in its canonical serialized form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultisigScript {
    require_first_n: u8,
    threshold: u8,
    pubkey_hashes: Vec<[u8; 20]>,
}

impl MultisigScript {
    /// Build from compressed public keys, in the given order
    ///
    /// # Errors
    /// `InvalidPolicy` for a bad threshold/require_first_n/key count, then
    /// `InvalidKeyLength` for the first key that is not 33 bytes.
    pub fn build<K: AsRef<[u8]>>(
        require_first_n: u8,
        threshold: u8,
        public_keys: &[K],
    ) -> Result<Self, MultisigError> {
        validate_keys(require_first_n, threshold, public_keys)?;

        let pubkey_hashes = public_keys
            .iter()
            .map(|key| key_hash160(key.as_ref()))
            .collect();

        Self::from_key_hashes(require_first_n, threshold, pubkey_hashes)
    }

    /// Build from already hashed keys (`blake160` of each compressed key)
    pub fn from_key_hashes(
        require_first_n: u8,
        threshold: u8,
        pubkey_hashes: Vec<[u8; 20]>,
    ) -> Result<Self, MultisigError> {
        validate_policy(require_first_n, threshold, pubkey_hashes.len())?;

        let distinct: HashSet<&[u8; 20]> = pubkey_hashes.iter().collect();
        if distinct.len() != pubkey_hashes.len() {
            log::warn!(
                "multisig policy lists {} duplicate key hash(es)",
                pubkey_hashes.len() - distinct.len()
            );
        }

        log::debug!(
            "built {}-of-{} multisig script, first {} required",
            threshold,
            pubkey_hashes.len(),
            require_first_n
        );

        Ok(Self {
            require_first_n,
            threshold,
            pubkey_hashes,
        })
    }

    /// Parse and validate a serialized multisig script
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MultisigError> {
        if bytes.len() < MULTISIG_HEADER_LEN {
            return Err(MultisigError::MalformedScript(format!(
                "{} bytes is shorter than the header",
                bytes.len()
            )));
        }
        if bytes[0] != MULTISIG_RESERVED {
            return Err(MultisigError::MalformedScript(format!(
                "reserved byte is {:#04x}",
                bytes[0]
            )));
        }

        let (require_first_n, threshold, key_count) = (bytes[1], bytes[2], bytes[3] as usize);
        let expected = MULTISIG_HEADER_LEN + key_count * BLAKE160_LEN;
        if bytes.len() != expected {
            return Err(MultisigError::MalformedScript(format!(
                "expected {expected} bytes for {key_count} keys, got {}",
                bytes.len()
            )));
        }
        validate_policy(require_first_n, threshold, key_count)
            .map_err(|e| MultisigError::MalformedScript(e.to_string()))?;

        let pubkey_hashes = bytes[MULTISIG_HEADER_LEN..]
            .chunks_exact(BLAKE160_LEN)
            .map(|chunk| {
                let mut hash = [0u8; 20];
                hash.copy_from_slice(chunk);
                hash
            })
            .collect();

        Ok(Self {
            require_first_n,
            threshold,
            pubkey_hashes,
        })
    }

    /// Canonical serialized bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        out.push(MULTISIG_RESERVED);
        out.push(self.require_first_n);
        out.push(self.threshold);
        out.push(self.pubkey_hashes.len() as u8);
        for hash in &self.pubkey_hashes {
            out.extend_from_slice(hash);
        }
        out
    }

    /// `4 + 20 * key_count`
    pub fn serialized_len(&self) -> usize {
        MULTISIG_HEADER_LEN + self.pubkey_hashes.len() * BLAKE160_LEN
    }

    /// Full 32-byte content hash of the serialized script
    pub fn hash(&self) -> [u8; 32] {
        blake2b_256(&self.to_bytes())
    }

    /// `blake160` of the serialized script, the lock argument
    pub fn hash160(&self) -> [u8; 20] {
        script_hash(&self.to_bytes())
    }

    /// Witness lock template: the script followed by one zeroed
    /// signature slot per required signature
    pub fn witness_placeholder(&self) -> Vec<u8> {
        let mut out = self.to_bytes();
        out.resize(out.len() + self.threshold as usize * SIGNATURE_LEN, 0);
        out
    }

    pub fn require_first_n(&self) -> u8 {
        self.require_first_n
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn pubkey_hashes(&self) -> &[[u8; 20]] {
        &self.pubkey_hashes
    }

    /// Get description like "2-of-3"
    pub fn description(&self) -> String {
        format!("{}-of-{}", self.threshold, self.pubkey_hashes.len())
    }
}

/// Build a serialized multisig script from ordered compressed public keys
pub fn build_multisig_script<K: AsRef<[u8]>>(
    require_first_n: u8,
    threshold: u8,
    public_keys: &[K],
) -> Result<MultisigScript, MultisigError> {
    MultisigScript::build(require_first_n, threshold, public_keys)
}

// =============================================================================
// Tests
// =============================================================================
