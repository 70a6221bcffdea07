//! Cryptographic utilities
//!
//! This module provides:
//! - Personalized BLAKE2b hashing (`blake2b_256`, `blake160`)
//! - secp256k1 key helpers producing compressed public keys

pub mod hash;
pub mod keys;

pub use hash::{
    blake160, blake2b_256, blake2b_256_hex, finalize, key_hash160, new_blake2b, script_hash,
    BLAKE160_LEN, BLANK_HASH, CKB_HASH_PERSONALIZATION, HASH_LEN,
};
pub use keys::{
    public_key_from_hex, strip_hex_prefix, KeyError, KeyPair, COMPRESSED_PUBKEY_LEN,
};
