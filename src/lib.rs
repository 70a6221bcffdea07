//! CKB multisig addresses in Rust
//!
//! This crate turns a threshold-signature policy into the lock script and
//! address used on the CKB ledger:
//! - Canonical multisig script serialization (`require_first_n`, threshold, key hashes)
//! - Personalized BLAKE2b content hashing (`blake2b_256`, `blake160`)
//! - Lock scripts with molecule encoding and lock hash
//! - Bech32/bech32m addresses with network prefixes, short and full formats
//! - Single-key sighash wallets for the signers
//!
//! # Example
//!
//! ```rust
//! use ckb_multisig_address::address::Network;
//! use ckb_multisig_address::multisig::generate_multisig_address;
//!
//! let keys: Vec<Vec<u8>> = [
//!     "032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288",
//!     "033aeb3fdbfaac72e9e34c55884a401ee87115302c146dd9e314677d826375dc8f",
//!     "029a685b8206550ea1b600e347f18fd6115bffe582089d3567bec7eba57d04df01",
//! ]
//! .iter()
//! .map(|k| hex::decode(k).unwrap())
//! .collect();
//!
//! // 2-of-3, no mandatory signers
//! let address = generate_multisig_address(Network::Testnet, 0, 2, &keys).unwrap();
//! assert_eq!(address, "ckt1qyqlqn8vsj7r0a5rvya76tey9jd2rdnca8lqh4kcuq");
//! ```

pub mod address;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod multisig;
pub mod wallet;

// Re-export commonly used types
pub use crate::address::{Address, AddressError, AddressPayload, Network};
pub use crate::core::{Script, ScriptHashType, MULTISIG_ALL, SIGHASH_ALL};
pub use crate::crypto::{blake160, blake2b_256, KeyPair};
pub use crate::multisig::{
    build_multisig_script, generate_multisig_address, MultisigConfig, MultisigError,
    MultisigScript, MultisigWallet,
};
pub use crate::wallet::{sighash_address, Wallet};
