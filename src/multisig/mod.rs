//! Multi-signature lock support
//!
//! Provides M-of-N threshold policies for the secp256k1/blake160 multisig
//! lock: canonical script serialization, lock args and addresses.
//!
//! # Example
//!
//! ```
//! use ckb_multisig_address::address::Network;
//! use ckb_multisig_address::multisig::{MultisigConfig, MultisigWallet};
//!
//! // Create a 2-of-3 multisig wallet
//! let config = MultisigConfig::from_hex_keys(
//!     0,
//!     2,
//!     &[
//!         "032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288",
//!         "033aeb3fdbfaac72e9e34c55884a401ee87115302c146dd9e314677d826375dc8f",
//!         "029a685b8206550ea1b600e347f18fd6115bffe582089d3567bec7eba57d04df01",
//!     ],
//! )?;
//! let wallet = MultisigWallet::new(config, Network::Testnet)?;
//! assert_eq!(wallet.address()?, "ckt1qyqlqn8vsj7r0a5rvya76tey9jd2rdnca8lqh4kcuq");
//! # Ok::<(), ckb_multisig_address::multisig::MultisigError>(())
//! ```

pub mod script;
pub mod wallet;

pub use script::{
    build_multisig_script, validate_keys, validate_policy, MultisigError, MultisigScript,
    MAX_MULTISIG_KEYS, MULTISIG_HEADER_LEN, MULTISIG_RESERVED, SIGNATURE_LEN,
};
pub use wallet::{generate_multisig_address, MultisigConfig, MultisigWallet, SINCE_LEN};
