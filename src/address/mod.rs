//! Human-readable CKB addresses
//!
//! An address wraps a lock script in a checksummed bech32/bech32m string
//! whose prefix names the network (`ckb` for mainnet, `ckt` for testnet).
//!
//! # Example
//!
//! ```
//! use ckb_multisig_address::address::{Address, Network};
//!
//! let address = Address::decode("ckt1qyqlqn8vsj7r0a5rvya76tey9jd2rdnca8lqh4kcuq").unwrap();
//! assert_eq!(address.network(), Network::Testnet);
//! assert_eq!(
//!     address.lock_script().args_hex(),
//!     "0xf04cec84bc37f683613bed2f242c9aa1b678e9fe"
//! );
//! ```

pub mod codec;
pub mod error;
pub mod network;
pub mod payload;

pub use codec::{decode, encode, Address, MAX_ADDRESS_LEN};
pub use error::AddressError;
pub use network::{Network, NetworkParams, MAINNET_PARAMS, TESTNET_PARAMS};
pub use payload::{AddressFormat, AddressPayload, CodeHashIndex};
