//! Wallet module for single-key signers

pub mod wallet;

pub use wallet::{sighash_address, Wallet, WalletError, WalletInfo};
