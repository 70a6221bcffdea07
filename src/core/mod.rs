//! Core ledger types
//!
//! This module contains the script model shared by every other component:
//! - Scripts (`code_hash`, `hash_type`, `args`) with molecule encoding and lock hash
//! - System lock scripts deployed in genesis (sighash, multisig, anyone-can-pay)

pub mod script;
pub mod system;

pub use script::{parse_hash, Script, ScriptError, ScriptHashType};
pub use system::{
    SystemScript, ANYONE_CAN_PAY_MAINNET, ANYONE_CAN_PAY_TESTNET, MULTISIG_ALL, SIGHASH_ALL,
};
