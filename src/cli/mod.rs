//! Command-line front end

pub mod commands;

pub use commands::{cmd_decode, cmd_keygen, cmd_multisig, cmd_sighash, CliResult};
