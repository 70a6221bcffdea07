//! CKB address CLI
//!
//! A command-line interface for deriving multisig lock scripts and
//! encoding/decoding addresses.

use ckb_multisig_address::address::Network;
use ckb_multisig_address::cli;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ckb-address")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Multisig lock scripts and addresses for CKB", long_about = None)]
struct Cli {
    /// Network to derive addresses for (mainnet, testnet, ckb or ckt)
    #[arg(short, long, default_value = "mainnet", global = true)]
    network: Network,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a multisig lock script and address
    Multisig {
        /// Minimum number of signatures (M in M-of-N)
        #[arg(short, long)]
        threshold: u8,

        /// Number of leading keys whose signatures are mandatory
        #[arg(short, long, default_value = "0")]
        require_first_n: u8,

        /// Optional since value appended to the lock args
        #[arg(long)]
        since: Option<u64>,

        /// Compressed public keys in policy order (hex)
        #[arg(short, long = "pubkey", required = true)]
        pubkeys: Vec<String>,
    },

    /// Derive the single-key sighash address of a public key
    Sighash {
        /// Compressed public key (hex)
        #[arg(short, long)]
        pubkey: String,
    },

    /// Decode an address into its lock script
    Decode {
        /// Address to decode
        address: String,
    },

    /// Generate a new signer key
    Keygen {
        /// Optional label for the key
        #[arg(short, long)]
        label: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("using {} parameters", cli.network);

    match cli.command {
        Commands::Multisig {
            threshold,
            require_first_n,
            since,
            pubkeys,
        } => {
            cli::cmd_multisig(cli.network, require_first_n, threshold, &pubkeys, since)?;
        }

        Commands::Sighash { pubkey } => {
            cli::cmd_sighash(cli.network, &pubkey)?;
        }

        Commands::Decode { address } => {
            cli::cmd_decode(&address)?;
        }

        Commands::Keygen { label } => {
            cli::cmd_keygen(cli.network, label.as_deref())?;
        }
    }

    Ok(())
}
