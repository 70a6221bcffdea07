//! CLI commands for address tooling
//!
//! Implements all command handlers for the CLI interface.

use crate::address::{Address, AddressPayload, Network};
use crate::multisig::{MultisigConfig, MultisigWallet};
use crate::wallet::{sighash_address, Wallet};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Derive a multisig lock and address from hex public keys
pub fn cmd_multisig(
    network: Network,
    require_first_n: u8,
    threshold: u8,
    pubkeys: &[String],
    since: Option<u64>,
) -> CliResult<()> {
    let mut config = MultisigConfig::from_hex_keys(require_first_n, threshold, pubkeys)?;
    if let Some(since) = since {
        config = config.with_since(since);
    }
    let wallet = MultisigWallet::new(config, network)?;
    let script = wallet.script();

    println!("🔐 Multisig {} on {}", wallet.description(), network);
    println!("   ├─ Require first: {}", script.require_first_n());
    println!("   ├─ Script: 0x{}", hex::encode(script.to_bytes()));
    println!("   ├─ Lock args: 0x{}", hex::encode(wallet.lock_args()));
    println!("   ├─ Lock hash: 0x{}", hex::encode(wallet.lock_hash()));
    println!("   ├─ Address: {}", wallet.address()?);
    println!("   └─ Full address: {}", wallet.full_address()?);

    Ok(())
}

/// Derive the single-key sighash address for a public key
pub fn cmd_sighash(network: Network, pubkey: &str) -> CliResult<()> {
    let key = hex::decode(crate::crypto::strip_hex_prefix(pubkey))?;
    let address = sighash_address(network, &key)?;

    println!("🔑 Sighash address on {}", network);
    println!("   └─ {}", address);

    Ok(())
}

/// Decode an address and print the lock script it pays to
pub fn cmd_decode(address: &str) -> CliResult<()> {
    let decoded = Address::decode(address)?;
    let lock = decoded.lock_script();

    println!("📬 Address on {}", decoded.network());
    println!("   ├─ Format: {}", decoded.payload().format().name());
    if let AddressPayload::Short { index, .. } = decoded.payload() {
        println!("   ├─ Code hash index: {:#04x}", *index as u8);
    }
    println!("   ├─ Lock hash: {}", lock.hash_hex());
    println!("   └─ Lock script:");
    println!("{}", serde_json::to_string_pretty(&lock)?);

    Ok(())
}

/// Generate a fresh signer key
pub fn cmd_keygen(network: Network, label: Option<&str>) -> CliResult<()> {
    let wallet = match label {
        Some(l) => Wallet::with_label(l),
        None => Wallet::new(),
    };
    let info = wallet.export_public_info(network)?;

    println!("✅ Key generated!");
    println!("   ├─ Private key: {}", wallet.private_key());
    println!("   └─ Public info:");
    println!("{}", serde_json::to_string_pretty(&info)?);
    println!("\n⚠️  Keep the private key secret!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pubkeys() -> Vec<String> {
        vec![
            "032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288".to_string(),
            "033aeb3fdbfaac72e9e34c55884a401ee87115302c146dd9e314677d826375dc8f".to_string(),
            "029a685b8206550ea1b600e347f18fd6115bffe582089d3567bec7eba57d04df01".to_string(),
        ]
    }

    #[test]
    fn test_cmd_multisig() {
        assert!(cmd_multisig(Network::Testnet, 0, 2, &sample_pubkeys(), None).is_ok());
        assert!(cmd_multisig(Network::Testnet, 0, 2, &sample_pubkeys(), Some(100)).is_ok());
        assert!(cmd_multisig(Network::Testnet, 3, 2, &sample_pubkeys(), None).is_err());
    }

    #[test]
    fn test_cmd_decode() {
        assert!(cmd_decode("ckt1qyqlqn8vsj7r0a5rvya76tey9jd2rdnca8lqh4kcuq").is_ok());
        assert!(cmd_decode("ckt1qyqlqn8vsj7r0a5rvya76tey9jd2rdnca8lqh4kcuu").is_err());
    }

    #[test]
    fn test_cmd_sighash() {
        assert!(cmd_sighash(Network::Mainnet, &sample_pubkeys()[0]).is_ok());
        assert!(cmd_sighash(Network::Mainnet, "0x02").is_err());
    }

    #[test]
    fn test_cmd_keygen() {
        assert!(cmd_keygen(Network::Testnet, Some("test")).is_ok());
    }
}
