//! Single-key wallet
//!
//! A secp256k1 key pair locked by the system sighash lock, the usual
//! building block for the signers of a multisig policy.

use crate::address::{Address, AddressError, Network};
use crate::core::{Script, SIGHASH_ALL};
use crate::crypto::{key_hash160, KeyError, KeyPair, COMPRESSED_PUBKEY_LEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wallet-related errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Invalid public key length: expected 33 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("Crypto error: {0}")]
    CryptoError(#[from] KeyError),
    #[error("Address error: {0}")]
    AddressError(#[from] AddressError),
}

/// A wallet holding one key pair
pub struct Wallet {
    /// The key pair for signing transactions
    key_pair: KeyPair,
    /// Optional label for the wallet
    pub label: Option<String>,
}

impl Wallet {
    /// Create a new wallet with a fresh key pair
    pub fn new() -> Self {
        Self {
            key_pair: KeyPair::generate(),
            label: None,
        }
    }

    /// Create a wallet with a label
    pub fn with_label(label: &str) -> Self {
        Self {
            key_pair: KeyPair::generate(),
            label: Some(label.to_string()),
        }
    }

    /// Import a wallet from a private key
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, WalletError> {
        let key_pair = KeyPair::from_private_key_hex(private_key_hex)?;
        Ok(Self {
            key_pair,
            label: None,
        })
    }

    /// Get the wallet's compressed public key
    pub fn public_key_bytes(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        self.key_pair.compressed_public_key()
    }

    /// Get the wallet's public key (hex)
    pub fn public_key(&self) -> String {
        self.key_pair.public_key_hex()
    }

    /// Get the wallet's private key (hex)
    /// WARNING: Keep this secret!
    pub fn private_key(&self) -> String {
        self.key_pair.private_key_hex()
    }

    /// Sighash lock script owned by this key
    pub fn lock_script(&self) -> Script {
        SIGHASH_ALL.lock(self.key_pair.lock_arg().to_vec())
    }

    /// Get the wallet's address on a network
    pub fn address(&self, network: Network) -> Result<String, WalletError> {
        Ok(Address::compact(network, &self.lock_script()).encode()?)
    }

    /// Export wallet info (without private key)
    pub fn export_public_info(&self, network: Network) -> Result<WalletInfo, WalletError> {
        Ok(WalletInfo {
            address: self.address(network)?,
            public_key: self.public_key(),
            lock_arg: format!("0x{}", hex::encode(self.key_pair.lock_arg())),
            label: self.label.clone(),
        })
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

/// Public wallet information (safe to share)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub public_key: String,
    pub lock_arg: String,
    pub label: Option<String>,
}

/// Short-format sighash address for a compressed public key
pub fn sighash_address(network: Network, public_key: &[u8]) -> Result<String, WalletError> {
    if public_key.len() != COMPRESSED_PUBKEY_LEN {
        return Err(WalletError::InvalidKeyLength(public_key.len()));
    }
    let lock = SIGHASH_ALL.lock(key_hash160(public_key).to_vec());
    Ok(Address::compact(network, &lock).encode()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_creation() {
        let wallet = Wallet::new();
        assert!(wallet.address(Network::Mainnet).unwrap().starts_with("ckb1"));
        assert_eq!(wallet.public_key().len(), 66);
        assert_eq!(wallet.private_key().len(), 64);
    }

    #[test]
    fn test_wallet_import() {
        let wallet1 = Wallet::with_label("Signer");
        let private_key = wallet1.private_key();

        let wallet2 = Wallet::from_private_key(&private_key).unwrap();
        assert_eq!(
            wallet1.address(Network::Testnet).unwrap(),
            wallet2.address(Network::Testnet).unwrap()
        );
        assert_eq!(wallet1.label.as_deref(), Some("Signer"));
    }

    #[test]
    fn test_sighash_address_vector() {
        let key = hex::decode("032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288")
            .unwrap();
        assert_eq!(
            sighash_address(Network::Testnet, &key).unwrap(),
            "ckt1qyqxgp7za7dajm5wzjkye52asc8fxvvqy9eqlhp82g"
        );
        assert!(matches!(
            sighash_address(Network::Testnet, &key[1..]),
            Err(WalletError::InvalidKeyLength(32))
        ));
    }

    #[test]
    fn test_wallet_matches_sighash_address() {
        let wallet = Wallet::new();
        assert_eq!(
            wallet.address(Network::Mainnet).unwrap(),
            sighash_address(Network::Mainnet, &wallet.public_key_bytes()).unwrap()
        );
    }

    #[test]
    fn test_public_info_json() {
        let wallet = Wallet::with_label("Ops");
        let info = wallet.export_public_info(Network::Testnet).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["label"], "Ops");
        assert_eq!(json["public_key"], wallet.public_key());
        assert!(json["address"].as_str().unwrap().starts_with("ckt1"));
    }
}
