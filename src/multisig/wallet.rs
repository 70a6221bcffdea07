//! Multi-signature wallet implementation
//!
//! Binds an M-of-N policy to the system multisig lock and derives its lock
//! script and address on a given network.

use super::script::{validate_keys, MultisigError, MultisigScript};
use crate::address::{Address, Network};
use crate::core::{Script, MULTISIG_ALL};
use crate::crypto::strip_hex_prefix;

/// Length of the optional `since` suffix in lock args
pub const SINCE_LEN: usize = 8;

/// Configuration for a multisig wallet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisigConfig {
    /// Leading signers whose signatures are mandatory
    pub require_first_n: u8,
    /// Minimum signatures required (M in M-of-N)
    pub threshold: u8,
    /// Compressed public keys of all authorized signers, in policy order
    pub public_keys: Vec<Vec<u8>>,
    /// Optional `since` restriction appended to the lock args
    pub since: Option<u64>,
    /// Optional human-readable label
    pub label: Option<String>,
}

impl MultisigConfig {
    /// Create a new multisig configuration
    ///
    /// # Arguments
    /// * `require_first_n` - Number of leading keys that must sign
    /// * `threshold` - Minimum signatures required (M)
    /// * `public_keys` - Compressed public keys of the signers (N)
    ///
    /// # Errors
    /// Returns error if the policy or any key length is invalid
    pub fn new(
        require_first_n: u8,
        threshold: u8,
        public_keys: Vec<Vec<u8>>,
    ) -> Result<Self, MultisigError> {
        validate_keys(require_first_n, threshold, &public_keys)?;

        Ok(Self {
            require_first_n,
            threshold,
            public_keys,
            since: None,
            label: None,
        })
    }

    /// Create a configuration from hex-encoded public keys (optional `0x` prefix)
    pub fn from_hex_keys<S: AsRef<str>>(
        require_first_n: u8,
        threshold: u8,
        public_keys: &[S],
    ) -> Result<Self, MultisigError> {
        let keys = public_keys
            .iter()
            .enumerate()
            .map(|(index, key)| {
                hex::decode(strip_hex_prefix(key.as_ref())).map_err(|e| {
                    MultisigError::InvalidKeyHex {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(require_first_n, threshold, keys)
    }

    /// Attach a `since` value restricting when the lock can be spent
    pub fn with_since(mut self, since: u64) -> Self {
        self.since = Some(since);
        self
    }

    /// Attach a label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Get the total signer count (N)
    pub fn signer_count(&self) -> usize {
        self.public_keys.len()
    }

    /// Get description like "2-of-3"
    pub fn description(&self) -> String {
        format!("{}-of-{}", self.threshold, self.public_keys.len())
    }
}

/// A multi-signature wallet on one network
#[derive(Clone, Debug)]
pub struct MultisigWallet {
    /// Wallet configuration
    pub config: MultisigConfig,
    /// Serialized policy committed to by the lock args
    script: MultisigScript,
    network: Network,
}

impl MultisigWallet {
    /// Create a new multisig wallet
    pub fn new(config: MultisigConfig, network: Network) -> Result<Self, MultisigError> {
        let script =
            MultisigScript::build(config.require_first_n, config.threshold, &config.public_keys)?;

        log::debug!(
            "multisig wallet {} on {} with lock args 0x{}",
            config.description(),
            network,
            hex::encode(script.hash160())
        );

        Ok(Self {
            config,
            script,
            network,
        })
    }

    /// Lock args: `blake160(script)`, followed by the little-endian `since`
    /// when one is configured
    pub fn lock_args(&self) -> Vec<u8> {
        let mut args = self.script.hash160().to_vec();
        if let Some(since) = self.config.since {
            args.extend_from_slice(&since.to_le_bytes());
        }
        args
    }

    /// The multisig lock script guarding this wallet's cells
    pub fn lock_script(&self) -> Script {
        MULTISIG_ALL.lock(self.lock_args())
    }

    /// Lock hash used by indexers to find this wallet's cells
    pub fn lock_hash(&self) -> [u8; 32] {
        self.lock_script().hash()
    }

    /// Wallet address, short format unless a `since` is configured
    pub fn address(&self) -> Result<String, MultisigError> {
        Ok(Address::compact(self.network, &self.lock_script()).encode()?)
    }

    /// Wallet address in the full format
    pub fn full_address(&self) -> Result<String, MultisigError> {
        Ok(Address::from_script(self.network, self.lock_script()).encode()?)
    }

    pub fn script(&self) -> &MultisigScript {
        &self.script
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Get the required threshold
    pub fn threshold(&self) -> u8 {
        self.config.threshold
    }

    /// Get the total number of signers
    pub fn signer_count(&self) -> usize {
        self.config.signer_count()
    }

    /// Get human-readable description
    pub fn description(&self) -> String {
        self.config.description()
    }
}

/// Derive the multisig address for ordered compressed public keys
pub fn generate_multisig_address<K: AsRef<[u8]>>(
    network: Network,
    require_first_n: u8,
    threshold: u8,
    public_keys: &[K],
) -> Result<String, MultisigError> {
    let config = MultisigConfig::new(
        require_first_n,
        threshold,
        public_keys.iter().map(|k| k.as_ref().to_vec()).collect(),
    )?;
    MultisigWallet::new(config, network)?.address()
}
