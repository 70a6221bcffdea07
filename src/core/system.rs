//! System lock scripts deployed in the genesis block
//!
//! These are protocol constants: the code hashes below are the type hashes
//! of the verifier cells, so every system lock uses `hash_type = type`.

use super::script::{Script, ScriptHashType};

/// A well-known lock script family identified by its verifier code hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemScript {
    /// Human-readable name
    pub name: &'static str,
    /// Type hash of the verifier cell
    pub code_hash: [u8; 32],
    pub hash_type: ScriptHashType,
}

impl SystemScript {
    /// Build a lock script of this family with the given args
    pub fn lock(&self, args: Vec<u8>) -> Script {
        Script::new(self.code_hash, self.hash_type, args)
    }

    /// Whether a script belongs to this family
    pub fn matches(&self, script: &Script) -> bool {
        script.code_hash == self.code_hash && script.hash_type == self.hash_type
    }
}

/// secp256k1/blake160 single-key lock (`args = blake160(pubkey)`)
pub const SIGHASH_ALL: SystemScript = SystemScript {
    name: "secp256k1_blake160_sighash_all",
    code_hash: [
        0x9b, 0xd7, 0xe0, 0x6f, 0x3e, 0xcf, 0x4b, 0xe0, 0xf2, 0xfc, 0xd2, 0x18, 0x8b, 0x23,
        0xf1, 0xb9, 0xfc, 0xc8, 0x8e, 0x5d, 0x4b, 0x65, 0xa8, 0x63, 0x7b, 0x17, 0x72, 0x3b,
        0xbd, 0xa3, 0xcc, 0xe8,
    ],
    hash_type: ScriptHashType::Type,
};

/// secp256k1/blake160 multisig lock (`args = blake160(multisig script)`)
pub const MULTISIG_ALL: SystemScript = SystemScript {
    name: "secp256k1_blake160_multisig_all",
    code_hash: [
        0x5c, 0x50, 0x69, 0xeb, 0x08, 0x57, 0xef, 0xc6, 0x5e, 0x1b, 0xca, 0x0c, 0x07, 0xdf,
        0x34, 0xc3, 0x16, 0x63, 0xb3, 0x62, 0x2f, 0xd3, 0x87, 0x6c, 0x87, 0x63, 0x20, 0xfc,
        0x96, 0x34, 0xe2, 0xa8,
    ],
    hash_type: ScriptHashType::Type,
};

/// Anyone-can-pay lock on mainnet
pub const ANYONE_CAN_PAY_MAINNET: SystemScript = SystemScript {
    name: "anyone_can_pay",
    code_hash: [
        0xd3, 0x69, 0x59, 0x7f, 0xf4, 0x7f, 0x29, 0xfb, 0xc0, 0xd4, 0x7d, 0x2e, 0x37, 0x75,
        0x37, 0x0d, 0x12, 0x50, 0xb8, 0x51, 0x40, 0xc6, 0x70, 0xe4, 0x71, 0x8a, 0xf7, 0x12,
        0x98, 0x3a, 0x23, 0x54,
    ],
    hash_type: ScriptHashType::Type,
};

/// Anyone-can-pay lock on testnet
pub const ANYONE_CAN_PAY_TESTNET: SystemScript = SystemScript {
    name: "anyone_can_pay",
    code_hash: [
        0x34, 0x19, 0xa1, 0xc0, 0x9e, 0xb2, 0x56, 0x7f, 0x65, 0x52, 0xee, 0x7a, 0x8e, 0xcf,
        0xfd, 0x64, 0x15, 0x5c, 0xff, 0xe0, 0xf1, 0x79, 0x6e, 0x6e, 0x61, 0xec, 0x08, 0x8d,
        0x74, 0x0c, 0x13, 0x56,
    ],
    hash_type: ScriptHashType::Type,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::script::parse_hash;

    #[test]
    fn test_code_hashes_match_hex() {
        assert_eq!(
            SIGHASH_ALL.code_hash,
            parse_hash("0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8")
                .unwrap()
        );
        assert_eq!(
            MULTISIG_ALL.code_hash,
            parse_hash("0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8")
                .unwrap()
        );
        assert_eq!(
            ANYONE_CAN_PAY_MAINNET.code_hash,
            parse_hash("0xd369597ff47f29fbc0d47d2e3775370d1250b85140c670e4718af712983a2354")
                .unwrap()
        );
        assert_eq!(
            ANYONE_CAN_PAY_TESTNET.code_hash,
            parse_hash("0x3419a1c09eb2567f6552ee7a8ecffd64155cffe0f1796e6e61ec088d740c1356")
                .unwrap()
        );
    }

    #[test]
    fn test_matches() {
        let lock = MULTISIG_ALL.lock(vec![0u8; 20]);
        assert!(MULTISIG_ALL.matches(&lock));
        assert!(!SIGHASH_ALL.matches(&lock));

        let data_lock = Script::new(MULTISIG_ALL.code_hash, ScriptHashType::Data, vec![]);
        assert!(!MULTISIG_ALL.matches(&data_lock));
    }
}
