//! Content hashing for scripts and keys
//!
//! CKB identifies scripts, keys and cells by BLAKE2b-256 digests computed
//! with the personalization tag `ckb-default-hash`, which keeps these digests
//! apart from any other BLAKE2b use in the protocol.

use blake2b_simd::{Params, State};

/// BLAKE2b personalization used for every CKB content hash (exactly 16 bytes)
pub const CKB_HASH_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

/// Length of a full content hash in bytes
pub const HASH_LEN: usize = 32;

/// Length of a truncated `blake160` hash in bytes
pub const BLAKE160_LEN: usize = 20;

/// Digest of the empty input, handy as a sanity reference
pub const BLANK_HASH: [u8; 32] = [
    0x44, 0xf4, 0xc6, 0x97, 0x44, 0xd5, 0xf8, 0xc5, 0x5d, 0x64, 0x20, 0x62, 0x94, 0x9d, 0xca,
    0xe4, 0x9b, 0xc4, 0xe7, 0xef, 0x43, 0xd3, 0x88, 0xc5, 0xa1, 0x2f, 0x42, 0xb5, 0x63, 0x3d,
    0x16, 0x3e,
];

fn ckb_params() -> Params {
    let mut params = Params::new();
    params
        .hash_length(HASH_LEN)
        .personal(CKB_HASH_PERSONALIZATION);
    params
}

/// Create an incremental hasher with the CKB parameters
///
/// Used where the input is assembled from several pieces, e.g. molecule
/// serialized scripts.
pub fn new_blake2b() -> State {
    ckb_params().to_state()
}

/// Finish an incremental hasher into a fixed-size digest
pub fn finalize(state: &State) -> [u8; 32] {
    let mut output = [0u8; HASH_LEN];
    output.copy_from_slice(state.finalize().as_bytes());
    output
}

/// Computes the personalized BLAKE2b-256 digest of the input
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let hash = ckb_params().hash(data);
    let mut output = [0u8; HASH_LEN];
    output.copy_from_slice(hash.as_bytes());
    output
}

/// Leading 20 bytes of [`blake2b_256`]
pub fn blake160(data: &[u8]) -> [u8; 20] {
    let mut output = [0u8; BLAKE160_LEN];
    output.copy_from_slice(&blake2b_256(data)[..BLAKE160_LEN]);
    output
}

/// Identifying hash of a compressed public key
///
/// The caller is responsible for passing a 33-byte key; no curve check is
/// done here.
pub fn key_hash160(public_key: &[u8]) -> [u8; 20] {
    blake160(public_key)
}

/// Identifying hash of a serialized script, used as a lock argument
pub fn script_hash(serialized_script: &[u8]) -> [u8; 20] {
    blake160(serialized_script)
}

/// Computes the digest and returns it as a hex string
pub fn blake2b_256_hex(data: &[u8]) -> String {
    hex::encode(blake2b_256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_hash() {
        assert_eq!(blake2b_256(&[]), BLANK_HASH);
        assert_eq!(
            blake2b_256_hex(b""),
            "44f4c69744d5f8c55d642062949dcae49bc4e7ef43d388c5a12f42b5633d163e"
        );
    }

    #[test]
    fn test_key_hash160() {
        let key = hex::decode("032edb83018b57ddeb9bcc7287c5cc5da57e6e0289d31c9e98cb361e88678d6288")
            .unwrap();
        assert_eq!(
            hex::encode(key_hash160(&key)),
            "6407c2ef9bd96e8e14ac4cd15d860e9331802172"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data = b"hello ckb";
        let mut state = new_blake2b();
        state.update(&data[..5]);
        state.update(&data[5..]);
        assert_eq!(finalize(&state), blake2b_256(data));
    }

    #[test]
    fn test_blake160_is_prefix() {
        let data = b"multisig";
        let full = blake2b_256(data);
        assert_eq!(&blake160(data)[..], &full[..20]);
        assert_eq!(script_hash(data), blake160(data));
    }

    #[test]
    fn test_personalization_changes_digest() {
        let plain = Params::new().hash_length(32).hash(b"");
        assert_ne!(plain.as_bytes(), &BLANK_HASH[..]);
    }
}
