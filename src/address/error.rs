//! Address encoding and decoding errors

use thiserror::Error;

/// Errors produced while encoding or decoding an address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Checksum mismatch")]
    ChecksumMismatch,
    #[error("Unknown network prefix: {0:?}")]
    UnknownNetwork(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<bech32::Error> for AddressError {
    fn from(err: bech32::Error) -> Self {
        match err {
            bech32::Error::InvalidChecksum => AddressError::ChecksumMismatch,
            other => AddressError::MalformedPayload(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_error_mapping() {
        assert_eq!(
            AddressError::from(bech32::Error::InvalidChecksum),
            AddressError::ChecksumMismatch
        );
        assert!(matches!(
            AddressError::from(bech32::Error::MissingSeparator),
            AddressError::MalformedPayload(_)
        ));
    }
}
