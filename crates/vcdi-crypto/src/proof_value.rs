//! Multibase codec for `proofValue` strings (base58-btc, `z` prefix).

use multibase::Base;
use vcdi_core::CryptoError;

/// Encode signature bytes as a base58-btc multibase string.
pub fn encode_proof_value(signature: &[u8]) -> String {
    multibase::encode(Base::Base58Btc, signature)
}

/// Decode a base58-btc multibase `proofValue`.
///
/// Other multibase encodings are rejected: both cryptosuites mandate
/// base58-btc.
pub fn decode_proof_value(value: &str) -> Result<Vec<u8>, CryptoError> {
    let (base, bytes) = multibase::decode(value)
        .map_err(|e| CryptoError::Encoding(format!("invalid multibase proof value: {e}")))?;
    if base != Base::Base58Btc {
        return Err(CryptoError::Encoding(format!(
            "proof value must be base58-btc multibase, got {base:?}"
        )));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_value_has_z_prefix() {
        let encoded = encode_proof_value(&[1, 2, 3, 4]);
        assert!(encoded.starts_with('z'));
        assert_eq!(decode_proof_value(&encoded).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn base64_multibase_is_rejected() {
        let encoded = multibase::encode(Base::Base64, [9u8; 8]);
        assert!(matches!(
            decode_proof_value(&encoded),
            Err(CryptoError::Encoding(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_proof_value("").is_err());
        assert!(decode_proof_value("z0OIl").is_err());
    }
}
