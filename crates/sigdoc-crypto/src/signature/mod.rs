//! ECDSA signature decoding
//!
//! ECDSA signatures are carried as the DER encoding of
//!
//! ```text
//! Ecdsa-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```
//!
//! The bytes come straight from a document and may be anything: random
//! data, an RSA signature sent down the ECDSA path, a truncated or nested
//! structure. Decoding therefore runs inside [`crate::isolate::contain`],
//! so a panic in the decoder surfaces as
//! [`Error::SignatureDecode`](crate::Error::SignatureDecode) instead of
//! unwinding into the caller. Decoding cost is linear in the input length
//! and the structure is never nested more than two levels deep.

use der::{asn1::UintRef, Decode, Sequence};
use rsa::BigUint;

use crate::{
    error::{Error, Result},
    isolate::contain,
};

/// The `(r, s)` pair of an ECDSA signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSignatureValue {
    r: BigUint,
    s: BigUint,
}

impl EcdsaSignatureValue {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// `r || s`, each left-padded to `scalar_size` bytes.
    ///
    /// Returns `None` when either value needs more than `scalar_size` bytes.
    pub fn to_fixed_bytes(&self, scalar_size: usize) -> Option<Vec<u8>> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        if r.len() > scalar_size || s.len() > scalar_size {
            return None;
        }

        let mut out = vec![0u8; scalar_size * 2];
        out[scalar_size - r.len()..scalar_size].copy_from_slice(&r);
        out[scalar_size * 2 - s.len()..].copy_from_slice(&s);
        Some(out)
    }
}

#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Decode DER signature bytes into `(r, s)`.
///
/// Any malformation (wrong tags, bad lengths, negative or non-minimal
/// integers, trailing bytes, a missing component) is reported as
/// [`Error::SignatureDecode`], as is a panic raised while decoding.
pub fn decode_ecdsa_signature(bytes: &[u8]) -> Result<EcdsaSignatureValue> {
    decode_isolated(bytes, decode_der)
}

fn decode_isolated<F>(bytes: &[u8], decoder: F) -> Result<EcdsaSignatureValue>
where
    F: FnOnce(&[u8]) -> Result<EcdsaSignatureValue>,
{
    contain(
        || decoder(bytes),
        |message| Error::SignatureDecode(format!("decoder aborted: {}", message)),
    )
}

fn decode_der(bytes: &[u8]) -> Result<EcdsaSignatureValue> {
    let value = EcdsaSigValue::from_der(bytes)
        .map_err(|e| Error::SignatureDecode(format!("malformed ECDSA signature: {}", e)))?;

    let (r, s) = (value.r.as_bytes(), value.s.as_bytes());
    if r.is_empty() || s.is_empty() {
        return Err(Error::SignatureDecode(
            "ECDSA signature is missing r or s".to_string(),
        ));
    }

    tracing::debug!(r_len = r.len(), s_len = s.len(), "decoded ECDSA signature");
    Ok(EcdsaSignatureValue::new(
        BigUint::from_bytes_be(r),
        BigUint::from_bytes_be(s),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_decode_error(bytes: &[u8]) {
        let result = decode_ecdsa_signature(bytes);
        assert!(
            matches!(result, Err(Error::SignatureDecode(_))),
            "expected decode error for {:02x?}, got {:?}",
            bytes,
            result
        );
    }

    #[test]
    fn test_decode_minimal_sequence() {
        // SEQUENCE { INTEGER 1, INTEGER 0x80 }
        let bytes = [0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x02, 0x00, 0x80];
        let value = decode_ecdsa_signature(&bytes).unwrap();
        assert_eq!(value.r(), &BigUint::from(1u32));
        assert_eq!(value.s(), &BigUint::from(0x80u32));
    }

    #[test]
    fn test_three_byte_buffer() {
        assert_decode_error(&[0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_empty_input() {
        assert_decode_error(&[]);
    }

    #[test]
    fn test_missing_s() {
        // SEQUENCE { INTEGER 1 }
        assert_decode_error(&[0x30, 0x03, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_null_components() {
        // SEQUENCE { NULL, NULL }
        assert_decode_error(&[0x30, 0x04, 0x05, 0x00, 0x05, 0x00]);
    }

    #[test]
    fn test_empty_integer() {
        // SEQUENCE { INTEGER (zero length), INTEGER 1 }
        assert_decode_error(&[0x30, 0x05, 0x02, 0x00, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_negative_integer() {
        // SEQUENCE { INTEGER -1, INTEGER 1 }
        assert_decode_error(&[0x30, 0x06, 0x02, 0x01, 0xff, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_trailing_bytes() {
        assert_decode_error(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x00]);
    }

    #[test]
    fn test_length_overflow() {
        // Long-form length claiming far more data than present.
        assert_decode_error(&[0x30, 0x84, 0x7f, 0xff, 0xff, 0xff, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_nested_sequences() {
        assert_decode_error(&[0x30, 0x04, 0x30, 0x02, 0x30, 0x00]);
    }

    #[test]
    fn test_rsa_sized_random_bytes() {
        let bytes: Vec<u8> = (0..256u32).map(|i| (i.wrapping_mul(167) ^ 0x5a) as u8).collect();
        assert_decode_error(&bytes);
    }

    #[test]
    fn test_every_prefix_of_valid_signature() {
        let bytes = [0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x02, 0x00, 0x80];
        for len in 0..bytes.len() {
            assert_decode_error(&bytes[..len]);
        }
    }

    #[test]
    fn test_panicking_decoder_is_contained() {
        let result = decode_isolated(&[0x30, 0x00], |_| panic!("decoder bug"));
        match result {
            Err(Error::SignatureDecode(message)) => assert!(message.contains("decoder bug")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_fixed_bytes_padding() {
        let value = EcdsaSignatureValue::new(BigUint::from(1u32), BigUint::from(0x0102u32));
        let bytes = value.to_fixed_bytes(4).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1, 0, 0, 1, 2]);
        assert!(value.to_fixed_bytes(1).is_none());
    }
}
