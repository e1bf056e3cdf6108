//! # Auth Assertion Encoder
//!
//! Builds the unsigned token sent in the `PayPal-Auth-Assertion` header when
//! a partner platform acts on behalf of a merchant. The token is three
//! base64url segments joined by `.`: a fixed `{"alg":"none"}` header, a
//! claims body naming the platform and the merchant, and an empty signature
//! segment (the API accepts an unsigned assertion for this header).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;

#[derive(Serialize)]
struct AssertionHeader {
    alg: &'static str,
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    issuer: &'a str,
    payer_id: &'a str,
}

/// Build an unsigned auth-assertion token for the given platform client id
/// and merchant payer id.
///
/// Deterministic for a given input pair; never fails. Empty identifiers are
/// encoded as-is rather than rejected — callers must supply valid ids to get
/// a token the vendor will accept.
pub fn build_auth_assertion(client_id: &str, merchant_id: &str) -> String {
    let header = encode_segment(&AssertionHeader { alg: "none" });
    let claims = encode_segment(&AssertionClaims {
        issuer: client_id,
        payer_id: merchant_id,
    });

    // The trailing dot leaves the signature segment empty: unsigned.
    format!("{header}.{claims}.")
}

fn encode_segment<T: Serialize>(part: &T) -> String {
    let json = serde_json::to_string(part).expect("assertion segments are plain string fields");
    URL_SAFE_NO_PAD.encode(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_segment(segment: &str) -> String {
        let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_three_dot_joined_segments() {
        let token = build_auth_assertion("client", "merchant");
        let segments: Vec<&str> = token.split('.').collect();

        assert_eq!(segments.len(), 3);
        assert!(segments[2].is_empty());
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn test_segments_decode_to_expected_json() {
        let token = build_auth_assertion("abc", "xyz");
        let segments: Vec<&str> = token.split('.').collect();

        assert_eq!(decode_segment(segments[0]), r#"{"alg":"none"}"#);
        assert_eq!(
            decode_segment(segments[1]),
            r#"{"issuer":"abc","payer_id":"xyz"}"#
        );
    }

    #[test]
    fn test_deterministic() {
        let first = build_auth_assertion("client-a", "merchant-b");
        let second = build_auth_assertion("client-a", "merchant-b");
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_padding_characters() {
        let token = build_auth_assertion("abc", "xyz");
        assert!(!token.contains('='));
    }

    #[test]
    fn test_empty_inputs_still_produce_a_token() {
        let token = build_auth_assertion("", "");
        let segments: Vec<&str> = token.split('.').collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(
            decode_segment(segments[1]),
            r#"{"issuer":"","payer_id":""}"#
        );
    }
}
