//! Steam Guard code derivation.
//!
//! HMAC-SHA1 over the 30-second time step (RFC 6238 style), dynamic
//! truncation per RFC 4226 §5.3, then five characters drawn from Steam's
//! 26-symbol alphabet instead of decimal digits.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{GuardError, GuardResult};

type HmacSha1 = Hmac<Sha1>;

/// Length of a rotating code period in seconds.
pub const PERIOD_SECS: u64 = 30;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 5;

/// Symbols Steam uses for its codes (no vowels, no ambiguous glyphs).
const CODE_ALPHABET: &[u8; 26] = b"23456789BCDFGHJKMNPQRTVWXY";

/// Strip whitespace and one layer of surrounding quotes.
///
/// Secrets are often pasted straight out of JSON (`"abc="`) or shell
/// snippets (`'abc='`).
pub fn clean_secret(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}

/// Decode a base64 shared secret into key bytes.
pub fn decode_secret(raw: &str) -> GuardResult<Vec<u8>> {
    BASE64
        .decode(clean_secret(raw))
        .map_err(|e| GuardError::CodeGeneration(format!("Failed to decode Base64: {}", e)))
}

/// Time-step counter for a unix timestamp.
pub fn time_step(unix_seconds: u64) -> u64 {
    unix_seconds / PERIOD_SECS
}

/// Generate the code for `shared_secret` at `unix_seconds`.
pub fn generate_code_at(shared_secret: &str, unix_seconds: u64) -> GuardResult<String> {
    let key = decode_secret(shared_secret)?;

    let mut mac = HmacSha1::new_from_slice(&key)
        .map_err(|e| GuardError::CodeGeneration(format!("Failed to create HMAC instance: {}", e)))?;
    mac.update(&time_step(unix_seconds).to_be_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(encode_digest(&digest))
}

/// Dynamic truncation followed by base-26 expansion, least significant first.
fn encode_digest(digest: &[u8]) -> String {
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let mut value = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    let radix = CODE_ALPHABET.len() as u32;
    let mut code = String::with_capacity(CODE_LENGTH);
    for _ in 0..CODE_LENGTH {
        code.push(CODE_ALPHABET[(value % radix) as usize] as char);
        value /= radix;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64("12345678901234567890"), the RFC 4226 test key.
    const RFC_SECRET: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";

    #[test]
    fn test_known_codes() {
        assert_eq!(generate_code_at(RFC_SECRET, 0).unwrap(), "GG5F5");
        assert_eq!(generate_code_at(RFC_SECRET, 30).unwrap(), "PV9M4");
        assert_eq!(generate_code_at(RFC_SECRET, 95).unwrap(), "5H85C");
        assert_eq!(generate_code_at(RFC_SECRET, 1_700_000_000).unwrap(), "R87JJ");
    }

    #[test]
    fn test_code_is_stable_within_period() {
        assert_eq!(
            generate_code_at("ABCD1234", 90).unwrap(),
            generate_code_at("ABCD1234", 119).unwrap()
        );
        assert_eq!(generate_code_at("ABCD1234", 95).unwrap(), "WJRKM");
        assert_eq!(generate_code_at("ABCD1234", 120).unwrap(), "JN3BV");
    }

    #[test]
    fn test_quoted_secret_is_cleaned() {
        let quoted = format!("  \"{}\" ", RFC_SECRET);
        assert_eq!(generate_code_at(&quoted, 0).unwrap(), "GG5F5");
        let single = format!("'{}'", RFC_SECRET);
        assert_eq!(generate_code_at(&single, 0).unwrap(), "GG5F5");
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let err = generate_code_at("not base64!", 0).unwrap_err();
        match err {
            GuardError::CodeGeneration(msg) => assert!(msg.starts_with("Failed to decode Base64")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_codes_use_steam_alphabet() {
        for t in (0..3000).step_by(30) {
            let code = generate_code_at(RFC_SECRET, t).unwrap();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_time_step() {
        assert_eq!(time_step(0), 0);
        assert_eq!(time_step(29), 0);
        assert_eq!(time_step(30), 1);
        assert_eq!(time_step(95), 3);
    }
}
