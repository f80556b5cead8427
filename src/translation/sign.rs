//! Request signing for the Baidu translation API.
//!
//! Every request carries a random `salt` and `sign = md5(appid + q + salt + appkey)`
//! as lowercase hex.

use md5::{Digest, Md5};
use rand::Rng;
use std::ops::RangeInclusive;

/// Range the per-request salt is drawn from.
pub const SALT_RANGE: RangeInclusive<u32> = 32768..=65536;

/// Draws a fresh salt for one request.
pub fn generate_salt() -> u32 {
    rand::rng().random_range(SALT_RANGE)
}

/// Computes the request signature.
pub fn sign(app_id: &str, query: &str, salt: u32, app_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(query.as_bytes());
    hasher.update(salt.to_string().as_bytes());
    hasher.update(app_key.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_matches_provider_documentation() {
        // Worked example from the provider's API documentation.
        let signature = sign("2015063000000001", "apple", 1_435_660_288, "12345678");
        assert_eq!(signature, "f89f9594663708c1605f3d736d01d2d4");
    }

    #[test]
    fn test_sign_is_lowercase_hex() {
        let signature = sign("id", "こんにちは", 40000, "key");
        assert_eq!(signature.len(), 32);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_sign_depends_on_salt() {
        assert_ne!(
            sign("id", "hello", 32768, "key"),
            sign("id", "hello", 32769, "key")
        );
    }

    #[test]
    fn test_generate_salt_within_range() {
        for _ in 0..1000 {
            assert!(SALT_RANGE.contains(&generate_salt()));
        }
    }
}
