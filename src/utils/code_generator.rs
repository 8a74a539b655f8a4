//! Short code generation and validation.
//!
//! Generated codes are 6-8 characters drawn from lowercase letters and
//! digits. Custom codes allow mixed case but keep the same length bounds.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

const CODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const MIN_CODE_LEN: usize = 6;
const MAX_CODE_LEN: usize = 8;

/// Codes that would shadow a routed path and therefore never resolve.
const RESERVED_CODES: &[&str] = &["api", "code", "static", "healthz", "dashboard"];

/// Generates a random short code.
///
/// The length is chosen uniformly from 6-8 and each character uniformly
/// from `[a-z0-9]`. Collisions are not avoided here; the caller retries
/// on a unique-constraint conflict.
///
/// # Examples
///
/// ```
/// let code = shortlink::utils::code_generator::generate_code();
/// assert!((6..=8).contains(&code.len()));
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(MIN_CODE_LEN..=MAX_CODE_LEN);

    (0..len)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved system code (compared case-insensitively)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len())
        || !code.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::bad_request(
            "Code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_length_in_range() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len()),
                "unexpected length: {}",
                code.len()
            );
        }
    }

    #[test]
    fn test_generate_code_charset() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in {code:?}"
            );
        }
    }

    #[test]
    fn test_generate_code_produces_all_lengths() {
        let lengths: HashSet<usize> = (0..1000).map(|_| generate_code().len()).collect();
        assert_eq!(lengths, HashSet::from([6, 7, 8]));
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 36^6 possible 6-char codes alone; 1000 draws should not all collide.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abc123").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("abcd1234").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_allowed() {
        assert!(validate_custom_code("MyLink1").is_ok());
    }

    #[test]
    fn test_validate_only_digits() {
        assert!(validate_custom_code("123456").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_custom_code("abc12");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("6-8 alphanumeric"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("abcd12345").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my-code").is_err());
        assert!(validate_custom_code("my_code").is_err());
        assert!(validate_custom_code("my code").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_reserved_codes() {
        assert!(validate_custom_code("healthz").is_err());
        assert!(validate_custom_code("HEALTHZ").is_err());
        assert!(validate_custom_code("static").is_err());
    }
}
