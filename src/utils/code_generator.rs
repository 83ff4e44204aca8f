//! Short code generation and validation utilities.

use crate::domain::error::RegistryError;
use rand::Rng;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Alphabet for generated codes: 62 symbols, upper, lower and digits.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random short code.
///
/// Each of the [`CODE_LENGTH`] characters is drawn uniformly from the
/// 62-symbol alphanumeric alphabet (62^6 ≈ 5.6×10^10 codes). Uniqueness is
/// not guaranteed here; the registry re-rolls on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Validates a short code supplied for lookup.
///
/// Only emptiness is rejected: a code of any other shape simply does not
/// exist and resolves to `NotFound`.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidInput`] for an empty or blank code.
pub fn validate_lookup_code(code: &str) -> Result<(), RegistryError> {
    if code.trim().is_empty() {
        return Err(RegistryError::InvalidInput(
            "Short code must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let mut seen = HashSet::new();

        for _ in 0..2000 {
            seen.extend(generate_code().chars());
        }

        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_charset_has_62_symbols() {
        let unique: HashSet<_> = CHARSET.iter().collect();
        assert_eq!(CHARSET.len(), 62);
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_validate_lookup_code_accepts_any_non_empty() {
        assert!(validate_lookup_code("aB3xY9").is_ok());
        assert!(validate_lookup_code("ZZZZZZ").is_ok());
        assert!(validate_lookup_code("not-a-generated-code").is_ok());
    }

    #[test]
    fn test_validate_lookup_code_empty() {
        let result = validate_lookup_code("");
        assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_lookup_code_blank() {
        assert!(validate_lookup_code("   ").is_err());
    }
}
