//! CNPJ validation
//!
//! Brazilian company registration numbers (CNPJ) are 14 digits, the last two
//! being check digits computed modulo 11 over weighted sums. Input is
//! accepted either bare ("11222333000181") or formatted
//! ("11.222.333/0001-81"); repositories store the normalized digit form.

use validator::ValidationError;

/// Digit count of a normalized CNPJ.
pub const CNPJ_DIGITS: usize = 14;

const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Strip formatting punctuation, keeping digits only.
pub fn normalize_cnpj(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check a CNPJ's length and both check digits.
pub fn is_valid_cnpj(raw: &str) -> bool {
    let normalized = normalize_cnpj(raw);
    if normalized.len() != CNPJ_DIGITS {
        return false;
    }

    let digits: Vec<u32> = normalized
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    // Sequences of one repeated digit satisfy the checksum but are not
    // valid registrations.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..12], &FIRST_CHECK_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &SECOND_CHECK_WEIGHTS) == digits[13]
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

/// Validator-compatible wrapper for request DTOs.
pub fn validate_cnpj(raw: &str) -> Result<(), ValidationError> {
    if is_valid_cnpj(raw) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_cnpj").with_message("Invalid CNPJ".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cnpj_bare_and_formatted() {
        assert!(is_valid_cnpj("11222333000181"));
        assert!(is_valid_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn test_invalid_check_digits() {
        assert!(!is_valid_cnpj("11222333000180"));
        assert!(!is_valid_cnpj("11222333000191"));
        assert!(!is_valid_cnpj("12345678000100"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_cnpj(""));
        assert!(!is_valid_cnpj("1122233300018"));
        assert!(!is_valid_cnpj("112223330001811"));
    }

    #[test]
    fn test_repeated_digit_sequences_rejected() {
        assert!(!is_valid_cnpj("00000000000000"));
        assert!(!is_valid_cnpj("11111111111111"));
    }

    #[test]
    fn test_non_digit_garbage_rejected() {
        assert!(!is_valid_cnpj("abc.def/ghij-kl"));
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_cnpj("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn test_validator_wrapper() {
        assert!(validate_cnpj("11.222.333/0001-81").is_ok());
        assert!(validate_cnpj("11222333000180").is_err());
    }
}
