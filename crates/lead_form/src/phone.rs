//! Mobile-number format accepted by the lead form.

/// Required length of a mobile number, in ASCII digits.
pub const PHONE_LENGTH: usize = 11;
/// Prefix every accepted mobile number starts with.
pub const PHONE_PREFIX: &str = "09";
/// Canonical example shown in the placeholder, hint, and validation message.
pub const PHONE_EXAMPLE: &str = "09123456789";
/// HTML `pattern` attribute mirroring [`is_valid_phone`].
pub const PHONE_INPUT_PATTERN: &str = "09[0-9]{9}";

/// Returns `true` iff `candidate` is `09` followed by exactly nine ASCII digits.
///
/// Equivalent to `^09[0-9]{9}$`; surrounding whitespace is not accepted.
pub fn is_valid_phone(candidate: &str) -> bool {
    candidate.len() == PHONE_LENGTH
        && candidate.starts_with(PHONE_PREFIX)
        && candidate.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eleven_digit_numbers_with_the_prefix() {
        assert!(is_valid_phone(PHONE_EXAMPLE));
        assert!(is_valid_phone("09000000000"));
        assert!(is_valid_phone("09999999999"));
    }

    #[test]
    fn rejects_wrong_prefix_length_or_characters() {
        for candidate in [
            "",
            "0",
            "09",
            "0912345678",
            "091234567890",
            "08123456789",
            "19123456789",
            "9123456789",
            "0912345678a",
            "09-23456789",
            " 09123456789",
            "09123456789 ",
            "+989123456789",
            "０９１２３４５６７８９",
        ] {
            assert!(!is_valid_phone(candidate), "{candidate:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits_of_matching_byte_length() {
        // Arabic-Indic digits are decimal but outside [0-9].
        assert!(!is_valid_phone("09١٢٣٤5"));
    }
}
