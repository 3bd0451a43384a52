//! Phone number normalization.

/// Normalize a phone number to international-dial-code form.
///
/// Prefixes `+` exactly once when absent; numbers already prefixed pass
/// through unchanged. No further validation happens here; rejecting bad
/// numbers is the provider's call.
pub fn normalize_phone_number(phone_number: &str) -> String {
    if phone_number.starts_with('+') {
        phone_number.to_string()
    } else {
        format!("+{phone_number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_plus_when_absent() {
        assert_eq!(normalize_phone_number("919876543210"), "+919876543210");
    }

    #[test]
    fn test_already_prefixed_passes_unchanged() {
        assert_eq!(normalize_phone_number("+919876543210"), "+919876543210");
    }

    #[test]
    fn test_never_double_prefixes() {
        let once = normalize_phone_number("919876543210");
        assert_eq!(normalize_phone_number(&once), once);
    }

    #[test]
    fn test_empty_input_still_gets_prefix() {
        // Garbage in, garbage (with a plus) out; the provider rejects it.
        assert_eq!(normalize_phone_number(""), "+");
    }
}
