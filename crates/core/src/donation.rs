//! Donation rules and derived presentation values.

use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Smallest donation accepted through the public donation form.
pub const MIN_DONATION: i32 = 5;

/// Share of every approved donation kept by the platform.
pub const PLATFORM_FEE_RATE: f64 = 0.05;

/// Name shown for donors who asked to stay anonymous.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Avatar shown for anonymous donors.
pub const DEFAULT_AVATAR_URL: &str = "/static/img/default.jpg";

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar/";
const AVATAR_SIZE_PX: u32 = 40;

/// Reject donations below [`MIN_DONATION`].
pub fn validate_minimum(amount: i32) -> Result<(), CoreError> {
    if amount < MIN_DONATION {
        return Err(CoreError::Validation(format!(
            "Minimum donation amount is {MIN_DONATION}, got {amount}"
        )));
    }
    Ok(())
}

/// Platform fee earned on a donation of `amount`.
pub fn platform_fee(amount: i64) -> f64 {
    amount as f64 * PLATFORM_FEE_RATE
}

/// Platform fee formatted as dollars with two decimals, e.g. `"$2.50"`.
pub fn format_fee(amount: i64) -> String {
    format!("${:.2}", platform_fee(amount))
}

/// Public donor name: the full name, or [`ANONYMOUS_NAME`].
pub fn display_name(fullname: &str, anonymous: bool) -> &str {
    if anonymous {
        ANONYMOUS_NAME
    } else {
        fullname
    }
}

/// Gravatar URL for a donor.
///
/// The e-mail is trimmed and lower-cased before hashing (SHA-256, which
/// Gravatar accepts alongside MD5). Anonymous donors never expose their
/// e-mail hash and get [`DEFAULT_AVATAR_URL`].
pub fn avatar_url(email: &str, anonymous: bool) -> String {
    if anonymous {
        return DEFAULT_AVATAR_URL.to_string();
    }
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{GRAVATAR_BASE}{digest:x}.jpg?s={AVATAR_SIZE_PX}")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn minimum_is_inclusive() {
        assert!(validate_minimum(MIN_DONATION).is_ok());
        assert!(validate_minimum(250).is_ok());
        assert_matches!(validate_minimum(4), Err(CoreError::Validation(_)));
        assert_matches!(validate_minimum(0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn fee_is_five_percent() {
        assert_eq!(platform_fee(200), 10.0);
        assert_eq!(platform_fee(0), 0.0);
        assert_eq!(format_fee(50), "$2.50");
        assert_eq!(format_fee(1), "$0.05");
    }

    #[test]
    fn anonymous_donors_are_masked() {
        assert_eq!(display_name("Jane Doe", false), "Jane Doe");
        assert_eq!(display_name("Jane Doe", true), ANONYMOUS_NAME);
        assert_eq!(avatar_url("jane@example.com", true), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn avatar_hash_ignores_case_and_whitespace() {
        let a = avatar_url("  Jane@Example.com ", false);
        let b = avatar_url("jane@example.com", false);
        assert_eq!(a, b);
        assert!(a.starts_with(GRAVATAR_BASE));
        assert!(a.ends_with(".jpg?s=40"));

        // 64 hex chars of SHA-256 between base and suffix.
        let hash = &a[GRAVATAR_BASE.len()..a.len() - ".jpg?s=40".len()];
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
