//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Mainland mobile number: carrier prefix followed by eight digits
pub const MOBILE_PATTERN: &str = r"^(13\d|14[01456879]|15[0-35-9]|16[2567]|17[0-8]|18\d|19[0-35-9])\d{8}$";

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern is a valid regex"));

/// Check if a phone number is an 11-digit mainland mobile number.
///
/// No normalisation is applied: the number is matched exactly as presented,
/// since it doubles as the key of the verification code store.
pub fn is_valid_mobile(phone: &str) -> bool {
    MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., 138****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
