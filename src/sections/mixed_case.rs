//! Mixed case section - requires both ASCII lowercase and uppercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks that the password mixes ASCII lowercase and uppercase letters.
///
/// Non-ASCII letters never count here.
pub fn mixed_case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper {
        None
    } else {
        Some("Mix uppercase and lowercase letters".to_string())
    }
}
