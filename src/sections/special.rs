//! Special character section - anything outside `[A-Za-z0-9]`.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one character that is not an ASCII letter or digit.
///
/// Punctuation, whitespace and every non-ASCII code point qualify,
/// including letters such as `é`.
pub fn special_character_section(password: &SecretString) -> SectionResult {
    if password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some("Add a special character".to_string())
}
