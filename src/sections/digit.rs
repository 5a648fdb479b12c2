//! Digit section - requires at least one ASCII digit.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub fn digit_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some("Add a number".to_string())
}
