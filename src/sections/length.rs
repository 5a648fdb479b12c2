//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, the way a browser reports a
/// text field's length: characters outside the Basic Multilingual Plane
/// (emoji, for instance) count twice, while bytes never matter.
///
/// # Returns
/// - `Some(hint)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().encode_utf16().count() < MIN_LENGTH {
        return Some(format!("Use at least {} characters", MIN_LENGTH));
    }
    None
}
