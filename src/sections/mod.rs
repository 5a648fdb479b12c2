//! Password evaluation sections
//!
//! Each section tests one predicate and is worth exactly one point.

mod digit;
mod length;
mod mixed_case;
mod special;

pub use digit::digit_section;
pub use length::length_section;
pub use mixed_case::mixed_case_section;
pub use special::special_character_section;

/// Result type for section evaluation functions.
/// - `Some(hint)` - Predicate not met, with advice for the user
/// - `None` - Predicate met, worth one point
pub type SectionResult = Option<String>;
