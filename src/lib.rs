//! Password strength meter library
//!
//! Scores a candidate password on a `0..=4` scale from four independent
//! predicates (length, mixed case, digit, special character) and maps the
//! level to a display directive: severity, fill percentage and label.
//! This is advisory feedback for a password field, not a password policy.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_LABELS_PATH`: Custom path to the label table
//!   (default: `./assets/labels.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{PasswordMeter, DisplayDirective, StrengthRenderer};
//! use secrecy::SecretString;
//!
//! struct ProgressBar {
//!     width: u8,
//!     class: String,
//!     text: String,
//! }
//!
//! impl StrengthRenderer for ProgressBar {
//!     fn render(&mut self, directive: &DisplayDirective) {
//!         self.width = directive.fill_percent;
//!         self.class = directive.severity.css_class();
//!         self.text = directive.label.clone();
//!     }
//! }
//!
//! // Optional: load localized labels (call once at startup)
//! let _ = pwd_meter::init_labels();
//!
//! let bar = ProgressBar { width: 0, class: String::new(), text: String::new() };
//! let mut meter = PasswordMeter::new(Some(bar));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = meter.on_input(&password);
//!
//! assert_eq!(pwd_meter::score("MyP@ssw0rd!").value(), 4);
//! assert!(evaluation.hints.is_empty());
//! ```

// Internal modules
mod display;
mod evaluator;
mod labels;
mod sections;
mod types;

// Public API
pub use display::{directive, directive_for, DisplayDirective, PasswordMeter, StrengthRenderer};
pub use evaluator::{evaluate_password_strength, score};
pub use labels::{
    current_labels, get_labels_path, init_labels, init_labels_from_path, LabelError, LabelTable,
};
pub use types::{Severity, StrengthEvaluation, StrengthLevel};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
