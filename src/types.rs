//! Core value types shared by the scorer and the display layer.

use std::fmt;

/// Heuristic password strength, always within `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthLevel(u8);

impl StrengthLevel {
    pub const MIN: StrengthLevel = StrengthLevel(0);
    pub const MAX: StrengthLevel = StrengthLevel(4);

    /// Builds a level, clamping anything above 4.
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            StrengthLevel(value)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Iterates every level from weakest to strongest.
    pub fn all() -> impl Iterator<Item = StrengthLevel> {
        (Self::MIN.0..=Self::MAX.0).map(StrengthLevel)
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StrengthLevel> for u8 {
    fn from(level: StrengthLevel) -> Self {
        level.0
    }
}

/// Visual weight of a directive, from alarming to reassuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Primary,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Primary => "primary",
            Severity::Success => "success",
        }
    }

    /// Background style class for a progress bar, e.g. `bg-danger`.
    pub fn css_class(&self) -> String {
        format!("bg-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation.
///
/// `level` is `None` only when the evaluation was cancelled; `hints`
/// then carries the cancellation reason instead of unmet predicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthEvaluation {
    pub level: Option<StrengthLevel>,
    pub hints: Vec<String>,
}

impl StrengthEvaluation {
    pub fn is_evaluated(&self) -> bool {
        self.level.is_some()
    }
}
