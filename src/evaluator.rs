//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    digit_section, length_section, mixed_case_section, special_character_section, SectionResult,
};
use crate::types::{StrengthEvaluation, StrengthLevel};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Quiet period after the last keystroke before the tx variant evaluates.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

type Section = fn(&SecretString) -> SectionResult;

const SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("mixed_case", mixed_case_section),
    ("digit", digit_section),
    ("special", special_character_section),
];

/// Evaluates password strength and returns the level plus unmet-predicate hints.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `StrengthEvaluation` whose level is `None` only if cancelled.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> StrengthEvaluation {
    let mut hints = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
                return StrengthEvaluation {
                    level: None,
                    hints: vec!["Evaluation cancelled".to_string()],
                };
            }
        }

        if let Some(hint) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, "predicate not met");
            hints.push(hint);
        }
    }

    let level = StrengthLevel::new((SECTIONS.len() - hints.len()) as u8);

    #[cfg(feature = "tracing")]
    tracing::debug!(level = level.value(), "password evaluated");

    StrengthEvaluation {
        level: Some(level),
        hints,
    }
}

/// Scores a password on the `0..=4` scale.
///
/// Pure and total: the same input always yields the same level.
pub fn score(password: &str) -> StrengthLevel {
    let pwd = SecretString::new(password.into());

    #[cfg(feature = "async")]
    let evaluation = evaluate_password_strength(&pwd, None);

    #[cfg(not(feature = "async"))]
    let evaluation = evaluate_password_strength(&pwd);

    evaluation.level.unwrap_or_default()
}

/// Async version that debounces, then sends the evaluation via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
