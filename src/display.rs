//! Display mapping - turns a strength level into what the UI should show.
//!
//! Scoring never touches the UI. Hosts implement [`StrengthRenderer`] for
//! their widget (progress bar, terminal gauge, ...) and hand it to a
//! [`PasswordMeter`].

use secrecy::SecretString;

use crate::evaluator::evaluate_password_strength;
use crate::labels::{current_labels, LabelTable};
use crate::types::{Severity, StrengthEvaluation, StrengthLevel};

/// Severity and fill percentage, indexed by level.
const DISPLAY_TABLE: [(Severity, u8); 5] = [
    (Severity::Danger, 25),
    (Severity::Warning, 50),
    (Severity::Info, 75),
    (Severity::Primary, 85),
    (Severity::Success, 100),
];

/// Visual parameters for a single strength level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDirective {
    pub severity: Severity,
    pub fill_percent: u8,
    pub label: String,
}

/// Looks up the directive for `level` using the given labels.
pub fn directive_for(level: StrengthLevel, labels: &LabelTable) -> DisplayDirective {
    let (severity, fill_percent) = DISPLAY_TABLE[level.value() as usize];
    DisplayDirective {
        severity,
        fill_percent,
        label: labels.label(level).to_string(),
    }
}

/// Looks up the directive for `level` using the process-wide label table.
pub fn directive(level: StrengthLevel) -> DisplayDirective {
    directive_for(level, &current_labels())
}

/// Implemented by the UI layer that shows strength feedback.
pub trait StrengthRenderer {
    fn render(&mut self, directive: &DisplayDirective);
}

impl<R: StrengthRenderer + ?Sized> StrengthRenderer for &mut R {
    fn render(&mut self, directive: &DisplayDirective) {
        (**self).render(directive)
    }
}

/// Binds the scorer to an optional renderer, one call per input event.
///
/// With no renderer attached, `on_input` still evaluates but draws nothing.
pub struct PasswordMeter<R> {
    renderer: Option<R>,
    labels: LabelTable,
}

impl<R: StrengthRenderer> PasswordMeter<R> {
    /// Meter using the process-wide label table as of construction.
    pub fn new(renderer: Option<R>) -> Self {
        Self::with_labels(renderer, current_labels())
    }

    pub fn with_labels(renderer: Option<R>, labels: LabelTable) -> Self {
        PasswordMeter { renderer, labels }
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Evaluates the current field value and renders the result.
    pub fn on_input(&mut self, password: &SecretString) -> StrengthEvaluation {
        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(password, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(password);

        if let (Some(level), Some(renderer)) = (evaluation.level, self.renderer.as_mut()) {
            renderer.render(&directive_for(level, &self.labels));
        }

        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{init_labels_from_path, reset_labels_for_testing};
    use serial_test::serial;

    #[derive(Default)]
    struct RecordingRenderer {
        rendered: Vec<DisplayDirective>,
    }

    impl StrengthRenderer for RecordingRenderer {
        fn render(&mut self, directive: &DisplayDirective) {
            self.rendered.push(directive.clone());
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_display_table() {
        let labels = LabelTable::english();
        let expected = [
            (Severity::Danger, 25, "very weak"),
            (Severity::Warning, 50, "weak"),
            (Severity::Info, 75, "medium"),
            (Severity::Primary, 85, "strong"),
            (Severity::Success, 100, "very strong"),
        ];

        for (level, (severity, fill, label)) in StrengthLevel::all().zip(expected) {
            let d = directive_for(level, &labels);
            assert_eq!(d.severity, severity, "level {}", level);
            assert_eq!(d.fill_percent, fill, "level {}", level);
            assert_eq!(d.label, label, "level {}", level);
        }
    }

    #[test]
    fn test_directive_uses_custom_labels() {
        let labels = LabelTable::parse("0=a\n1=b\n2=c\n3=d\n4=e\n").unwrap();
        let d = directive_for(StrengthLevel::new(3), &labels);
        assert_eq!(d.label, "d");
        assert_eq!(d.severity.css_class(), "bg-primary");
    }

    #[test]
    #[serial]
    fn test_directive_follows_loaded_labels() {
        reset_labels_for_testing();
        let zh_cn = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/labels/zh-CN.txt");
        init_labels_from_path(zh_cn).expect("bundled zh-CN labels should load");

        let d = directive(StrengthLevel::new(2));
        assert_eq!(d.label, "中等");
        assert_eq!(d.severity, Severity::Info);
        assert_eq!(d.fill_percent, 75);

        reset_labels_for_testing();
        assert_eq!(directive(StrengthLevel::new(2)).label, "medium");
    }

    #[test]
    fn test_meter_renders_each_input() {
        let mut meter = PasswordMeter::with_labels(
            Some(RecordingRenderer::default()),
            LabelTable::english(),
        );

        meter.on_input(&secret(""));
        meter.on_input(&secret("Abcdefg1!"));

        let rendered = &meter.renderer().unwrap().rendered;
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].fill_percent, 25);
        assert_eq!(rendered[0].label, "very weak");
        assert_eq!(rendered[1].severity, Severity::Success);
        assert_eq!(rendered[1].fill_percent, 100);
    }

    #[test]
    fn test_meter_without_renderer_is_noop() {
        let mut meter: PasswordMeter<RecordingRenderer> =
            PasswordMeter::with_labels(None, LabelTable::english());
        let evaluation = meter.on_input(&secret("Abcdefgh"));
        assert_eq!(evaluation.level, Some(StrengthLevel::new(2)));
        assert!(meter.renderer().is_none());
    }

    #[test]
    fn test_meter_accepts_borrowed_renderer() {
        let mut recorder = RecordingRenderer::default();
        {
            let mut meter = PasswordMeter::with_labels(Some(&mut recorder), LabelTable::english());
            meter.on_input(&secret("abcdefgh"));
        }
        assert_eq!(recorder.rendered.len(), 1);
        assert_eq!(recorder.rendered[0].label, "weak");
    }
}
