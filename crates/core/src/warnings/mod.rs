//! Safety warning detection.
//!
//! The detector holds an ordered table of rules. Every rule is evaluated on
//! every request, and all matches are kept. Warnings with identical text
//! collapse into one entry carrying the highest severity seen. The result is
//! sorted by severity (Emergency first), ties keeping registration order.

pub mod rules;

pub use rules::{builtin_rule_defs, RuleError, WarningRule, CHEST_PAIN_WARNING};

use ol_protocol::agent_models::AgentResult;
use ol_protocol::request_models::AgentRequest;
use ol_protocol::warning_models::{Warning, WarningRuleDef};
use std::cmp::Reverse;
use tracing::debug;

/// Ordered warning rule table.
#[derive(Debug, Clone, Default)]
pub struct WarningDetector {
    rules: Vec<WarningRule>,
}

impl WarningDetector {
    /// A detector with no rules. Never raises a warning.
    pub fn new() -> Self {
        Self::default()
    }

    /// A detector holding the built-in rules.
    pub fn with_builtin_rules() -> Result<Self, RuleError> {
        Self::from_defs(&builtin_rule_defs())
    }

    /// Compile `defs` in order.
    pub fn from_defs(defs: &[WarningRuleDef]) -> Result<Self, RuleError> {
        let mut detector = Self::new();
        for def in defs {
            detector.register(def)?;
        }
        Ok(detector)
    }

    /// Append a rule after the ones already registered.
    pub fn register(&mut self, def: &WarningRuleDef) -> Result<(), RuleError> {
        self.rules.push(WarningRule::compile(def)?);
        Ok(())
    }

    pub fn rules(&self) -> &[WarningRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and return the deduplicated, ordered warnings.
    pub fn detect(&self, request: &AgentRequest, results: &[AgentResult]) -> Vec<Warning> {
        let mut warnings: Vec<Warning> = Vec::new();

        for rule in &self.rules {
            let Some(warning) = rule.evaluate(request, results) else {
                continue;
            };
            debug!(rule = %rule.name(), severity = ?warning.severity, "warning rule matched");

            match warnings.iter_mut().find(|w| w.text == warning.text) {
                Some(existing) if warning.severity > existing.severity => *existing = warning,
                Some(_) => {}
                None => warnings.push(warning),
            }
        }

        // Stable: equal severities keep first-registration order.
        warnings.sort_by_key(|w| Reverse(w.severity));
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_protocol::agent_models::AgentKind;
    use ol_protocol::warning_models::{MatchMode, RuleScope, Severity, WarningSource};

    fn def(name: &str, pattern: &str, text: &str, severity: Severity) -> WarningRuleDef {
        WarningRuleDef {
            name: name.to_string(),
            scope: RuleScope::Symptoms,
            match_mode: MatchMode::Contains,
            pattern: pattern.to_string(),
            text: text.to_string(),
            severity,
        }
    }

    #[test]
    fn test_orders_by_severity_then_registration() {
        let detector = WarningDetector::from_defs(&[
            def("a", "cough", "Info A", Severity::Info),
            def("b", "cough", "Urgent B", Severity::Urgent),
            def("c", "cough", "Emergency C", Severity::Emergency),
            def("d", "cough", "Urgent D", Severity::Urgent),
        ])
        .unwrap();

        let warnings = detector.detect(&AgentRequest::new("abc").with_symptom("cough"), &[]);

        let texts: Vec<_> = warnings.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Emergency C", "Urgent B", "Urgent D", "Info A"]);
    }

    #[test]
    fn test_identical_text_keeps_highest_severity() {
        let detector = WarningDetector::from_defs(&[
            def("low", "cough", "Same text", Severity::Info),
            def("other", "cough", "Other", Severity::Urgent),
            def("high", "cough", "Same text", Severity::Emergency),
        ])
        .unwrap();

        let warnings = detector.detect(&AgentRequest::new("abc").with_symptom("cough"), &[]);

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].text, "Same text");
        assert_eq!(warnings[0].severity, Severity::Emergency);
    }

    #[test]
    fn test_builtin_chest_pain_is_emergency_first() {
        let detector = WarningDetector::with_builtin_rules().unwrap();
        let request = AgentRequest::new("abc")
            .with_symptom("confusion")
            .with_symptom("chest pain");
        // The advisor's urgent-care line is reported as its own warning.
        let results = vec![AgentResult::ok(
            AgentKind::Medication,
            "summary",
            vec!["Seek urgent care for chest pain, severe headache, or breathing difficulty.".to_string()],
        )];

        let warnings = detector.detect(&request, &results);

        assert_eq!(warnings[0].text, CHEST_PAIN_WARNING);
        assert_eq!(warnings[0].severity, Severity::Emergency);
        assert_eq!(warnings[0].source, WarningSource::RequestScan);
        assert_eq!(
            warnings.iter().filter(|w| w.text == CHEST_PAIN_WARNING).count(),
            1
        );
        assert!(warnings.iter().any(|w| w.source == WarningSource::AgentOutputScan));
    }

    #[test]
    fn test_red_flag_boilerplate_does_not_raise_chest_pain() {
        let detector = WarningDetector::with_builtin_rules().unwrap();
        let request = AgentRequest::new("abc").with_symptom("shortness of breath");
        let results = vec![AgentResult::ok(
            AgentKind::Medication,
            "summary",
            vec!["Seek urgent care for chest pain, severe headache, or breathing difficulty.".to_string()],
        )];

        let warnings = detector.detect(&request, &results);

        assert!(warnings.iter().all(|w| w.text != CHEST_PAIN_WARNING));
        assert!(warnings.iter().all(|w| w.severity == Severity::Urgent));
    }

    #[test]
    fn test_no_match_no_warnings() {
        let detector = WarningDetector::with_builtin_rules().unwrap();
        let warnings = detector.detect(&AgentRequest::new("abc").with_goal("weight management"), &[]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_detector() {
        let detector = WarningDetector::new();
        assert!(detector.is_empty());
        assert!(detector
            .detect(&AgentRequest::new("abc").with_symptom("chest pain"), &[])
            .is_empty());
    }
}
