//! Compiled warning rules and the built-in rule table.

use ol_protocol::agent_models::AgentResult;
use ol_protocol::request_models::AgentRequest;
use ol_protocol::warning_models::{MatchMode, RuleScope, Severity, Warning, WarningRuleDef};
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// A rule definition that cannot be compiled.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Rule '{name}' has an empty pattern")]
    EmptyPattern { name: String },

    #[error("Rule '{name}' has empty warning text")]
    EmptyText { name: String },

    #[error("Rule '{name}' has an invalid regex: {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Lowercased needle.
    Contains(String),
    /// Lowercased, trimmed expected text.
    Exact(String),
    Regex(Regex),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self {
            Self::Contains(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Exact(expected) => text.to_lowercase() == *expected,
            Self::Regex(regex) => regex.is_match(text),
        }
    }
}

/// A warning rule ready for evaluation.
#[derive(Debug, Clone)]
pub struct WarningRule {
    def: WarningRuleDef,
    matcher: Matcher,
}

impl WarningRule {
    /// Compile a rule definition. Matching is case-insensitive in every mode.
    pub fn compile(def: &WarningRuleDef) -> Result<Self, RuleError> {
        let pattern = def.pattern.trim();
        if pattern.is_empty() {
            return Err(RuleError::EmptyPattern {
                name: def.name.clone(),
            });
        }
        if def.text.trim().is_empty() {
            return Err(RuleError::EmptyText {
                name: def.name.clone(),
            });
        }

        let matcher = match def.match_mode {
            MatchMode::Contains => Matcher::Contains(pattern.to_lowercase()),
            MatchMode::Exact => Matcher::Exact(pattern.to_lowercase()),
            MatchMode::Regex => Matcher::Regex(
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RuleError::InvalidRegex {
                        name: def.name.clone(),
                        source,
                    })?,
            ),
        };

        Ok(Self {
            def: def.clone(),
            matcher,
        })
    }

    pub fn def(&self) -> &WarningRuleDef {
        &self.def
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn severity(&self) -> Severity {
        self.def.severity
    }

    /// Evaluate against a request and the dispatched results.
    ///
    /// Returns at most one warning however many texts match. Agent-output
    /// rules only look at `Ok` results.
    pub fn evaluate(&self, request: &AgentRequest, results: &[AgentResult]) -> Option<Warning> {
        let symptoms = || request.symptoms.iter().map(String::as_str);
        let goals = || request.goals.iter().map(String::as_str);
        let notes = || request.lifestyle_notes.as_deref().into_iter();

        let matched = match self.def.scope {
            RuleScope::Symptoms => symptoms().any(|t| self.matcher.matches(t)),
            RuleScope::Goals => goals().any(|t| self.matcher.matches(t)),
            RuleScope::LifestyleNotes => notes().any(|t| self.matcher.matches(t)),
            RuleScope::Request => symptoms()
                .chain(goals())
                .chain(notes())
                .any(|t| self.matcher.matches(t)),
            RuleScope::AgentOutput => results
                .iter()
                .filter(|result| result.is_ok())
                .flat_map(|result| {
                    std::iter::once(result.summary.as_str())
                        .chain(result.recommendations.iter().map(String::as_str))
                })
                .any(|t| self.matcher.matches(t)),
        };

        matched.then(|| Warning {
            text: self.def.text.clone(),
            severity: self.def.severity,
            source: self.def.scope.source(),
        })
    }
}

pub const CHEST_PAIN_WARNING: &str =
    "Chest pain requires immediate evaluation. If severe, call emergency services.";

fn rule(
    name: &str,
    scope: RuleScope,
    match_mode: MatchMode,
    pattern: &str,
    text: &str,
    severity: Severity,
) -> WarningRuleDef {
    WarningRuleDef {
        name: name.to_string(),
        scope,
        match_mode,
        pattern: pattern.to_string(),
        text: text.to_string(),
        severity,
    }
}

/// Built-in rules, in registration order.
pub fn builtin_rule_defs() -> Vec<WarningRuleDef> {
    use MatchMode::Contains;
    use RuleScope::{AgentOutput, LifestyleNotes, Request, Symptoms};
    use Severity::{Emergency, Info, Urgent};

    vec![
        rule("chest-pain", Symptoms, Contains, "chest pain", CHEST_PAIN_WARNING, Emergency),
        rule(
            "fainting",
            Symptoms,
            MatchMode::Regex,
            r"\b(faint(ed|ing)?|passed out|loss of consciousness)\b",
            "Fainting or loss of consciousness requires emergency evaluation. Call emergency services.",
            Emergency,
        ),
        rule(
            "self-harm",
            Request,
            MatchMode::Regex,
            r"\b(suicid(e|al)|self[- ]harm|kill myself|end my life)\b",
            "If you are thinking about harming yourself, contact emergency services or a crisis line now.",
            Emergency,
        ),
        rule(
            "shortness-of-breath",
            Symptoms,
            Contains,
            "shortness of breath",
            "Shortness of breath can indicate cardiopulmonary issues; seek urgent care if worsening.",
            Urgent,
        ),
        rule(
            "confusion",
            Symptoms,
            Contains,
            "confusion",
            "New confusion warrants medical attention to rule out serious causes.",
            Urgent,
        ),
        rule(
            "severe-headache",
            Symptoms,
            Contains,
            "severe headache",
            "A sudden or severe headache should be assessed by a clinician promptly.",
            Urgent,
        ),
        rule(
            "agent-urgent-care",
            AgentOutput,
            MatchMode::Regex,
            r"seek (urgent|emergency) care",
            "An advisor recommends urgent in-person care; do not delay seeking it.",
            Urgent,
        ),
        rule(
            "supplements",
            LifestyleNotes,
            MatchMode::Regex,
            r"\bsupplements?\b",
            "Review supplements with a pharmacist to check for interactions.",
            Info,
        ),
    ]
}
