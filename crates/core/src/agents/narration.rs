//! Backend-assisted narration of rule-table advice.
//!
//! When a model backend is configured, an agent sends its system prompt, the
//! request and its baseline recommendations to the backend. The reply's first
//! non-empty line becomes the summary and `- ` / `* ` bullet lines extend the
//! recommendations.

use crate::agents::backend::SharedBackend;
use crate::agents::base::{Advice, AgentError};
use ol_protocol::agent_models::AgentKind;
use ol_protocol::request_models::AgentRequest;
use std::fmt::Write;

/// Binding between one agent and the shared backend.
#[derive(Debug, Clone)]
pub struct Narration {
    backend: SharedBackend,
    system_prompt: String,
}

impl Narration {
    pub fn new(backend: SharedBackend, system_prompt: impl Into<String>) -> Self {
        Self {
            backend,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Ask the backend to narrate `baseline` for `request`.
    pub async fn narrate(
        &self,
        kind: AgentKind,
        request: &AgentRequest,
        baseline: Advice,
    ) -> Result<Advice, AgentError> {
        let prompt = self.build_prompt(kind, request, &baseline);
        let output = self.backend.complete(&prompt).await?;
        merge_completion(baseline, &output)
    }

    pub fn build_prompt(&self, kind: AgentKind, request: &AgentRequest, baseline: &Advice) -> String {
        let mut prompt = String::new();
        let system_prompt = self.system_prompt.trim();
        if !system_prompt.is_empty() {
            prompt.push_str(system_prompt);
            prompt.push_str("\n\n");
        }

        let _ = writeln!(prompt, "Agent: {}", kind.display_name());
        let _ = writeln!(prompt, "Symptoms: {}", join_or_none(&request.symptoms));
        let _ = writeln!(prompt, "Goals: {}", join_or_none(&request.goals));
        let _ = writeln!(
            prompt,
            "Lifestyle notes: {}",
            request.lifestyle_notes.as_deref().unwrap_or("none")
        );
        prompt.push_str("Baseline recommendations:\n");
        for recommendation in &baseline.recommendations {
            let _ = writeln!(prompt, "- {recommendation}");
        }
        prompt.push_str(
            "\nReply with a one-line summary, then any additional recommendations as '- ' bullet lines.\n",
        );
        prompt
    }
}

/// Narrate `baseline` when a backend is bound, otherwise keep it unchanged.
pub async fn narrate_or_keep(
    narration: Option<&Narration>,
    kind: AgentKind,
    request: &AgentRequest,
    baseline: Advice,
) -> Result<Advice, AgentError> {
    match narration {
        Some(narration) => narration.narrate(kind, request, baseline).await,
        None => Ok(baseline),
    }
}

fn join_or_none(entries: &[String]) -> String {
    if entries.is_empty() {
        "none".to_string()
    } else {
        entries.join(", ")
    }
}

fn bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Merge a backend reply into the baseline advice.
pub fn merge_completion(mut advice: Advice, output: &str) -> Result<Advice, AgentError> {
    let mut lines = output.lines().map(str::trim).filter(|line| !line.is_empty());

    let first = lines
        .next()
        .ok_or_else(|| AgentError::ParseError("backend returned no text".to_string()))?;
    advice.summary = bullet(first).unwrap_or(first).to_string();

    for item in lines.filter_map(bullet) {
        advice.push_unique(item);
    }

    Ok(advice)
}
