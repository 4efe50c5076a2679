//! Configuration on disk driving a full analysis.

mod common;

use common::*;
use ol_core::config::load_config;
use ol_core::orchestrator::Orchestrator;
use ol_core::OrchestratorError;
use ol_protocol::agent_models::AgentKind;
use ol_protocol::request_models::AgentRequest;
use ol_protocol::warning_models::Severity;
use std::time::Duration;

#[tokio::test]
async fn test_configured_agents_and_rules_are_used() {
    let project = create_test_project(
        r#"
agents = ["exercise", "health-butler"]
agent_timeout_ms = 3000
"#,
        &[(
            "dizziness.yaml",
            r#"
- name: dizziness
  scope: symptoms
  match: regex
  pattern: "dizz(y|iness)"
  text: Persistent dizziness should be reviewed by a clinician.
  severity: URGENT
"#,
        )],
    )
    .unwrap();

    let config = load_config(project.path()).await.unwrap();
    let orchestrator = Orchestrator::from_config(&config, None).unwrap();

    assert_eq!(orchestrator.timeout(), Duration::from_millis(3000));
    assert!(config.profile_for(AgentKind::Exercise).is_some());

    let response = orchestrator
        .analyze(AgentRequest::new("abc").with_symptom("Dizziness").with_symptom("chest pain"))
        .await
        .unwrap();

    assert_canonical_order(&response, &[AgentKind::Exercise, AgentKind::HealthButler]);
    let texts: Vec<_> = response.warnings.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(response.warnings[0].severity, Severity::Emergency);
    assert_eq!(texts[1], "Persistent dizziness should be reviewed by a clinician.");
}

#[tokio::test]
async fn test_builtin_rules_can_be_disabled() {
    let project = create_test_project("builtin_rules = false", &[]).unwrap();

    let config = load_config(project.path()).await.unwrap();
    let orchestrator = Orchestrator::from_config(&config, None).unwrap();

    let response = orchestrator.analyze(chest_pain_request()).await.unwrap();

    assert!(orchestrator.detector().is_empty());
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_invalid_rule_regex_fails_at_build() {
    let project = create_test_project(
        "",
        &[(
            "broken.yaml",
            r#"
- name: broken
  scope: request
  match: regex
  pattern: "(unclosed"
  text: Never raised.
  severity: INFO
"#,
        )],
    )
    .unwrap();

    let config = load_config(project.path()).await.unwrap();
    let result = Orchestrator::from_config(&config, None);

    assert!(matches!(result, Err(OrchestratorError::Rule(_))));
}
