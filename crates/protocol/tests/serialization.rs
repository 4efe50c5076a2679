use ol_protocol::*;

#[test]
fn test_request_deserialization_with_defaults() {
    let json = r#"{ "user_id": "demo-user", "goals": ["weight management"] }"#;

    let request: AgentRequest = serde_json::from_str(json).expect("Failed to deserialize AgentRequest");

    assert_eq!(request.user_id, "demo-user");
    assert!(request.symptoms.is_empty());
    assert_eq!(request.goals, vec!["weight management".to_string()]);
    assert_eq!(request.lifestyle_notes, None);
}

#[test]
fn test_request_rejects_missing_user_id() {
    let json = r#"{ "symptoms": ["fatigue"] }"#;
    let result: Result<AgentRequest, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_agent_kind_uses_display_name_on_the_wire() {
    let json = serde_json::to_value(AgentKind::HealthButler).expect("Failed to serialize AgentKind");
    assert_eq!(json, "HealthButlerAgent");

    let from_display: AgentKind = serde_json::from_str("\"MedicationAgent\"").expect("display name");
    assert_eq!(from_display, AgentKind::Medication);

    let from_slug: AgentKind = serde_json::from_str("\"exercise\"").expect("slug alias");
    assert_eq!(from_slug, AgentKind::Exercise);
}

#[test]
fn test_agent_kind_parse() {
    assert_eq!(AgentKind::parse("Health-Butler"), Some(AgentKind::HealthButler));
    assert_eq!(AgentKind::parse(" nutritionagent "), Some(AgentKind::Nutrition));
    assert_eq!(AgentKind::parse("pharmacy"), None);
}

#[test]
fn test_agent_result_serialization_omits_error_detail_when_ok() {
    let result = AgentResult::ok(
        AgentKind::Nutrition,
        "Balanced plate",
        vec!["Stay hydrated and limit sugary beverages.".to_string()],
    );

    let json = serde_json::to_value(&result).expect("Failed to serialize AgentResult");
    assert_eq!(json["agent_name"], "NutritionAgent");
    assert_eq!(json["status"], "OK");
    assert!(json.get("error_detail").is_none());
}

#[test]
fn test_agent_result_failure_carries_error_detail() {
    let timed_out = AgentResult::timed_out(AgentKind::Exercise, "no answer within 50ms");

    let json = serde_json::to_value(&timed_out).expect("Failed to serialize AgentResult");
    assert_eq!(json["status"], "TIMED_OUT");
    assert_eq!(json["error_detail"], "no answer within 50ms");
    assert_eq!(json["summary"], "");

    let deserialized: AgentResult = serde_json::from_value(json).expect("Failed to deserialize AgentResult");
    assert_eq!(deserialized, timed_out);
    assert!(!deserialized.is_ok());
}

#[test]
fn test_severity_ordering_and_serialization() {
    assert!(Severity::Emergency > Severity::Urgent);
    assert!(Severity::Urgent > Severity::Info);

    let json = serde_json::to_value(Severity::Emergency).expect("Failed to serialize Severity");
    assert_eq!(json, "EMERGENCY");

    let source = serde_json::to_value(WarningSource::AgentOutputScan).expect("Failed to serialize source");
    assert_eq!(source, "agent_output_scan");
}

#[test]
fn test_warning_rule_def_from_yaml() {
    let yaml_str = r#"
- name: dizziness
  scope: symptoms
  pattern: dizzy
  text: Persistent dizziness should be reviewed by a clinician.
  severity: URGENT
- name: blood-pressure
  scope: agent_output
  match: regex
  pattern: 'blood pressure (above|over) \d+'
  text: Very high blood pressure readings need prompt review.
  severity: EMERGENCY
"#;

    let rules: Vec<WarningRuleDef> = serde_yaml::from_str(yaml_str).expect("Failed to deserialize rules");

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].match_mode, MatchMode::Contains);
    assert_eq!(rules[0].scope, RuleScope::Symptoms);
    assert_eq!(rules[1].match_mode, MatchMode::Regex);
    assert_eq!(rules[1].scope.source(), WarningSource::AgentOutputScan);
    assert_eq!(rules[1].severity, Severity::Emergency);
}

#[test]
fn test_global_config_defaults_from_empty_toml() {
    let config: GlobalConfig = toml::from_str("").expect("Failed to parse empty config");

    assert_eq!(config, GlobalConfig::default());
    assert_eq!(config.agents, AgentKind::CANONICAL.to_vec());
    assert_eq!(config.agent_timeout_ms, DEFAULT_AGENT_TIMEOUT_MS);
    assert!(config.builtin_rules);
    assert!(config.backend.is_none());
}

#[test]
fn test_global_config_with_backend() {
    let toml_str = r#"
agents = ["medication", "nutrition"]
agent_timeout_ms = 2500

[backend]
command = "ollama"
args = ["run", "llama3.2"]
"#;

    let config: GlobalConfig = toml::from_str(toml_str).expect("Failed to parse config");

    assert_eq!(config.agents, vec![AgentKind::Medication, AgentKind::Nutrition]);
    assert_eq!(config.agent_timeout_ms, 2500);
    let backend = config.backend.expect("backend section");
    assert_eq!(backend.command, "ollama");
    assert_eq!(backend.args.len(), 2);
    assert_eq!(backend.max_concurrent_calls, DEFAULT_MAX_CONCURRENT_CALLS);
}

#[test]
fn test_response_serialization() {
    let response = AnalysisResponse {
        user_id: "demo-user".to_string(),
        overall_summary: NO_RECOMMENDATIONS.to_string(),
        warnings: vec![Warning {
            text: "Chest pain requires immediate evaluation.".to_string(),
            severity: Severity::Emergency,
            source: WarningSource::RequestScan,
        }],
        responses: vec![AgentResult::failed(AgentKind::HealthButler, "backend unavailable")],
    };

    let json = serde_json::to_string(&response).expect("Failed to serialize AnalysisResponse");
    let deserialized: AnalysisResponse = serde_json::from_str(&json).expect("Failed to deserialize AnalysisResponse");

    assert_eq!(deserialized, response);
    assert_eq!(deserialized.max_severity(), Some(Severity::Emergency));
}

#[test]
fn test_event_enum_serialization() {
    use uuid::Uuid;

    let event = Event::AgentFinished {
        request_id: Uuid::new_v4(),
        agent: AgentKind::Nutrition,
        status: AgentStatus::TimedOut,
    };

    let json = serde_json::to_value(&event).expect("Failed to serialize Event");
    assert_eq!(json["type"], "agentFinished");
    assert_eq!(json["payload"]["status"], "TIMED_OUT");

    let status_update = Event::StatusUpdate {
        request_id: Uuid::new_v4(),
        state: AnalysisState::Complete,
    };
    let json = serde_json::to_value(&status_update).expect("Failed to serialize Event");
    assert_eq!(json["type"], "statusUpdate");
    assert_eq!(json["payload"]["state"], "COMPLETE");
}
