//! Test fixtures for requests and configuration directories.

use ol_protocol::request_models::AgentRequest;
use tempfile::TempDir;

/// The request from the product quick start.
#[allow(dead_code)]
pub fn demo_request() -> AgentRequest {
    AgentRequest::new("demo-user")
        .with_symptom("fatigue")
        .with_goal("weight management")
        .with_lifestyle_notes("prefers evening workouts")
}

#[allow(dead_code)]
pub fn chest_pain_request() -> AgentRequest {
    AgentRequest::new("demo-user").with_symptom("chest pain")
}

/// Create a temporary project with a `.openlinkage/` directory.
///
/// `config_toml` is written as `config.toml`; each `(file, yaml)` pair in
/// `rule_files` is written under `rules/`.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str, rule_files: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let ol_dir = temp_dir.path().join(".openlinkage");

    std::fs::create_dir_all(ol_dir.join("agents"))?;
    std::fs::create_dir_all(ol_dir.join("rules"))?;
    std::fs::write(ol_dir.join("config.toml"), config_toml)?;

    for (file, yaml) in rule_files {
        std::fs::write(ol_dir.join("rules").join(file), yaml)?;
    }

    std::fs::write(
        ol_dir.join("agents/exercise.md"),
        "---\nagent: exercise\ndescription: Activity planning\n---\n\nYou are a cautious coach.\n",
    )?;

    Ok(temp_dir)
}
