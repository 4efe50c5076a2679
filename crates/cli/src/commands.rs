//! Subcommand implementations.

use crate::render;
use clap::Args;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use colored::Colorize;
use ol_core::agents::SharedBackend;
use ol_core::config::{load_config, AppConfig};
use ol_core::init::{scaffold_config_dir, InitOptions};
use ol_core::warnings::WarningDetector;
use ol_core::OrchestratorBuilder;
use ol_protocol::request_models::AgentRequest;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// User the advice is for. Overrides the id in --input.
    #[arg(long, required_unless_present = "input")]
    pub user_id: Option<String>,

    /// A current symptom. Repeatable.
    #[arg(long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// A health goal. Repeatable.
    #[arg(long = "goal", value_name = "GOAL")]
    pub goals: Vec<String>,

    /// Free-form lifestyle notes.
    #[arg(long)]
    pub notes: Option<String>,

    /// Read the request from a JSON file; flags above are merged into it.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Per-agent timeout, overriding config.toml.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print the response as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    fn into_request(self) -> Result<AgentRequest> {
        let mut request = match &self.input {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading request from {}", path.display()))?;
                serde_json::from_str::<AgentRequest>(&raw)
                    .wrap_err_with(|| format!("parsing request from {}", path.display()))?
            }
            None => AgentRequest::new(""),
        };

        if let Some(user_id) = self.user_id {
            request.user_id = user_id;
        }
        request.symptoms.extend(self.symptoms);
        request.goals.extend(self.goals);
        if self.notes.is_some() {
            request.lifestyle_notes = self.notes;
        }
        Ok(request)
    }
}

async fn load(root: &Path) -> Result<AppConfig> {
    load_config(root)
        .await
        .wrap_err_with(|| format!("loading configuration from {}", root.display()))
}

pub async fn analyze(root: &Path, args: AnalyzeArgs) -> Result<()> {
    let config = load(root).await?;
    let json = args.json;
    let timeout = args.timeout_ms;
    let request = args.into_request()?;

    let backend = config.global.backend.as_ref().map(SharedBackend::from_config);
    let mut builder = OrchestratorBuilder::from_config(&config, backend.as_ref())?;
    if let Some(ms) = timeout {
        if ms == 0 {
            return Err(eyre!("--timeout-ms must be greater than zero"));
        }
        builder = builder.timeout(Duration::from_millis(ms));
    }
    let orchestrator = builder.build()?;
    debug!(agents = orchestrator.agent_kinds().len(), "orchestrator ready");

    let outcome = orchestrator.analyze(request).await;
    if let Some(backend) = &backend {
        backend.close();
    }
    let response = outcome?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render::report(&response));
    }
    Ok(())
}

pub async fn agents(root: &Path) -> Result<()> {
    let config = load(root).await?;

    for kind in &config.global.agents {
        let description = config
            .profile_for(*kind)
            .map(|profile| profile.description.as_str())
            .filter(|description| !description.is_empty())
            .unwrap_or("built-in profile");
        println!("{:<20} {:<14} {}", kind.display_name().bold(), kind.slug(), description);
    }

    match &config.global.backend {
        Some(backend_config) => {
            let backend = SharedBackend::from_config(backend_config);
            let status = if backend.check_availability().await {
                "available".green()
            } else {
                "not found".red()
            };
            println!("\nbackend: {} ({status})", backend.name());
            backend.close();
        }
        None => println!("\nbackend: none (rule tables only)"),
    }
    Ok(())
}

pub async fn rules(root: &Path) -> Result<()> {
    let config = load(root).await?;
    let detector = WarningDetector::from_defs(&config.warning_rules())?;

    if detector.is_empty() {
        println!("No warning rules are active.");
        return Ok(());
    }
    let defs: Vec<_> = detector.rules().iter().map(|rule| rule.def()).collect();
    print!("{}", render::rule_table(&defs));
    Ok(())
}

pub async fn init(root: &Path, force: bool, minimal: bool) -> Result<()> {
    let written = scaffold_config_dir(InitOptions {
        target_dir: root.to_path_buf(),
        force,
        minimal,
    })
    .await?;

    for path in &written {
        println!("{} {}", "created".green(), path.display());
    }
    Ok(())
}
