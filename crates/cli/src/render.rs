//! Human-readable terminal output.

use colored::{ColoredString, Colorize};
use ol_protocol::agent_models::{AgentResult, AgentStatus};
use ol_protocol::response_models::AnalysisResponse;
use ol_protocol::warning_models::{Severity, WarningRuleDef};
use std::fmt::Write;

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Emergency => "EMERGENCY".red().bold(),
        Severity::Urgent => "URGENT".yellow().bold(),
        Severity::Info => "INFO".cyan(),
    }
}

fn status_label(status: AgentStatus) -> ColoredString {
    match status {
        AgentStatus::Ok => "ok".green(),
        AgentStatus::Failed => "failed".red(),
        AgentStatus::TimedOut => "timed out".yellow(),
    }
}

/// Warnings first, then the overall summary, then each agent's outcome.
pub fn report(response: &AnalysisResponse) -> String {
    let mut out = String::new();

    if !response.warnings.is_empty() {
        let _ = writeln!(out, "{}", "Warnings".bold().underline());
        for warning in &response.warnings {
            let _ = writeln!(out, "  [{}] {}", severity_label(warning.severity), warning.text);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "Summary".bold().underline());
    let _ = writeln!(out, "  {}", response.overall_summary);
    out.push('\n');

    let _ = writeln!(out, "{}", "Agents".bold().underline());
    for result in &response.responses {
        agent_section(&mut out, result);
    }

    out
}

fn agent_section(out: &mut String, result: &AgentResult) {
    let _ = writeln!(
        out,
        "  {} ({})",
        result.agent_name.display_name().bold(),
        status_label(result.status)
    );
    match result.status {
        AgentStatus::Ok => {
            let _ = writeln!(out, "    {}", result.summary);
            for recommendation in &result.recommendations {
                let _ = writeln!(out, "    - {recommendation}");
            }
        }
        _ => {
            if let Some(detail) = &result.error_detail {
                let _ = writeln!(out, "    {}", detail.dimmed());
            }
        }
    }
}

/// One line per rule, in registration order.
pub fn rule_table(rules: &[&WarningRuleDef]) -> String {
    let mut out = String::new();
    for (i, def) in rules.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<22} {:<10} {:<16} {}",
            i + 1,
            def.name,
            severity_label(def.severity),
            format!("{:?}", def.scope).to_lowercase(),
            def.text
        );
    }
    out
}
