//! Custom assertion helpers for integration tests.

use ol_protocol::agent_models::AgentKind;
use ol_protocol::events::{AnalysisState, Event};
use ol_protocol::response_models::{AnalysisResponse, SUMMARY_DELIMITER};
use ol_protocol::warning_models::Severity;

/// Assert one result per expected agent, in that order.
#[allow(dead_code)]
pub fn assert_canonical_order(response: &AnalysisResponse, expected: &[AgentKind]) {
    let names: Vec<AgentKind> = response.responses.iter().map(|r| r.agent_name).collect();
    assert_eq!(names, expected, "responses are not in canonical order");
}

/// Split an overall summary into its `"<AgentName>: <summary>"` segments.
#[allow(dead_code)]
pub fn summary_segments(summary: &str) -> Vec<&str> {
    summary.split(SUMMARY_DELIMITER).collect()
}

/// Assert warnings are sorted most severe first.
#[allow(dead_code)]
pub fn assert_severity_ordered(response: &AnalysisResponse) {
    let severities: Vec<Severity> = response.warnings.iter().map(|w| w.severity).collect();
    let mut sorted = severities.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(severities, sorted, "warnings are not ordered by severity");
}

/// Assert the lifecycle of one analysis:
///
/// 1. `StatusUpdate(Pending)` comes first
/// 2. one `AgentFinished` per agent, in `agents` order
/// 3. `warning_count` `WarningRaised` events
/// 4. `StatusUpdate(Complete)` comes last
///
/// All events must carry the same request id.
#[allow(dead_code)]
pub fn assert_event_sequence(events: &[Event], agents: &[AgentKind], warning_count: usize) {
    assert_eq!(
        events.len(),
        agents.len() + warning_count + 2,
        "unexpected number of events: {:?}",
        events
    );

    assert!(
        matches!(events[0], Event::StatusUpdate { state: AnalysisState::Pending, .. }),
        "First event should be StatusUpdate(Pending), got: {:?}",
        events[0]
    );

    for (event, expected) in events[1..=agents.len()].iter().zip(agents) {
        assert!(
            matches!(event, Event::AgentFinished { agent, .. } if agent == expected),
            "Expected AgentFinished for {expected}, got: {event:?}"
        );
    }

    for event in &events[agents.len() + 1..events.len() - 1] {
        assert!(
            matches!(event, Event::WarningRaised { .. }),
            "Expected WarningRaised, got: {event:?}"
        );
    }

    let last = &events[events.len() - 1];
    assert!(
        matches!(last, Event::StatusUpdate { state: AnalysisState::Complete, .. }),
        "Last event should be StatusUpdate(Complete), got: {:?}",
        last
    );

    let request_id = events[0].request_id();
    assert!(events.iter().all(|e| e.request_id() == request_id));
}
