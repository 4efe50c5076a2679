//! Inbound analysis request.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Request payload shared by all agents.
///
/// The same request is handed read-only to every agent in a dispatch.
///
/// # Example
///
/// ```json
/// {
///   "user_id": "demo-user",
///   "symptoms": ["fatigue"],
///   "goals": ["weight management"],
///   "lifestyle_notes": "prefers evening workouts"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentRequest {
    /// Opaque identifier for the user. Must be non-empty.
    pub user_id: String,

    /// Current symptoms, in the order the user reported them.
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Health or wellness goals that guide recommendations.
    #[serde(default)]
    pub goals: Vec<String>,

    /// Optional free-form notes about routines or preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle_notes: Option<String>,
}

impl AgentRequest {
    /// Create an empty request for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            symptoms: Vec::new(),
            goals: Vec::new(),
            lifestyle_notes: None,
        }
    }

    pub fn with_symptom(mut self, symptom: impl Into<String>) -> Self {
        self.symptoms.push(symptom.into());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    pub fn with_lifestyle_notes(mut self, notes: impl Into<String>) -> Self {
        self.lifestyle_notes = Some(notes.into());
        self
    }
}
