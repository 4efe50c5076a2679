//! Agent variant implementations.

mod exercise;
mod health_butler;
mod medication;
pub mod mock_agent;
mod nutrition;

pub use exercise::ExerciseAgent;
pub use health_butler::HealthButlerAgent;
pub use medication::{MedicationAgent, RED_FLAG_SYMPTOMS};
pub use mock_agent::MockAgent;
pub use nutrition::NutritionAgent;
