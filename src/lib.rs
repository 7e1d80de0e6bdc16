//! doc-mind: intent-routed documentation assistant
//!
//! One query goes through three stages: intent classification, specialist
//! dispatch (retrieval QA, framework web search, code generation), and
//! deterministic composition of the partial answers into one response.
//! External dependencies are injected as capability traits; see
//! [`orchestrator::Orchestrator::handle`] for the single entry point.

pub mod capabilities;
pub mod clients;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod orchestrator;
pub mod prompts;
pub mod sections;
pub mod specialists;

// Loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
