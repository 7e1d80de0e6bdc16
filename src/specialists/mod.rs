//! Specialist handlers and their shared result contract
//!
//! Every specialist returns the same [`SpecialistResult`] by value; failures
//! are states of the result, never errors thrown across the dispatch
//! boundary.

pub mod codegen;
pub mod framework;
pub mod retrieval;

use serde::Serialize;

pub use codegen::CodeGenerator;
pub use framework::{Framework, FrameworkSpecialist};
pub use retrieval::RetrievalQaAgent;

/// The three specialist kinds, declared in composition priority order so the
/// derived `Ord` is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistKind {
    RetrievalQa,
    FrameworkSearch,
    CodeGen,
}

/// Provenance of one piece of evidence. A specialist's source list is always
/// homogeneous: document sources for retrieval, web sources for search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Source {
    Document { page: String, document_id: String },
    Web { title: String, url: String, score: f32 },
}

/// One specialist's partial answer.
///
/// Unused text fields are empty strings, never absent, so renderers do not
/// need to distinguish missing from empty. `success == false` implies
/// `answer` holds a human-readable message and `sources` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialistResult {
    pub kind: SpecialistKind,
    pub answer: String,
    pub code: String,
    pub explanation: String,
    pub cost_estimate: String,
    pub caveats: String,
    pub sources: Vec<Source>,
    pub success: bool,
    pub error: Option<String>,
}

impl SpecialistResult {
    fn blank(kind: SpecialistKind) -> Self {
        Self {
            kind,
            answer: String::new(),
            code: String::new(),
            explanation: String::new(),
            cost_estimate: String::new(),
            caveats: String::new(),
            sources: Vec::new(),
            success: true,
            error: None,
        }
    }

    /// Successful answer with its evidence
    pub fn answered(kind: SpecialistKind, answer: String, sources: Vec<Source>) -> Self {
        Self {
            answer,
            sources,
            ..Self::blank(kind)
        }
    }

    /// Precondition unmet (index not built, search quota exhausted):
    /// a user-facing warning, not an error.
    pub fn unavailable(kind: SpecialistKind, message: impl Into<String>) -> Self {
        Self {
            answer: message.into(),
            success: false,
            ..Self::blank(kind)
        }
    }

    /// A capability call failed; the error is captured, not rethrown.
    pub fn failed(kind: SpecialistKind, message: impl Into<String>, error: String) -> Self {
        Self {
            answer: message.into(),
            success: false,
            error: Some(error),
            ..Self::blank(kind)
        }
    }
}
