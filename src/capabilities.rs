//! Capability interfaces the pipeline is built against
//!
//! Each external dependency (LLM classification, passage retrieval, web
//! search, answer generation) is an object-safe trait constructed once at
//! process start and passed down by reference. Specialists never talk to the
//! network themselves; they only see these traits, which keeps every branch
//! of the pipeline testable with fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A retrieved chunk of reference text with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
    /// Page reference inside the source document ("12", "?" when unknown)
    pub page: String,
    /// Identifier of the backing document
    pub source_id: String,
}

/// One web search hit, in rank order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub score: f32,
}

/// Produces the raw intent-classification response for a user query
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, query: &str) -> Result<String>;
}

/// Ranked passage retrieval over the indexed documentation
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<Passage>>;

    /// Whether the backing index has been built and can be queried
    fn is_ready(&self) -> bool;

    fn document_count(&self) -> usize;
}

/// Web search restricted to an optional set of preferred domains
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(
        &self,
        query: &str,
        domain_hints: Option<&[&str]>,
        max_results: usize,
    ) -> Result<Vec<WebHit>>;
}

/// Single-shot text generation, used by every specialist
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}
