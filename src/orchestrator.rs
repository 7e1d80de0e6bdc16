//! The one public operation: classify, dispatch, compose
//!
//! `handle()` never raises: every stage recovers locally, and anything that
//! still escapes is converted into a fixed generic reply at this boundary.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::capabilities::{Classifier, Generator, Retriever, WebSearch};
use crate::compose;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::intent::{Intent, IntentClassifier};
use crate::specialists::{
    CodeGenerator, FrameworkSpecialist, RetrievalQaAgent, SpecialistKind, SpecialistResult,
};

/// Reply returned when an unexpected error escapes the pipeline
pub const ERROR_REPLY: &str =
    "An error occurred while handling your question. Please try rephrasing it.";

/// Everything one request produced
#[derive(Debug, Serialize)]
pub struct Reply {
    pub final_text: String,
    pub intent: Intent,
    pub results: BTreeMap<SpecialistKind, SpecialistResult>,
    pub success: bool,
}

/// Request pipeline: intent classification, specialist dispatch, response
/// composition. Holds only capabilities and read-only configuration, so
/// concurrent requests are independent.
pub struct Orchestrator {
    intents: IntentClassifier,
    dispatcher: Dispatcher,
}

impl Orchestrator {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        retriever: Arc<dyn Retriever>,
        web_search: Arc<dyn WebSearch>,
        generator: Arc<dyn Generator>,
        config: &Config,
    ) -> Self {
        let retrieval = RetrievalQaAgent::new(retriever, generator.clone(), config.top_k);
        let framework =
            FrameworkSpecialist::new(web_search, generator.clone(), config.max_web_results);
        let codegen = CodeGenerator::new(generator);
        Self {
            intents: IntentClassifier::new(classifier),
            dispatcher: Dispatcher::new(retrieval, framework, codegen),
        }
    }

    /// Handle one query end to end. Never returns an error to the caller.
    pub async fn handle(&self, query: &str) -> Reply {
        match self.run(query).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "request pipeline failed");
                Reply {
                    final_text: ERROR_REPLY.to_string(),
                    intent: Intent::fallback(),
                    results: BTreeMap::new(),
                    success: false,
                }
            }
        }
    }

    async fn run(&self, query: &str) -> Result<Reply> {
        let intent = self.intents.classify(query).await;
        tracing::debug!(?intent, "classified query");

        let results = self.dispatcher.route(query, &intent).await;
        let final_text = compose::compose(&results);

        Ok(Reply {
            final_text,
            intent,
            results,
            success: true,
        })
    }
}
