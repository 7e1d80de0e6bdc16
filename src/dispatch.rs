//! Intent-driven specialist dispatch
//!
//! RetrievalQA and FrameworkSearch are independent and run concurrently when
//! both are requested. CodeGen always runs after both have settled because it
//! may consume their answers as context. Failed results stay in the output
//! map; composition decides how to surface them.

use std::collections::BTreeMap;

use crate::intent::Intent;
use crate::specialists::{
    CodeGenerator, FrameworkSpecialist, RetrievalQaAgent, SpecialistKind, SpecialistResult,
};

/// Fans one query out to the specialists the intent asks for
pub struct Dispatcher {
    retrieval: RetrievalQaAgent,
    framework: FrameworkSpecialist,
    codegen: CodeGenerator,
}

impl Dispatcher {
    pub fn new(
        retrieval: RetrievalQaAgent,
        framework: FrameworkSpecialist,
        codegen: CodeGenerator,
    ) -> Self {
        Self {
            retrieval,
            framework,
            codegen,
        }
    }

    /// Run the requested specialists and collect every result, including
    /// failed ones. An intent requesting nothing yields an empty map.
    pub async fn route(
        &self,
        query: &str,
        intent: &Intent,
    ) -> BTreeMap<SpecialistKind, SpecialistResult> {
        let mut results = BTreeMap::new();

        match (intent.needs_docs, intent.needs_framework) {
            (true, true) => {
                let (docs, framework) = tokio::join!(
                    self.retrieval.query(query),
                    self.framework
                        .query(intent.framework_name.as_deref(), query)
                );
                results.insert(SpecialistKind::RetrievalQa, docs);
                results.insert(SpecialistKind::FrameworkSearch, framework);
            }
            (true, false) => {
                results.insert(SpecialistKind::RetrievalQa, self.retrieval.query(query).await);
            }
            (false, true) => {
                results.insert(
                    SpecialistKind::FrameworkSearch,
                    self.framework
                        .query(intent.framework_name.as_deref(), query)
                        .await,
                );
            }
            (false, false) => {}
        }

        if intent.needs_code {
            let docs_context = successful_answer(&results, SpecialistKind::RetrievalQa);
            let framework_context = successful_answer(&results, SpecialistKind::FrameworkSearch);
            let code = self
                .codegen
                .generate(query, docs_context, framework_context)
                .await;
            results.insert(SpecialistKind::CodeGen, code);
        }

        tracing::debug!(specialists = results.len(), "dispatch settled");
        results
    }
}

/// A predecessor's answer for CodeGen context: the empty string when it was
/// not invoked or did not succeed, so prompt construction stays stable.
fn successful_answer(
    results: &BTreeMap<SpecialistKind, SpecialistResult>,
    kind: SpecialistKind,
) -> &str {
    results
        .get(&kind)
        .filter(|r| r.success)
        .map(|r| r.answer.as_str())
        .unwrap_or("")
}
