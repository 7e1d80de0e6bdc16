//! Retrieval-augmented documentation QA

use std::sync::Arc;

use crate::capabilities::{Generator, Passage, Retriever};
use crate::prompts;
use crate::specialists::{Source, SpecialistKind, SpecialistResult};

/// Warning returned while the backing index is still being built
pub const NOT_INDEXED: &str =
    "Documentation is not yet indexed. Please wait for indexing to complete.";

/// Warning returned when retrieval produced zero passages
pub const NO_MATCH: &str =
    "I couldn't find relevant information in the indexed documentation for this question.";

/// Answers questions from the indexed documentation: retrieve top-k passages,
/// synthesize one cited answer.
pub struct RetrievalQaAgent {
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn Generator>,
    top_k: usize,
}

impl RetrievalQaAgent {
    pub fn new(retriever: Arc<dyn Retriever>, generator: Arc<dyn Generator>, top_k: usize) -> Self {
        Self {
            retriever,
            generator,
            top_k,
        }
    }

    pub async fn query(&self, question: &str) -> SpecialistResult {
        let kind = SpecialistKind::RetrievalQa;

        if !self.retriever.is_ready() {
            return SpecialistResult::unavailable(kind, NOT_INDEXED);
        }

        let passages = match self.retriever.search(question, self.top_k).await {
            Ok(passages) => passages,
            Err(e) => {
                tracing::warn!(error = %e, "passage retrieval failed");
                return SpecialistResult::failed(
                    kind,
                    format!("Error querying the documentation: {}", e),
                    e.to_string(),
                );
            }
        };

        // Zero evidence: refuse to synthesize rather than hallucinate.
        if passages.is_empty() {
            return SpecialistResult::unavailable(kind, NO_MATCH);
        }

        tracing::debug!(
            passages = passages.len(),
            documents = self.retriever.document_count(),
            "retrieved documentation context"
        );

        let context = build_context(&passages);
        let prompt = prompts::retrieval_qa(&context, question);
        match self
            .generator
            .generate(prompts::RETRIEVAL_SYSTEM, &prompt)
            .await
        {
            Ok(answer) => {
                let sources = passages
                    .into_iter()
                    .map(|p| Source::Document {
                        page: p.page,
                        document_id: p.source_id,
                    })
                    .collect();
                SpecialistResult::answered(kind, answer, sources)
            }
            Err(e) => SpecialistResult::failed(
                kind,
                format!("Error answering from the documentation: {}", e),
                e.to_string(),
            ),
        }
    }
}

/// Concatenate passages in relevance order, each under an explicit citation
/// marker the synthesis prompt tells the model to reference.
fn build_context(passages: &[Passage]) -> String {
    let mut context = String::new();
    for (i, passage) in passages.iter().enumerate() {
        context.push_str(&format!(
            "[Source {} - Page {}]\n{}\n\n",
            i + 1,
            passage.page,
            passage.text.trim()
        ));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_carries_citation_markers_in_order() {
        let passages = vec![
            Passage {
                text: "first".into(),
                page: "3".into(),
                source_id: "doc".into(),
            },
            Passage {
                text: "second".into(),
                page: "9".into(),
                source_id: "doc".into(),
            },
        ];
        let context = build_context(&passages);
        let first = context.find("[Source 1 - Page 3]").unwrap();
        let second = context.find("[Source 2 - Page 9]").unwrap();
        assert!(first < second);
        assert!(context.contains("first"));
        assert!(context.contains("second"));
    }
}
