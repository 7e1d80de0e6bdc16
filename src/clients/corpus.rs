//! Local-corpus retriever
//!
//! Minimal `Retriever` over a directory of markdown/text files: each blank-
//! line-separated paragraph is one passage, ranked by string similarity to
//! the query. Index construction proper (embeddings, vector stores) lives
//! outside this crate; this keeps the binary runnable against plain files.

use std::fs;
use std::path::Path;

use async_trait::async_trait;

use crate::capabilities::{Passage, Retriever};
use crate::error::Result;

/// Paragraphs shorter than this are noise (headings, separators)
const MIN_PASSAGE_LEN: usize = 40;

pub struct CorpusRetriever {
    passages: Vec<Passage>,
    document_count: usize,
}

impl CorpusRetriever {
    /// Load every `.md` and `.txt` file under `dir`. A missing or empty
    /// directory produces a retriever that reports not-ready rather than an
    /// error, matching the "index still building" contract.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut passages = Vec::new();
        let mut document_count = 0;

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "docs directory not readable");
                return Ok(Self {
                    passages,
                    document_count,
                });
            }
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let is_doc = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == "md" || e == "txt");
            if !is_doc {
                continue;
            }

            // Lenient like the missing-directory case: a doc we cannot read
            // (or a directory named *.md) is skipped, not fatal.
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable doc file");
                    continue;
                }
            };
            let source_id = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            document_count += 1;

            // "Page" for a flat file is the 1-based paragraph ordinal.
            for (i, paragraph) in content.split("\n\n").enumerate() {
                let text = paragraph.trim();
                if text.len() < MIN_PASSAGE_LEN {
                    continue;
                }
                passages.push(Passage {
                    text: text.to_string(),
                    page: (i + 1).to_string(),
                    source_id: source_id.clone(),
                });
            }
        }

        tracing::debug!(
            documents = document_count,
            passages = passages.len(),
            "loaded documentation corpus"
        );
        Ok(Self {
            passages,
            document_count,
        })
    }
}

#[async_trait]
impl Retriever for CorpusRetriever {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<Passage>> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, &Passage)> = self
            .passages
            .iter()
            .map(|p| (strsim::sorensen_dice(&query, &p.text.to_lowercase()), p))
            .filter(|(score, _)| *score > 0.05)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, p)| p.clone())
            .collect())
    }

    fn is_ready(&self) -> bool {
        !self.passages.is_empty()
    }

    fn document_count(&self) -> usize {
        self.document_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retriever_with(passages: Vec<Passage>) -> CorpusRetriever {
        CorpusRetriever {
            document_count: 1,
            passages,
        }
    }

    #[tokio::test]
    async fn ranks_closer_passages_first() {
        let retriever = retriever_with(vec![
            Passage {
                text: "Completely unrelated paragraph about photography and lenses.".into(),
                page: "1".into(),
                source_id: "a.md".into(),
            },
            Passage {
                text: "To track usage costs, call the metering client with a metric name.".into(),
                page: "2".into(),
                source_id: "a.md".into(),
            },
        ]);
        let hits = retriever
            .search("how do I track usage costs with the metering client", 1)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, "2");
    }

    #[tokio::test]
    async fn empty_corpus_is_not_ready() {
        let retriever = retriever_with(vec![]);
        assert!(!retriever.is_ready());
        assert_eq!(retriever.document_count(), 1);
    }

    #[test]
    fn unreadable_entries_are_skipped_not_fatal() {
        let base = std::env::temp_dir().join(format!("doc-mind-corpus-{}", std::process::id()));
        let _ = fs::remove_dir_all(&base);
        // A directory named like a doc file is unreadable as text.
        fs::create_dir_all(base.join("nested.md")).unwrap();
        fs::write(
            base.join("real.md"),
            "A paragraph long enough to count as a documentation passage.",
        )
        .unwrap();

        let retriever = CorpusRetriever::load(&base).unwrap();
        assert!(retriever.is_ready());
        assert_eq!(retriever.document_count(), 1);

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn missing_directory_loads_as_not_ready() {
        let retriever = CorpusRetriever::load(Path::new("/nonexistent/docs/dir")).unwrap();
        assert!(!retriever.is_ready());
    }
}
