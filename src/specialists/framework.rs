//! Framework QA backed by web search
//!
//! The framework name arrives from the classifier and is untrusted: lookup is
//! a closed enum with a hard fallback to `Generic`, never an error.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::capabilities::{Generator, WebHit, WebSearch};
use crate::prompts;
use crate::specialists::{Source, SpecialistKind, SpecialistResult};

/// Snippet cap applied before synthesis
const SNIPPET_MAX_LEN: usize = 500;

/// Regex for sentence boundary detection
static SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[.!?]["”']?\s"#).unwrap());

/// The closed set of frameworks with dedicated search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    LangChain,
    LlamaIndex,
    CrewAi,
    AutoGen,
    Haystack,
    Generic,
}

impl Framework {
    /// Case-folded, trimmed lookup. Unknown, empty, or absent names all map
    /// to `Generic`.
    pub fn lookup(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("langchain") => Framework::LangChain,
            Some("llamaindex") => Framework::LlamaIndex,
            Some("crewai") => Framework::CrewAi,
            Some("autogen") => Framework::AutoGen,
            Some("haystack") => Framework::Haystack,
            _ => Framework::Generic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Framework::LangChain => "langchain",
            Framework::LlamaIndex => "llamaindex",
            Framework::CrewAi => "crewai",
            Framework::AutoGen => "autogen",
            Framework::Haystack => "haystack",
            Framework::Generic => "generic",
        }
    }

    /// Preferred domains for search, when the framework has official docs we
    /// know about.
    pub fn domain_hints(self) -> Option<&'static [&'static str]> {
        match self {
            Framework::LangChain => Some(&["python.langchain.com", "github.com/langchain-ai"]),
            Framework::LlamaIndex => Some(&["docs.llamaindex.ai", "github.com/run-llama"]),
            Framework::CrewAi => Some(&["docs.crewai.com", "github.com/joaomdmoura/crewai"]),
            Framework::AutoGen => {
                Some(&["microsoft.github.io/autogen", "github.com/microsoft/autogen"])
            }
            Framework::Haystack => {
                Some(&["docs.haystack.deepset.ai", "github.com/deepset-ai/haystack"])
            }
            Framework::Generic => None,
        }
    }
}

/// Answers framework questions from fresh web search results
pub struct FrameworkSpecialist {
    web_search: Arc<dyn WebSearch>,
    generator: Arc<dyn Generator>,
    max_results: usize,
}

impl FrameworkSpecialist {
    pub fn new(
        web_search: Arc<dyn WebSearch>,
        generator: Arc<dyn Generator>,
        max_results: usize,
    ) -> Self {
        Self {
            web_search,
            generator,
            max_results,
        }
    }

    pub async fn query(&self, framework_name: Option<&str>, question: &str) -> SpecialistResult {
        let kind = SpecialistKind::FrameworkSearch;
        let framework = Framework::lookup(framework_name);
        tracing::debug!(framework = framework.label(), "routing framework query");

        let search_query = format!("{} {}", framework.label(), question);
        let hits = match self
            .web_search
            .search(&search_query, framework.domain_hints(), self.max_results)
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, framework = framework.label(), "web search failed");
                return SpecialistResult::failed(
                    kind,
                    format!("Error searching for {} information: {}", framework.label(), e),
                    e.to_string(),
                );
            }
        };

        if hits.is_empty() {
            return SpecialistResult::unavailable(kind, quota_warning(framework));
        }

        let context = combined_context(&hits);
        let prompt = prompts::framework_answer(framework.label(), &context, question);
        let system = format!("You are a {} expert.", framework.label());
        match self.generator.generate(&system, &prompt).await {
            Ok(answer) => {
                let sources = hits
                    .into_iter()
                    .map(|h| Source::Web {
                        title: h.title,
                        url: h.url,
                        score: h.score,
                    })
                    .collect();
                SpecialistResult::answered(kind, answer, sources)
            }
            Err(e) => SpecialistResult::failed(
                kind,
                format!("Error answering the {} question: {}", framework.label(), e),
                e.to_string(),
            ),
        }
    }
}

/// Warning returned when search comes back empty
pub fn quota_warning(framework: Framework) -> String {
    format!(
        "Couldn't find information about {}. Web search quota may be exceeded.",
        framework.label()
    )
}

/// Combine hits into one context string, preserving rank order
fn combined_context(hits: &[WebHit]) -> String {
    let mut context = String::new();
    for hit in hits {
        let mut snippet = hit.snippet.trim().to_string();
        cap_snippet(&mut snippet, SNIPPET_MAX_LEN);
        context.push_str(&format!("Source: {} ({})\n{}\n\n", hit.title, hit.url, snippet));
    }
    context
}

/// Cap a snippet, preferring a sentence boundary inside the limit
fn cap_snippet(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }

    let mut cut = 0;
    for mat in SENTENCE_REGEX.find_iter(text) {
        if mat.end() > max_len {
            break;
        }
        cut = mat.end();
    }
    if cut == 0 {
        // No sentence boundary fits: hard cut at a char boundary
        cut = max_len;
        while cut > 0 && !text.is_char_boundary(cut) {
            cut -= 1;
        }
    }
    text.truncate(cut);
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(Framework::lookup(Some("  LangChain ")), Framework::LangChain);
        assert_eq!(Framework::lookup(Some("HAYSTACK")), Framework::Haystack);
    }

    #[test]
    fn unknown_and_absent_names_fall_back_to_generic() {
        assert_eq!(Framework::lookup(Some("not-a-framework")), Framework::Generic);
        assert_eq!(Framework::lookup(Some("")), Framework::Generic);
        assert_eq!(Framework::lookup(None), Framework::Generic);
    }

    #[test]
    fn generic_has_no_domain_hints() {
        assert!(Framework::Generic.domain_hints().is_none());
        assert!(Framework::LangChain.domain_hints().is_some());
    }

    #[test]
    fn cap_snippet_prefers_sentence_boundary() {
        let mut text = format!("One sentence here. {}", "x".repeat(600));
        cap_snippet(&mut text, 500);
        assert_eq!(text, "One sentence here.");
    }

    #[test]
    fn cap_snippet_hard_cuts_without_boundary() {
        let mut text = "y".repeat(600);
        cap_snippet(&mut text, 500);
        assert_eq!(text.len(), 500);
    }

    #[test]
    fn short_snippets_are_untouched() {
        let mut text = "short".to_string();
        cap_snippet(&mut text, 500);
        assert_eq!(text, "short");
    }
}
