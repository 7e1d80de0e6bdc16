//! Direct tests of the specialist result contract

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use doc_mind::capabilities::{Generator, Passage, Retriever, WebHit, WebSearch};
use doc_mind::error::{DocMindError, Result};
use doc_mind::specialists::{
    CodeGenerator, FrameworkSpecialist, RetrievalQaAgent, SpecialistKind, Source,
};

struct CapturingGenerator {
    prompts: Mutex<Vec<(String, String)>>,
    response: Result<&'static str>,
}

impl CapturingGenerator {
    fn ok(response: &'static str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            response: Ok(response),
        }
    }

    fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            response: Err(DocMindError::Generation {
                message: "rate limited".into(),
            }),
        }
    }

    fn last_user_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().unwrap().1.clone()
    }
}

#[async_trait]
impl Generator for CapturingGenerator {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        match &self.response {
            Ok(s) => Ok(s.to_string()),
            Err(e) => Err(DocMindError::Generation {
                message: e.to_string(),
            }),
        }
    }
}

struct StaticRetriever(Vec<Passage>);

#[async_trait]
impl Retriever for StaticRetriever {
    async fn search(&self, _query: &str, _top_k: usize) -> Result<Vec<Passage>> {
        Ok(self.0.clone())
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn document_count(&self) -> usize {
        1
    }
}

struct HintCapturingSearch {
    hints: Mutex<Option<Vec<String>>>,
    hits: Vec<WebHit>,
}

impl HintCapturingSearch {
    fn new(hits: Vec<WebHit>) -> Self {
        Self {
            hints: Mutex::new(None),
            hits,
        }
    }
}

#[async_trait]
impl WebSearch for HintCapturingSearch {
    async fn search(
        &self,
        _query: &str,
        domain_hints: Option<&[&str]>,
        _max_results: usize,
    ) -> Result<Vec<WebHit>> {
        *self.hints.lock().unwrap() =
            domain_hints.map(|h| h.iter().map(|s| s.to_string()).collect());
        Ok(self.hits.clone())
    }
}

fn passage(page: &str, text: &str) -> Passage {
    Passage {
        text: text.to_string(),
        page: page.to_string(),
        source_id: "sdk_docs.pdf".to_string(),
    }
}

fn hit(title: &str, url: &str, score: f32) -> WebHit {
    WebHit {
        title: title.to_string(),
        url: url.to_string(),
        snippet: format!("{title} snippet."),
        score,
    }
}

#[tokio::test]
async fn retrieval_prompt_carries_citation_markers_and_sources_keep_order() {
    let generator = Arc::new(CapturingGenerator::ok("cited answer"));
    let agent = RetrievalQaAgent::new(
        Arc::new(StaticRetriever(vec![
            passage("12", "first passage"),
            passage("34", "second passage"),
        ])),
        generator.clone(),
        5,
    );

    let result = agent.query("how do I meter costs?").await;
    assert!(result.success);
    assert_eq!(result.answer, "cited answer");

    let prompt = generator.last_user_prompt();
    assert!(prompt.contains("[Source 1 - Page 12]"));
    assert!(prompt.contains("[Source 2 - Page 34]"));

    assert_eq!(
        result.sources,
        vec![
            Source::Document {
                page: "12".into(),
                document_id: "sdk_docs.pdf".into()
            },
            Source::Document {
                page: "34".into(),
                document_id: "sdk_docs.pdf".into()
            },
        ]
    );
}

#[tokio::test]
async fn framework_lookup_passes_preferred_domains_and_keeps_rank_order() {
    let web = Arc::new(HintCapturingSearch::new(vec![
        hit("First", "https://a.example", 0.9),
        hit("Second", "https://b.example", 0.5),
    ]));
    let specialist =
        FrameworkSpecialist::new(web.clone(), Arc::new(CapturingGenerator::ok("fw answer")), 3);

    let result = specialist.query(Some("LangChain"), "how to chain?").await;
    assert!(result.success);
    assert_eq!(result.kind, SpecialistKind::FrameworkSearch);

    let hints = web.hints.lock().unwrap().clone().unwrap();
    assert!(hints.contains(&"python.langchain.com".to_string()));

    match &result.sources[..] {
        [
            Source::Web { title: first, .. },
            Source::Web { title: second, .. },
        ] => {
            assert_eq!(first, "First");
            assert_eq!(second, "Second");
        }
        other => panic!("unexpected sources: {other:?}"),
    }
}

#[tokio::test]
async fn generic_framework_searches_without_domain_restriction() {
    let web = Arc::new(HintCapturingSearch::new(vec![hit(
        "Hit",
        "https://c.example",
        0.7,
    )]));
    let specialist =
        FrameworkSpecialist::new(web.clone(), Arc::new(CapturingGenerator::ok("answer")), 3);

    let result = specialist.query(None, "general question").await;
    assert!(result.success);
    assert!(web.hints.lock().unwrap().is_none());
}

#[tokio::test]
async fn codegen_success_parses_sections_from_raw_response() {
    let raw = "```python\nclient = Client()\n```\n**Explanation:**\nBuilds a client.\n**Estimated Cost:**\nNone\n**Gotchas:**\nNeeds an API key.";
    let generator = Arc::new(CapturingGenerator::ok(raw));
    let codegen = CodeGenerator::new(generator);

    let result = codegen.generate("make a client", "", "").await;
    assert!(result.success);
    assert_eq!(result.code, "client = Client()");
    assert_eq!(result.explanation, "Builds a client.");
    assert_eq!(result.cost_estimate, "None");
    assert_eq!(result.caveats, "Needs an API key.");
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn codegen_failure_yields_inline_error_comment_and_empty_fields() {
    let codegen = CodeGenerator::new(Arc::new(CapturingGenerator::failing()));

    let result = codegen.generate("make a client", "", "").await;
    assert!(!result.success);
    assert!(result.code.starts_with("# Error generating code:"));
    assert!(result.explanation.is_empty());
    assert!(result.cost_estimate.is_empty());
    assert!(result.caveats.is_empty());
    assert!(result.error.is_some());
}
