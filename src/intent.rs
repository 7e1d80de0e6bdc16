//! Intent classification with defensive parsing
//!
//! The classifier response is untrusted free text: it may be valid JSON, JSON
//! wrapped in a fenced block, or garbage. Anything that does not parse into
//! the full routing shape collapses to a fixed fallback that still attempts a
//! documentation answer, so a bad classification can never abort a request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capabilities::Classifier;
use crate::error::{DocMindError, Result};

/// Structured routing decision derived from a user query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub needs_docs: bool,
    pub needs_framework: bool,
    pub needs_code: bool,
    /// Only meaningful when `needs_framework` is set
    #[serde(default)]
    pub framework_name: Option<String>,
}

impl Intent {
    /// The conservative default used whenever classification fails:
    /// attempt a documentation answer, nothing else.
    pub fn fallback() -> Self {
        Self {
            needs_docs: true,
            needs_framework: false,
            needs_code: false,
            framework_name: None,
        }
    }

    /// True when no specialist is requested at all
    pub fn is_empty(&self) -> bool {
        !self.needs_docs && !self.needs_framework && !self.needs_code
    }
}

/// Turns a user query into an [`Intent`] via the injected classifier
pub struct IntentClassifier {
    classifier: Arc<dyn Classifier>,
}

impl IntentClassifier {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Classify a query. Infallible: any classifier or parse error yields
    /// [`Intent::fallback`].
    pub async fn classify(&self, query: &str) -> Intent {
        match self.classifier.classify(query).await {
            Ok(raw) => parse_intent(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "intent response did not parse, using fallback");
                Intent::fallback()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "classifier call failed, using fallback");
                Intent::fallback()
            }
        }
    }
}

/// Parse a raw classification response into an [`Intent`].
///
/// Strips at most one fenced block (labeled or unlabeled) before parsing.
/// All three routing flags are required keys; a missing flag is a parse
/// error, not a silent default.
pub fn parse_intent(raw: &str) -> Result<Intent> {
    let body = strip_code_fence(raw);
    serde_json::from_str(&body).map_err(|e| DocMindError::Classification {
        message: format!("malformed intent response: {}", e),
    })
}

/// Unwrap a single ``` fence, dropping a language tag such as `json` on the
/// opening line. Text without a fence is returned trimmed; a truncated fence
/// keeps whatever content follows the opening marker.
fn strip_code_fence(raw: &str) -> String {
    let Some(start) = raw.find("```") else {
        return raw.trim().to_string();
    };
    let mut inner = &raw[start + 3..];
    if let Some(nl) = inner.find('\n') {
        let tag = inner[..nl].trim();
        if tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            inner = &inner[nl + 1..];
        }
    }
    if let Some(end) = inner.find("```") {
        inner = &inner[..end];
    }
    inner.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let intent = parse_intent(
            r#"{"needs_docs": true, "needs_framework": true, "needs_code": false, "framework_name": "langchain"}"#,
        )
        .unwrap();
        assert!(intent.needs_docs);
        assert!(intent.needs_framework);
        assert!(!intent.needs_code);
        assert_eq!(intent.framework_name.as_deref(), Some("langchain"));
    }

    #[test]
    fn parses_labeled_fence() {
        let raw = "```json\n{\"needs_docs\": false, \"needs_framework\": false, \"needs_code\": true}\n```";
        let intent = parse_intent(raw).unwrap();
        assert!(intent.needs_code);
        assert_eq!(intent.framework_name, None);
    }

    #[test]
    fn parses_unlabeled_fence_with_surrounding_prose() {
        let raw = "Here is the classification:\n```\n{\"needs_docs\": true, \"needs_framework\": false, \"needs_code\": false}\n```\nDone.";
        let intent = parse_intent(raw).unwrap();
        assert!(intent.needs_docs);
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let raw = r#"{"needs_docs": true, "needs_framework": false}"#;
        assert!(parse_intent(raw).is_err());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_intent("I think you want docs").is_err());
    }

    #[test]
    fn truncated_fence_with_valid_body_still_parses() {
        let raw = "```json\n{\"needs_docs\": true, \"needs_framework\": false, \"needs_code\": false}";
        let intent = parse_intent(raw).unwrap();
        assert!(intent.needs_docs);
    }

    #[test]
    fn fallback_requests_docs_only() {
        let intent = Intent::fallback();
        assert!(intent.needs_docs);
        assert!(!intent.needs_framework);
        assert!(!intent.needs_code);
        assert!(intent.framework_name.is_none());
        assert!(!intent.is_empty());
    }
}
