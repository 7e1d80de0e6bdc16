//! Deterministic composition of specialist results into one response
//!
//! Rendering depends only on the result map, never on completion order: the
//! map is keyed by `SpecialistKind`, whose `Ord` is the fixed priority order
//! RetrievalQA, FrameworkSearch, CodeGen.

use std::collections::BTreeMap;

use crate::specialists::{Source, SpecialistKind, SpecialistResult};

/// Fixed reply when no specialist was requested
pub const NO_ANSWER: &str = "I couldn't process your query. Please try rephrasing.";

/// Cap on sources listed per specialist in the consolidated section
const MAX_SOURCES_SHOWN: usize = 3;

/// Merge 0..N specialist results into the final response text.
pub fn compose(results: &BTreeMap<SpecialistKind, SpecialistResult>) -> String {
    let mut values = results.values();
    match (values.next(), values.next()) {
        (None, _) => NO_ANSWER.to_string(),
        (Some(only), None) => render_single(only),
        _ => render_multi(results),
    }
}

/// A lone result is rendered bare, with no header wrapping.
fn render_single(result: &SpecialistResult) -> String {
    match result.kind {
        SpecialistKind::CodeGen => render_code(result),
        _ => result.answer.clone(),
    }
}

fn render_multi(results: &BTreeMap<SpecialistKind, SpecialistResult>) -> String {
    let mut out = String::from("**Multi-Agent Response:**\n\n");

    // BTreeMap iteration follows SpecialistKind's declaration order.
    for (kind, result) in results {
        let header = match kind {
            SpecialistKind::RetrievalQa => "**Documentation Response:**",
            SpecialistKind::FrameworkSearch => "**Framework Specialist Response:**",
            SpecialistKind::CodeGen => "**Code Generator Response:**",
        };
        out.push_str(header);
        out.push('\n');
        out.push_str(&render_single(result));
        out.push_str("\n\n");
    }

    out.push_str(&render_sources(results));
    out
}

/// Fenced code block followed by its prose subsections, each only when
/// non-empty.
fn render_code(result: &SpecialistResult) -> String {
    let mut out = String::new();

    if !result.code.is_empty() {
        out.push_str("```python\n");
        out.push_str(&result.code);
        out.push_str("\n```\n\n");
    }
    if !result.explanation.is_empty() {
        out.push_str(&format!("**Explanation:**\n{}\n\n", result.explanation));
    }
    if !result.cost_estimate.is_empty() {
        out.push_str(&format!("**Estimated Cost:**\n{}\n\n", result.cost_estimate));
    }
    if !result.caveats.is_empty() {
        out.push_str(&format!("**Gotchas:**\n{}\n\n", result.caveats));
    }

    out.trim_end().to_string()
}

/// Consolidated sources: documentation first, then web hits, capped and in
/// original order. CodeGen contributes none.
fn render_sources(results: &BTreeMap<SpecialistKind, SpecialistResult>) -> String {
    let mut out = String::new();

    if let Some(docs) = results.get(&SpecialistKind::RetrievalQa)
        && !docs.sources.is_empty()
    {
        out.push_str("**Documentation Sources:**\n");
        for (i, source) in docs.sources.iter().take(MAX_SOURCES_SHOWN).enumerate() {
            if let Source::Document { page, .. } = source {
                out.push_str(&format!("{}. Page {}\n", i + 1, page));
            }
        }
        out.push('\n');
    }

    if let Some(web) = results.get(&SpecialistKind::FrameworkSearch)
        && !web.sources.is_empty()
    {
        out.push_str("**Framework Sources:**\n");
        for (i, source) in web.sources.iter().take(MAX_SOURCES_SHOWN).enumerate() {
            if let Source::Web { title, url, .. } = source {
                out.push_str(&format!("{}. [{}]({})\n", i + 1, title, url));
            }
        }
        out.push('\n');
    }

    out
}
