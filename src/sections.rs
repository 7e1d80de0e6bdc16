//! Marker-based section extraction from free-form generation output
//!
//! A generation response is one text blob that should contain a fenced code
//! block plus labeled prose sections. This module recovers the structure with
//! fixed rules: for each field, find the first accepted label, then take text
//! up to the nearest other label or end of input. The function is pure, so
//! every edge case is testable in isolation.

/// The fields recovered from one generation response. Always strings,
/// possibly empty; never absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct Sections {
    pub code: String,
    pub explanation: String,
    pub cost_estimate: String,
    pub caveats: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Explanation,
    CostEstimate,
    Caveats,
}

/// Accepted label spellings per field, in priority order. Bold variants come
/// first so a bold label is matched whole rather than through its inner text.
const SECTION_LABELS: &[(Field, &[&str])] = &[
    (Field::Explanation, &["**Explanation:**", "Explanation:"]),
    (
        Field::CostEstimate,
        &[
            "**Estimated Cost:**",
            "**Cost Estimate:**",
            "Estimated Cost:",
            "Cost Estimate:",
        ],
    ),
    (Field::Caveats, &["**Gotchas:**", "Gotchas:"]),
];

/// The fence tag preferred for code extraction
const CODE_LANG: &str = "python";

/// Split one free-form response into named sections.
pub fn extract(text: &str) -> Sections {
    Sections {
        code: extract_code(text),
        explanation: labeled_section(text, Field::Explanation),
        cost_estimate: labeled_section(text, Field::CostEstimate),
        caveats: labeled_section(text, Field::Caveats),
    }
}

/// Value of one labeled field: from after the first matching label up to the
/// nearest occurrence of any other field's label, trimmed. Empty when no
/// label spelling is present.
fn labeled_section(text: &str, field: Field) -> String {
    let Some(spellings) = SECTION_LABELS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, s)| *s)
    else {
        return String::new();
    };
    let Some((label, pos)) = spellings
        .iter()
        .find_map(|l| text.find(l).map(|p| (*l, p)))
    else {
        return String::new();
    };

    let rest = &text[pos + label.len()..];
    let mut end = rest.len();
    for (other, other_spellings) in SECTION_LABELS {
        if *other == field {
            continue;
        }
        for s in *other_spellings {
            if let Some(p) = rest.find(s) {
                end = end.min(p);
            }
        }
    }
    rest[..end].trim().to_string()
}

/// Extract the code block: prefer a fence tagged with [`CODE_LANG`], fall
/// back to the first fence of any kind (dropping a bare language-tag line),
/// and return empty when no fence exists at all.
fn extract_code(text: &str) -> String {
    let tagged = format!("```{}", CODE_LANG);
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(&tagged) {
        let after = search_from + rel + tagged.len();
        // Only a whole-tag match counts; "```python3" is a different fence.
        let is_whole_tag = text[after..]
            .chars()
            .next()
            .map_or(true, |c| c.is_whitespace());
        if is_whole_tag {
            let body = &text[after..];
            let end = body.find("```").unwrap_or(body.len());
            return body[..end].trim().to_string();
        }
        search_from = after;
    }

    let Some(start) = text.find("```") else {
        return String::new();
    };
    let body = &text[start + 3..];
    let end = body.find("```").unwrap_or(body.len());
    let block = &body[..end];
    let block = match block.split_once('\n') {
        Some((first, rest))
            if !first.trim().is_empty()
                && first.trim().chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            rest
        }
        _ => block,
    };
    block.trim().to_string()
}
