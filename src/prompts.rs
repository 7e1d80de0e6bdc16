//! Prompt templates for classification, synthesis, and code generation
//!
//! Kept in one place so the wire shape the intent parser expects and the
//! section markers the extractor scans for stay next to the text that asks
//! the model to produce them.

/// System prompt for intent classification
pub const INTENT_SYSTEM: &str = "You are an intent classification expert.";

/// System prompt for documentation answer synthesis
pub const RETRIEVAL_SYSTEM: &str = "You are a documentation expert assistant.";

/// System prompt for code generation
pub const CODEGEN_SYSTEM: &str =
    "You are an expert code generator for SDK integration examples.";

/// Build the intent-classification user prompt.
///
/// The response contract here must match `intent::parse_intent`: a JSON
/// object with `needs_docs`, `needs_framework`, `needs_code`, and an optional
/// `framework_name`.
pub fn intent_classification(query: &str) -> String {
    format!(
        "Classify the user's question into routing flags.\n\
         \n\
         Question: {query}\n\
         \n\
         Respond with ONLY a JSON object of this exact shape:\n\
         {{\n\
           \"needs_docs\": true or false,\n\
           \"needs_framework\": true or false,\n\
           \"needs_code\": true or false,\n\
           \"framework_name\": \"langchain\" | \"llamaindex\" | \"crewai\" | \"autogen\" | \"haystack\" | null\n\
         }}\n\
         \n\
         needs_docs: the question asks about the SDK's own API or concepts.\n\
         needs_framework: the question involves a third-party framework; set\n\
         framework_name when one is named, otherwise null.\n\
         needs_code: the user wants a working code example."
    )
}

/// Build the retrieval-QA user prompt from cited passages.
pub fn retrieval_qa(context: &str, question: &str) -> String {
    format!(
        "Answer the question using ONLY the documentation excerpts below.\n\
         Cite the source markers ([Source N - ...]) you relied on.\n\
         If the excerpts do not cover the question, say so.\n\
         \n\
         Documentation excerpts:\n\
         {context}\n\
         Question: {question}"
    )
}

/// Build the framework-QA user prompt from web search context.
pub fn framework_answer(framework: &str, search_results: &str, question: &str) -> String {
    format!(
        "You are answering a question about {framework}.\n\
         Base your answer on the search results below and mention when they\n\
         disagree or are outdated.\n\
         \n\
         Search results:\n\
         {search_results}\n\
         Question: {question}"
    )
}

/// Build the code-generation user prompt.
///
/// Empty contexts are replaced with an explicit placeholder so the prompt
/// shape is stable whether or not the other specialists ran.
pub fn code_generation(query: &str, docs_context: &str, framework_context: &str) -> String {
    let docs_context = if docs_context.is_empty() {
        "No specific documentation context provided."
    } else {
        docs_context
    };
    let framework_context = if framework_context.is_empty() {
        "No specific framework context provided."
    } else {
        framework_context
    };
    format!(
        "Generate a complete, working code example for the request below.\n\
         \n\
         Request: {query}\n\
         \n\
         Documentation context:\n\
         {docs_context}\n\
         \n\
         Framework context:\n\
         {framework_context}\n\
         \n\
         Format your response exactly as:\n\
         - one fenced ```python code block with the example\n\
         - **Explanation:** a short walkthrough\n\
         - **Estimated Cost:** expected API/runtime cost of running it\n\
         - **Gotchas:** pitfalls and version caveats"
    )
}
