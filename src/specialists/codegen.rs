//! Code example generation

use std::sync::Arc;

use crate::capabilities::Generator;
use crate::prompts;
use crate::sections;
use crate::specialists::{SpecialistKind, SpecialistResult};

/// Generates a worked code example, optionally grounded in the textual
/// answers of the other specialists.
pub struct CodeGenerator {
    generator: Arc<dyn Generator>,
}

impl CodeGenerator {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Always makes exactly one generation call; contexts are empty strings
    /// when the corresponding specialist did not produce an answer.
    pub async fn generate(
        &self,
        query: &str,
        docs_context: &str,
        framework_context: &str,
    ) -> SpecialistResult {
        let kind = SpecialistKind::CodeGen;
        let prompt = prompts::code_generation(query, docs_context, framework_context);

        match self.generator.generate(prompts::CODEGEN_SYSTEM, &prompt).await {
            Ok(raw) => {
                let parsed = sections::extract(&raw);
                let mut result = SpecialistResult::answered(kind, String::new(), Vec::new());
                result.code = parsed.code;
                result.explanation = parsed.explanation;
                result.cost_estimate = parsed.cost_estimate;
                result.caveats = parsed.caveats;
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "code generation failed");
                let mut result = SpecialistResult::failed(
                    kind,
                    format!("Error generating code: {}", e),
                    e.to_string(),
                );
                result.code = format!("# Error generating code: {}", e);
                result
            }
        }
    }
}
