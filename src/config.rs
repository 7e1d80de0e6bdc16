//! Runtime configuration loaded from environment variables

/// Top-level configuration for the pipeline and its clients
#[derive(Debug, Clone)]
pub struct Config {
    /// Passages retrieved per documentation query
    pub top_k: usize,
    /// Web hits requested per framework query
    pub max_web_results: usize,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    /// Directory of local documentation files for the corpus retriever
    pub docs_dir: String,
}

/// OpenAI-compatible chat-completions endpoint settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout_ms: u64,
}

/// Tavily web search settings
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_web_results: 3,
            llm: LlmConfig {
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key: String::new(),
                timeout_ms: 20_000,
            },
            search: SearchConfig {
                api_key: String::new(),
                timeout_ms: 15_000,
            },
            docs_dir: "./docs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults. Out-of-range values are clamped, not rejected.
    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        if let Some(top_k) = std::env::var("DOCMIND_TOP_K")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.top_k = top_k.clamp(1, 20);
        }

        if let Some(max_results) = std::env::var("DOCMIND_MAX_WEB_RESULTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.max_web_results = max_results.clamp(1, 10);
        }

        if let Ok(base_url) = std::env::var("DOCMIND_LLM_BASE_URL") {
            config.llm.base_url = base_url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.llm.model = model;
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.llm.api_key = key;
        }
        if let Some(timeout_ms) = std::env::var("DOCMIND_LLM_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.llm.timeout_ms = timeout_ms.clamp(1_000, 120_000);
        }

        if let Ok(key) = std::env::var("TAVILY_API_KEY") {
            config.search.api_key = key;
        }
        if let Ok(dir) = std::env::var("DOCMIND_DOCS_DIR") {
            config.docs_dir = dir;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.max_web_results, 3);
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }
}
