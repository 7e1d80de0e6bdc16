//! Tavily web search client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::capabilities::{WebHit, WebSearch};
use crate::config::SearchConfig;
use crate::error::{DocMindError, Result};

const TAVILY_URL: &str = "https://api.tavily.com/search";

pub struct TavilyClient {
    http: Client,
    api_key: String,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    score: f32,
}

impl TavilyClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(DocMindError::Config {
                message: "TAVILY_API_KEY is not set".into(),
            });
        }
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DocMindError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(
        &self,
        query: &str,
        domain_hints: Option<&[&str]>,
        max_results: usize,
    ) -> Result<Vec<WebHit>> {
        let mut body = json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": max_results,
            "search_depth": "advanced",
        });
        if let Some(domains) = domain_hints {
            body["include_domains"] = json!(domains);
        }

        let resp = self
            .http
            .post(TAVILY_URL)
            .json(&body)
            .send()
            .await
            .map_err(|e| DocMindError::Search {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(DocMindError::Search {
                message: format!("search returned {}: {}", status, body_text),
            });
        }

        let parsed: TavilyResponse = resp.json().await.map_err(|e| DocMindError::Search {
            message: format!("malformed search response: {}", e),
        })?;

        Ok(parsed
            .results
            .into_iter()
            .map(|r| WebHit {
                title: r.title,
                url: r.url,
                snippet: r.content,
                score: r.score,
            })
            .collect())
    }
}
