use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use doc_mind::clients::{CorpusRetriever, OpenAiClient, TavilyClient};
use doc_mind::config::Config;
use doc_mind::orchestrator::Orchestrator;

#[derive(Parser)]
#[command(name = "doc-mind", about = "Ask a question; get one routed, composed answer")]
struct Cli {
    /// The question, as free words
    query: Vec<String>,

    /// Emit the full reply (intent, per-specialist results) as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    doc_mind::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("no question given; usage: doc-mind <question>");
    }

    let config = Config::load_from_env();
    let llm = Arc::new(OpenAiClient::new(&config.llm)?);
    let web_search = Arc::new(TavilyClient::new(&config.search)?);
    let retriever = Arc::new(CorpusRetriever::load(Path::new(&config.docs_dir))?);

    let orchestrator = Orchestrator::new(llm.clone(), retriever, web_search, llm, &config);
    let reply = orchestrator.handle(&query).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{}", reply.final_text);
    }

    Ok(())
}
