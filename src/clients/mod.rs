//! Real implementations of the capability interfaces

pub mod corpus;
pub mod openai;
pub mod tavily;

pub use corpus::CorpusRetriever;
pub use openai::OpenAiClient;
pub use tavily::TavilyClient;
