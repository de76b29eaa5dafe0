//! arXiv Search MCP Server
//!
//! A Model Context Protocol (MCP) server that answers natural-language paper
//! searches against the arXiv catalog. Free text is interpreted into a
//! structured intent (keywords, authors, subject categories, recency, result
//! count), translated into the catalog's query syntax, and the Atom response
//! is normalized into flat paper records.
//!
//! # Features
//!
//! - **2 MCP Tools**: `search_arxiv_papers` and `get_arxiv_paper`
//! - **Bilingual**: English and Japanese subject keywords and stop words
//! - **Resilient**: fixed-interval retry on transient catalog failures
//! - **Two transports**: stdio and HTTP
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search_mcp::{ArxivClient, Config, build_arxiv_query, parse_query};
//! use arxiv_search_mcp::models::SearchParams;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!
//!     let intent = parse_query("recent graph neural network papers by Jure Leskovec");
//!     let params = SearchParams::new(build_arxiv_query(&intent));
//!     let response = client.search_papers(&params).await?;
//!
//!     for paper in &response.papers {
//!         println!("{} {}", paper.id, paper.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod formatters;
pub mod models;
pub mod query;
pub mod server;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, SearchError, ToolError};
pub use feed::normalize;
pub use query::{build_arxiv_query, parse_query, parse_query_at};
