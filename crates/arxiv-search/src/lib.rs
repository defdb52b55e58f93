//! arXiv Search
//!
//! Interactive search over the public arXiv catalog, served as a Model Context
//! Protocol (MCP) extension. The host sends the search text on every change;
//! results are ranked by title similarity, filtered by subject category, and
//! each paper offers citation, browser and PDF download actions.
//!
//! # Features
//!
//! - **Latest-wins search**: an in-flight query is cancelled when a newer one starts
//! - **Client-side ranking**: bigram similarity between query and title
//! - **Citation keys**: `vaswani2017attention` style keys for BibTeX, RIS and EndNote
//! - **Cached**: 5-minute TTL cache reduces API calls
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search::{ArxivClient, Config, models::SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!
//!     if let Some(query) = SearchQuery::new("attention is all you need", config.max_results) {
//!         let papers = client.search(&query).await?;
//!         println!("{} papers", papers.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod ranking;
pub mod server;
pub mod session;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
