//! Search session: the current result set, replaced on every query change.
//!
//! Hosts re-issue the search on each keystroke. Every search takes a new
//! generation number; an older search still in flight is cancelled as soon as
//! a newer one starts, and never overwrites what the newer one shows.

use tokio::sync::{RwLock, watch};

use crate::client::ArxivClient;
use crate::error::{ToolError, ToolResult};
use crate::models::{Category, Paper, SearchQuery};
use crate::ranking;

/// Latest-wins search state shared by the tools.
#[derive(Debug)]
pub struct SearchSession {
    /// Generation of the most recent search.
    latest: watch::Sender<u64>,

    /// Papers shown by the most recent completed search.
    results: RwLock<Vec<Paper>>,

    /// Result cap for every query.
    max_results: usize,
}

impl SearchSession {
    /// Create an empty session.
    #[must_use]
    pub fn new(max_results: usize) -> Self {
        let (latest, _) = watch::channel(0);
        Self { latest, results: RwLock::new(Vec::new()), max_results }
    }

    /// Run a search and make its ranked, filtered result the current one.
    ///
    /// Blank text clears the results without a request. Transport or parse
    /// failures show as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Superseded`] if a newer search started first.
    pub async fn search(
        &self,
        client: &ArxivClient,
        text: &str,
        category: Category,
    ) -> ToolResult<Vec<Paper>> {
        let mut generation = 0;
        self.latest.send_modify(|g| {
            *g += 1;
            generation = *g;
        });
        let mut newer = self.latest.subscribe();

        let Some(query) = SearchQuery::new(text, self.max_results) else {
            return self.commit(generation, Vec::new()).await;
        };

        let fetched = tokio::select! {
            result = client.search(&query) => result,
            _ = newer.changed() => {
                tracing::debug!(generation, query = query.text(), "Search cancelled by newer query");
                return Err(ToolError::Superseded);
            }
        };

        let papers = match fetched {
            Ok(papers) => papers.as_ref().clone(),
            Err(e) => {
                tracing::warn!(error = %e, query = query.text(), "Search failed, showing no results");
                Vec::new()
            }
        };

        let shown = ranking::rank_and_filter(papers, query.text(), category);
        tracing::info!(
            generation,
            query = query.text(),
            category = category.slug(),
            results = shown.len(),
            "Search results ready"
        );
        self.commit(generation, shown).await
    }

    /// Store `papers` as current unless a newer search has started.
    async fn commit(&self, generation: u64, papers: Vec<Paper>) -> ToolResult<Vec<Paper>> {
        let mut results = self.results.write().await;
        if *self.latest.borrow() != generation {
            return Err(ToolError::Superseded);
        }
        results.clone_from(&papers);
        Ok(papers)
    }

    /// Papers currently shown.
    pub async fn current(&self) -> Vec<Paper> {
        self.results.read().await.clone()
    }

    /// Find a shown paper by any accepted id form.
    pub async fn find(&self, id: &str) -> Option<Paper> {
        self.results.read().await.iter().find(|p| p.matches_id(id)).cloned()
    }

    /// Resolve a paper for an action: shown results first, then the API.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotFound`] if neither knows the id, or the client error.
    pub async fn resolve(&self, client: &ArxivClient, id: &str) -> ToolResult<Paper> {
        if id.trim().is_empty() {
            return Err(ToolError::validation("id", "cannot be empty"));
        }
        if let Some(paper) = self.find(id).await {
            return Ok(paper);
        }
        tracing::debug!(id, "Paper not in current results, looking it up");
        client.fetch_by_id(id).await?.ok_or_else(|| ToolError::not_found(id))
    }
}
