//! Metadata resolver.
//!
//! Wraps a [`MetadataProvider`] with a per-run query cache so repeated
//! lookups for the same search string never hit the provider twice.
//! A lookup yielding nothing is `Ok(None)` — a normal skip, not an error.

use crate::models::media::{MovieInfo, SeriesInfo};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Query interface of the external metadata database.
#[async_trait]
pub trait MetadataProvider {
    /// Search for a movie; `Ok(None)` when nothing matches.
    async fn search_movie(&self, query: &str) -> Result<Option<MovieInfo>>;

    /// Search for a series with its full episode listing; `Ok(None)` when
    /// nothing matches.
    async fn search_series(&self, query: &str) -> Result<Option<SeriesInfo>>;
}

/// Caching resolver owning the per-run lookup results.
pub struct Resolver<P: MetadataProvider> {
    provider: P,
    movies: HashMap<String, Option<MovieInfo>>,
    series: HashMap<String, Option<SeriesInfo>>,
}

impl<P: MetadataProvider> Resolver<P> {
    /// Create a resolver with a fresh cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            movies: HashMap::new(),
            series: HashMap::new(),
        }
    }

    /// Resolve a movie query, serving repeats from the cache.
    pub async fn resolve_movie(&mut self, query: &str) -> Result<Option<MovieInfo>> {
        if let Some(cached) = self.movies.get(query) {
            tracing::debug!("movie cache hit for \"{}\"", query);
            return Ok(cached.clone());
        }

        let result = self.provider.search_movie(query).await?;
        self.movies.insert(query.to_string(), result.clone());
        Ok(result)
    }

    /// Resolve a series query, serving repeats from the cache.
    pub async fn resolve_series(&mut self, query: &str) -> Result<Option<SeriesInfo>> {
        if let Some(cached) = self.series.get(query) {
            tracing::debug!("series cache hit for \"{}\"", query);
            return Ok(cached.clone());
        }

        let result = self.provider.search_series(query).await?;
        self.series.insert(query.to_string(), result.clone());
        Ok(result)
    }
}
