//! Movie catalog provider abstraction
//!
//! This module provides a pluggable interface over remote movie databases.
//! A provider exposes the two query shapes the search adapter needs:
//! filtered discovery and free-text search. Both return best-first pages
//! of plain catalog items; ranking across providers happens downstream.

use crate::{error::AppResult, models::Movie};

pub mod fallback;
pub mod tmdb;

/// Filters for a discovery query
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverParams {
    /// Genre codes with OR semantics
    pub genres: Vec<u32>,
    /// Minimum average rating for returned items
    pub min_rating: f64,
    /// Minimum number of ratings, filtering out barely-reviewed titles
    pub min_vote_count: u32,
    /// Optional origin-country filter
    pub origin_country: Option<String>,
}

impl DiscoverParams {
    /// Standard quality floors for a mood-driven discovery query
    pub fn for_genres(genres: Vec<u32>) -> Self {
        Self {
            genres,
            min_rating: 7.0,
            min_vote_count: 100,
            origin_country: None,
        }
    }
}

/// Trait for movie catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Discovery query filtered by genres and quality floors, best-rated
    /// first
    async fn discover(&self, params: &DiscoverParams) -> AppResult<Vec<Movie>>;

    /// Free-text search with a minimum-rating floor, best-rated first
    async fn search_text(&self, query: &str, min_rating: f64) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
