//! TMDB catalog provider
//!
//! Speaks the TMDB v3 API: `discover/movie` for filtered discovery and
//! `search/movie` for free-text queries. Every request carries the fixed
//! locale parameters (en-US, first page, no adult titles).
//!
//! The credential is optional at construction time so the application can
//! start without one; each call then fails with `CatalogUnavailable`,
//! which the search adapter converts into static fallback content.

use crate::{
    error::{AppError, AppResult},
    models::{Movie, SearchPage},
    services::catalog::{CatalogProvider, DiscoverParams},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::CatalogUnavailable("TMDB API key is not configured".to_string())
        })
    }

    async fn fetch_page(&self, url: &str, query: &[(&str, String)]) -> AppResult<Vec<Movie>> {
        let response = self.http_client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let page: SearchPage = response.json().await?;
        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(&self, params: &DiscoverParams) -> AppResult<Vec<Movie>> {
        let api_key = self.api_key()?.to_string();
        let url = format!("{}/discover/movie", self.api_url);

        let genre_list = params
            .genres
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut query = vec![
            ("api_key", api_key),
            ("language", "en-US".to_string()),
            ("page", "1".to_string()),
            ("include_adult", "false".to_string()),
            ("with_genres", genre_list.clone()),
            ("vote_average.gte", params.min_rating.to_string()),
            ("vote_count.gte", params.min_vote_count.to_string()),
            ("sort_by", "vote_average.desc".to_string()),
        ];
        if let Some(country) = &params.origin_country {
            query.push(("with_origin_country", country.clone()));
        }

        let movies = self.fetch_page(&url, &query).await?;

        tracing::info!(
            genres = %genre_list,
            results = movies.len(),
            provider = "tmdb",
            "Discovery query completed"
        );

        Ok(movies)
    }

    async fn search_text(&self, query_text: &str, min_rating: f64) -> AppResult<Vec<Movie>> {
        let api_key = self.api_key()?.to_string();
        let url = format!("{}/search/movie", self.api_url);

        let query = vec![
            ("api_key", api_key),
            ("language", "en-US".to_string()),
            ("page", "1".to_string()),
            ("include_adult", "false".to_string()),
            ("query", query_text.to_string()),
        ];

        let movies = self.fetch_page(&url, &query).await?;

        // The search endpoint has no rating filter; apply the floor locally
        let movies: Vec<Movie> = movies
            .into_iter()
            .filter(|m| m.vote_average >= min_rating)
            .collect();

        tracing::info!(
            query = %query_text,
            results = movies.len(),
            provider = "tmdb",
            "Text search completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
