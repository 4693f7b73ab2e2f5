use crate::{
    error::AppResult,
    models::{Movie, MoodIntent},
    services::catalog::{fallback, CatalogProvider, DiscoverParams},
};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Maximum number of items handed to the assembler
const RESULT_LIMIT: usize = 10;

/// Rating floor for the free-text keyword query, looser than the discovery
/// floor because text matches are already narrower
const KEYWORD_MIN_RATING: f64 = 6.5;

/// Finds catalog items for a search-ready intent.
///
/// Issues the genre discovery query and, when keywords are present, a
/// concurrent free-text query; drops already-seen titles, then merges,
/// deduplicates, ranks, and truncates. Provider failures and empty unions
/// are absorbed here: the caller always receives a non-empty list, degraded
/// to the static per-emotion shelf when live search has nothing to offer.
pub async fn find_movies(catalog: &dyn CatalogProvider, intent: &MoodIntent) -> Vec<Movie> {
    match query_catalog(catalog, intent).await {
        Ok(movies) if !movies.is_empty() => movies,
        Ok(_) => {
            tracing::info!(
                emotion = %intent.primary_emotion,
                provider = catalog.name(),
                "Catalog queries returned nothing, serving fallback shelf"
            );
            fallback::movies_for(&intent.primary_emotion)
        }
        Err(error) => {
            tracing::warn!(
                emotion = %intent.primary_emotion,
                provider = catalog.name(),
                error = %error,
                "Catalog unavailable, serving fallback shelf"
            );
            fallback::movies_for(&intent.primary_emotion)
        }
    }
}

async fn query_catalog(catalog: &dyn CatalogProvider, intent: &MoodIntent) -> AppResult<Vec<Movie>> {
    // 1. Genre discovery with the standard quality floors
    let params = DiscoverParams {
        origin_country: intent.country_preference.clone(),
        ..DiscoverParams::for_genres(intent.genres.clone())
    };

    // 2. Free-text query from the first keyword token, issued concurrently
    //    with discovery when the intent carries keywords
    let (mut genre_movies, mut keyword_movies) = match first_keyword(&intent.keywords) {
        Some(token) => {
            let (genre_result, keyword_result) = tokio::join!(
                catalog.discover(&params),
                catalog.search_text(&token, KEYWORD_MIN_RATING)
            );
            (genre_result?, keyword_result?)
        }
        None => (catalog.discover(&params).await?, Vec::new()),
    };

    // 3. Drop titles already shown earlier in the conversation. The remote
    //    discovery API cannot express an id-exclusion filter, so this is
    //    applied locally before ranking and truncation.
    if !intent.excluded_catalog_ids.is_empty() {
        genre_movies.retain(|m| !intent.excluded_catalog_ids.contains(&m.id));
        keyword_movies.retain(|m| !intent.excluded_catalog_ids.contains(&m.id));
    }

    // 4. Merge, dedupe, rank, truncate
    Ok(merge_and_rank(genre_movies, keyword_movies, &intent.genres))
}

/// First non-empty token of a comma-separated keyword string
fn first_keyword(keywords: &str) -> Option<String> {
    keywords
        .split(',')
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_string)
}

/// Merges two result lists into one ranked sequence: deduplicate by id
/// (first occurrence wins), sort items overlapping the intent genres ahead
/// of those that don't, break ties by rating descending then id, truncate
/// to the result limit. Ranking depends only on item identity, genre
/// overlap, and rating, so merge order cannot change the outcome.
pub fn merge_and_rank(primary: Vec<Movie>, secondary: Vec<Movie>, genres: &[u32]) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Movie> = primary
        .into_iter()
        .chain(secondary)
        .filter(|m| seen.insert(m.id))
        .collect();

    merged.sort_by(|a, b| {
        let a_overlap = a.matches_genres(genres);
        let b_overlap = b.matches_genres(genres);
        b_overlap
            .cmp(&a_overlap)
            .then(
                b.vote_average
                    .partial_cmp(&a.vote_average)
                    .unwrap_or(Ordering::Equal),
            )
            .then(a.id.cmp(&b.id))
    });

    merged.truncate(RESULT_LIMIT);
    merged
}
