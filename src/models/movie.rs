use serde::{Deserialize, Serialize};

/// Base URL for catalog poster images
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Placeholder shown when a movie has no poster
const POSTER_PLACEHOLDER: &str = "/abstract-movie-poster.png";

/// A movie as returned by the catalog provider
///
/// Field names follow the catalog's native wire format so responses can be
/// deserialized directly. All fields except `id` and `title` are defaulted
/// because the catalog omits them for obscure entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// Poster image size buckets supported by the catalog's CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W200,
    W300,
    W500,
    Original,
}

impl PosterSize {
    fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W200 => "w200",
            PosterSize::W300 => "w300",
            PosterSize::W500 => "w500",
            PosterSize::Original => "original",
        }
    }
}

impl Movie {
    /// Builds the full poster image URL, falling back to a placeholder when
    /// the catalog supplied no poster path.
    pub fn poster_url(&self, size: PosterSize) -> String {
        match &self.poster_path {
            Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path),
            None => POSTER_PLACEHOLDER.to_string(),
        }
    }

    /// True when this movie shares at least one genre with the given set
    pub fn matches_genres(&self, genres: &[u32]) -> bool {
        self.genre_ids.iter().any(|id| genres.contains(id))
    }
}

/// One page of catalog search results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A recommended movie annotated for the response payload
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedMovie {
    #[serde(flatten)]
    pub movie: Movie,
    /// Runtime in minutes; estimated when the catalog omits it
    pub runtime: u32,
    /// Per-emotion flavor sentence attached by the assembler
    #[serde(rename = "aiContext")]
    pub ai_context: String,
}

/// The catalog's genre taxonomy (id, display name)
pub const GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Looks up the display name for a genre code
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|(gid, _)| *gid == id).map(|(_, name)| *name)
}

/// Resolves a user-supplied genre word to its catalog code, case-insensitively.
/// Accepts common shorthand ("sci-fi", "scifi", "romcom") on top of the
/// canonical names.
pub fn genre_id_by_name(name: &str) -> Option<u32> {
    let needle = name.trim().to_lowercase();
    match needle.as_str() {
        "sci-fi" | "scifi" | "science-fiction" => return Some(878),
        "romcom" | "rom-com" => return Some(10749),
        "kids" => return Some(10751),
        _ => {}
    }
    GENRES
        .iter()
        .find(|(_, gname)| gname.to_lowercase() == needle)
        .map(|(id, _)| *id)
}
