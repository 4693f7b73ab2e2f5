mod intent;
mod movie;
mod response;

pub use intent::{Intensity, MoodIntent, RawIntent};
pub use movie::{
    genre_id_by_name, genre_name, AnnotatedMovie, Movie, PosterSize, SearchPage, GENRES,
};
pub use response::{
    DoubleFeature, MoodAnalysis, PerfectPairing, RecommendationResponse, ResponseContext,
};
