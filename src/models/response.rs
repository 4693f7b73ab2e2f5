use serde::Serialize;

use crate::context::TimeContext;
use crate::models::{AnnotatedMovie, Intensity};

/// Snack-and-drink pairing for the recommended films
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerfectPairing {
    pub food: String,
    pub drink: String,
    pub description: String,
}

/// A themed two-film companion suggestion
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoubleFeature {
    pub theme: String,
    pub description: String,
    pub movies: Vec<String>,
}

/// The mood-analysis summary echoed back to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub primary_emotion: String,
    pub intensity: Intensity,
    pub desired_outcome: String,
}

/// Response context block
///
/// Conversational turns carry only the time snapshot. Recommendation
/// turns add the atmosphere note, the optional palette-cleanser list
/// and the `enhancedRecommendations` marker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseContext {
    pub time: TimeContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextual_note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub palette_cleansers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_recommendations: Option<bool>,
}

impl ResponseContext {
    pub fn time_only(time: TimeContext) -> Self {
        Self {
            time,
            contextual_note: None,
            palette_cleansers: Vec::new(),
            enhanced_recommendations: None,
        }
    }

    pub fn enhanced(
        time: TimeContext,
        contextual_note: impl Into<String>,
        palette_cleansers: Vec<String>,
    ) -> Self {
        Self {
            time,
            contextual_note: Some(contextual_note.into()),
            palette_cleansers,
            enhanced_recommendations: Some(true),
        }
    }
}

/// The outward payload, one closed variant per outcome
///
/// Serialized untagged: each variant carries its own wire discriminant
/// (`conversational: true`, the full recommendation envelope, or
/// `fallback: true`) so callers can branch without guessing why a field
/// is absent. Every variant is returned with HTTP 200; only malformed
/// requests produce an error status.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    /// Small-talk turn: a reply, no catalog content
    Conversational {
        conversational: bool,
        response: String,
        context: ResponseContext,
    },
    /// The full recommendation envelope
    #[serde(rename_all = "camelCase")]
    Recommendations {
        movies: Vec<AnnotatedMovie>,
        explanation: String,
        sommelier_note: String,
        perfect_pairing: PerfectPairing,
        #[serde(skip_serializing_if = "Option::is_none")]
        double_feature: Option<DoubleFeature>,
        mood_analysis: MoodAnalysis,
        context: ResponseContext,
        /// Snapshot the client replays as `previousResult` next turn
        response_movies: Vec<AnnotatedMovie>,
    },
    /// Last-resort payload when the whole pipeline failed
    #[serde(rename_all = "camelCase")]
    Emergency {
        error: String,
        fallback: bool,
        movies: Vec<AnnotatedMovie>,
        explanation: String,
        sommelier_note: String,
    },
}

impl RecommendationResponse {
    pub fn conversational(response: impl Into<String>, time: TimeContext) -> Self {
        Self::Conversational {
            conversational: true,
            response: response.into(),
            context: ResponseContext::time_only(time),
        }
    }

    pub fn emergency(
        error: impl Into<String>,
        movies: Vec<AnnotatedMovie>,
        explanation: impl Into<String>,
        sommelier_note: impl Into<String>,
    ) -> Self {
        Self::Emergency {
            error: error.into(),
            fallback: true,
            movies,
            explanation: explanation.into(),
            sommelier_note: sommelier_note.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TimeContext;
    use crate::models::Movie;
    use chrono::TimeZone;

    fn test_time() -> TimeContext {
        let datetime = chrono::Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap();
        TimeContext::from_datetime(&datetime)
    }

    fn test_movie() -> Movie {
        Movie {
            id: 1,
            title: "Paddington 2".to_string(),
            overview: "Pure, concentrated joy.".to_string(),
            poster_path: None,
            release_date: "2017-11-10".to_string(),
            vote_average: 7.8,
            vote_count: 4000,
            genre_ids: vec![10751, 35, 12],
        }
    }

    #[test]
    fn test_conversational_variant_shape() {
        let response = RecommendationResponse::conversational("Good evening!", test_time());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["conversational"], true);
        assert_eq!(value["response"], "Good evening!");
        assert_eq!(value["context"]["time"]["timeOfDay"], "evening");
        assert!(value.get("movies").is_none());
        assert!(value.get("fallback").is_none());
    }

    #[test]
    fn test_recommendation_variant_shape() {
        let annotated = AnnotatedMovie {
            movie: test_movie(),
            runtime: 103,
            ai_context: "A story that asks nothing of you but to watch and smile".to_string(),
        };

        let response = RecommendationResponse::Recommendations {
            movies: vec![annotated.clone()],
            explanation: "Gentle escapism.".to_string(),
            sommelier_note: "Like a warm cup of tea.".to_string(),
            perfect_pairing: PerfectPairing {
                food: "Comfort food like mac and cheese".to_string(),
                drink: "Chamomile tea or warm cocoa".to_string(),
                description: "Soothing comfort foods.".to_string(),
            },
            double_feature: None,
            mood_analysis: MoodAnalysis {
                primary_emotion: "stressed".to_string(),
                intensity: Intensity::High,
                desired_outcome: "relaxation and stress relief".to_string(),
            },
            context: ResponseContext::enhanced(
                test_time(),
                "Evening is prime time for cinema.",
                Vec::new(),
            ),
            response_movies: vec![annotated],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["movies"][0]["title"], "Paddington 2");
        assert_eq!(value["sommelierNote"], "Like a warm cup of tea.");
        assert_eq!(value["perfectPairing"]["drink"], "Chamomile tea or warm cocoa");
        assert_eq!(value["moodAnalysis"]["primaryEmotion"], "stressed");
        assert_eq!(value["moodAnalysis"]["intensity"], "high");
        assert_eq!(value["context"]["enhancedRecommendations"], true);
        assert_eq!(
            value["context"]["contextualNote"],
            "Evening is prime time for cinema."
        );
        assert_eq!(value["responseMovies"][0]["id"], 1);
        // Absent double feature and empty cleanser list are omitted, not null
        assert!(value.get("doubleFeature").is_none());
        assert!(value["context"].get("paletteCleansers").is_none());
    }

    #[test]
    fn test_emergency_variant_shape() {
        let annotated = AnnotatedMovie {
            movie: test_movie(),
            runtime: 103,
            ai_context: "Pure cinematic magic".to_string(),
        };
        let response = RecommendationResponse::emergency(
            "Failed to generate personalized recommendations",
            vec![annotated],
            "Here are some universally loved films.",
            "Great cinema endures.",
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["fallback"], true);
        assert_eq!(value["error"], "Failed to generate personalized recommendations");
        assert_eq!(value["movies"][0]["title"], "Paddington 2");
        assert_eq!(value["movies"][0]["runtime"], 103);
        assert_eq!(value["sommelierNote"], "Great cinema endures.");
        assert!(value.get("conversational").is_none());
    }
}
