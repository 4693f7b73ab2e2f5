use serde::{Deserialize, Serialize};

/// How strongly the user expressed their mood
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    /// Parses a classifier-supplied intensity label, coercing anything
    /// outside the three valid values to `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Intensity::Low,
            "high" => Intensity::High,
            _ => Intensity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

/// The structured interpretation of a user's mood text
///
/// Built fresh for every request; refinement turns construct a new intent
/// from the previous turn's result ids rather than mutating this one.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodIntent {
    pub primary_emotion: String,
    pub intensity: Intensity,
    pub desired_outcome: String,
    /// Genre codes to search for, in priority order. Never empty when a
    /// catalog search will run.
    pub genres: Vec<u32>,
    /// Genre codes to keep out of results
    pub exclude_genres: Vec<u32>,
    /// Comma-separated free-text search terms
    pub keywords: String,
    /// Explicit genre choice extracted during refinement
    pub genre_preference: Option<Vec<u32>>,
    /// Origin-country filter extracted during refinement
    pub country_preference: Option<String>,
    /// Catalog ids already shown to the user, excluded from the next search
    pub excluded_catalog_ids: Vec<u64>,
    pub explanation: String,
    pub sommelier_note: String,
    /// When true the turn is conversational: `conversation_reply` is set and
    /// downstream stages skip the catalog entirely.
    pub is_small_talk: bool,
    pub conversation_reply: Option<String>,
}

impl MoodIntent {
    /// Builds a small-talk intent carrying only a conversational reply
    pub fn small_talk(reply: impl Into<String>) -> Self {
        Self {
            primary_emotion: "neutral".to_string(),
            intensity: Intensity::Medium,
            desired_outcome: "friendly conversation".to_string(),
            genres: Vec::new(),
            exclude_genres: Vec::new(),
            keywords: String::new(),
            genre_preference: None,
            country_preference: None,
            excluded_catalog_ids: Vec::new(),
            explanation: String::new(),
            sommelier_note: String::new(),
            is_small_talk: true,
            conversation_reply: Some(reply.into()),
        }
    }
}

/// The lenient shape decoded straight from generative-model output
///
/// Every field is optional: the model may omit, misname, or mangle fields,
/// and decoding must still succeed so the sanitizer can patch in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIntent {
    pub primary_emotion: Option<String>,
    /// Free string, validated by `Intensity::parse_lenient`
    pub intensity: Option<String>,
    pub desired_outcome: Option<String>,
    pub genres: Option<Vec<u32>>,
    pub exclude_genres: Option<Vec<u32>>,
    pub keywords: Option<String>,
    pub explanation: Option<String>,
    pub sommelier_note: Option<String>,
    pub is_small_talk: Option<bool>,
    pub conversation_reply: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_parse_lenient_valid() {
        assert_eq!(Intensity::parse_lenient("low"), Intensity::Low);
        assert_eq!(Intensity::parse_lenient("medium"), Intensity::Medium);
        assert_eq!(Intensity::parse_lenient("high"), Intensity::High);
        assert_eq!(Intensity::parse_lenient(" High "), Intensity::High);
    }

    #[test]
    fn test_intensity_parse_lenient_coerces_invalid_to_medium() {
        assert_eq!(Intensity::parse_lenient("extreme"), Intensity::Medium);
        assert_eq!(Intensity::parse_lenient("5"), Intensity::Medium);
        assert_eq!(Intensity::parse_lenient(""), Intensity::Medium);
    }

    #[test]
    fn test_intensity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Intensity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Intensity::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_raw_intent_decodes_camel_case() {
        let json = r#"{
            "primaryEmotion": "stressed",
            "intensity": "high",
            "desiredOutcome": "relaxation and stress relief",
            "genres": [35, 16, 10751],
            "excludeGenres": [27, 53, 80],
            "keywords": "feel-good,heartwarming",
            "explanation": "You sound overwhelmed.",
            "sommelierNote": "Like a warm cup of tea."
        }"#;

        let raw: RawIntent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.primary_emotion.as_deref(), Some("stressed"));
        assert_eq!(raw.intensity.as_deref(), Some("high"));
        assert_eq!(raw.genres, Some(vec![35, 16, 10751]));
        assert_eq!(raw.exclude_genres, Some(vec![27, 53, 80]));
    }

    #[test]
    fn test_raw_intent_decodes_partial_payload() {
        // Models routinely omit optional fields
        let raw: RawIntent = serde_json::from_str(r#"{"primaryEmotion": "sad"}"#).unwrap();
        assert_eq!(raw.primary_emotion.as_deref(), Some("sad"));
        assert!(raw.genres.is_none());
        assert!(raw.keywords.is_none());
    }

    #[test]
    fn test_raw_intent_ignores_unknown_fields() {
        let raw: RawIntent =
            serde_json::from_str(r#"{"primaryEmotion": "sad", "confidence": 0.9}"#).unwrap();
        assert_eq!(raw.primary_emotion.as_deref(), Some("sad"));
    }

    #[test]
    fn test_small_talk_intent_is_consistent() {
        let intent = MoodIntent::small_talk("Hello there!");
        assert!(intent.is_small_talk);
        assert_eq!(intent.conversation_reply.as_deref(), Some("Hello there!"));
        assert!(intent.genres.is_empty());
    }
}
