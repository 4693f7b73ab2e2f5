pub mod llm;
pub mod patterns;
pub mod prompt;

use crate::error::{AppError, AppResult};
use crate::models::{Intensity, MoodIntent, RawIntent};

use self::llm::{extract_json, GenerationParams, LlmClient};

/// Reply used when the generative provider should have answered small talk
/// but could not be reached
const FALLBACK_REPLY: &str = "Hello! I'm your movie sommelier. Tell me how you're feeling tonight \
     and I'll pour you the perfect film.";

const GREETING_STARTERS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "how's it going",
    "what's up",
    "whats up",
    "thanks",
    "thank you",
];

const MOVIE_TERMS: &[&str] = &[
    "movie",
    "film",
    "watch",
    "recommend",
    "suggest",
    "genre",
    "comedy",
    "drama",
    "action",
    "horror",
    "romance",
    "thriller",
    "documentary",
    "sci-fi",
    "series",
    "show",
    "cinema",
    "flick",
    "pick",
];

const QUESTION_WORDS: &[&str] = &[
    "what", "who", "where", "when", "why", "how", "can", "could", "do", "does", "are", "is",
    "should", "would",
];

/// Word-boundary-aware prefix test so "hi there" matches "hi" but
/// "highly stressed" does not
fn has_prefix_word(message: &str, prefix: &str) -> bool {
    match message.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', ',', '.', '!', '?', '\'']),
        None => false,
    }
}

/// Decides whether a message is conversational rather than a mood to
/// classify. Checks run in order: very short inputs and greetings are small
/// talk, any movie-related term forces classification, and a leading
/// question word without a movie term reads as chat.
pub fn is_small_talk(message: &str) -> bool {
    let message = message.trim().to_lowercase();

    if message.split_whitespace().count() <= 3 {
        return true;
    }

    if GREETING_STARTERS.iter().any(|g| has_prefix_word(&message, g)) {
        return true;
    }

    if MOVIE_TERMS.iter().any(|t| message.contains(t)) {
        return false;
    }

    let first_word = message.split_whitespace().next().unwrap_or("");
    QUESTION_WORDS.contains(&first_word)
}

/// Fills the gaps in a model-produced intent with the values the pattern
/// matcher would have derived from the same text, then synthesizes any
/// missing narrative fields from the per-emotion templates.
pub fn sanitize_intent(raw: RawIntent, mood: &str) -> MoodIntent {
    if raw.is_small_talk.unwrap_or(false) {
        if let Some(reply) = raw
            .conversation_reply
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
        {
            return MoodIntent::small_talk(reply);
        }
        // Small-talk flag without a reply is inconsistent; treat the turn
        // as a normal mood and continue below
    }

    let donor = patterns::analyze_mood(mood);

    let primary_emotion = raw
        .primary_emotion
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or(donor.primary_emotion);
    let desired_outcome = raw
        .desired_outcome
        .filter(|o| !o.trim().is_empty())
        .unwrap_or(donor.desired_outcome);
    let intensity = match raw.intensity.as_deref() {
        Some(value) => Intensity::parse_lenient(value),
        None => donor.intensity,
    };
    let genres = raw
        .genres
        .filter(|g| !g.is_empty())
        .unwrap_or(donor.genres);
    let exclude_genres = raw.exclude_genres.unwrap_or(donor.exclude_genres);
    let keywords = raw
        .keywords
        .filter(|k| !k.trim().is_empty())
        .unwrap_or(donor.keywords);
    let explanation = raw
        .explanation
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| patterns::explanation_for(&primary_emotion, &desired_outcome));
    let sommelier_note = raw
        .sommelier_note
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| patterns::sommelier_note_for(&primary_emotion));

    MoodIntent {
        primary_emotion,
        intensity,
        desired_outcome,
        genres,
        exclude_genres,
        keywords,
        genre_preference: None,
        country_preference: None,
        excluded_catalog_ids: Vec::new(),
        explanation,
        sommelier_note,
        is_small_talk: false,
        conversation_reply: None,
    }
}

/// Classifies a mood message into a search-ready intent.
///
/// Prefers the generative provider when one is configured; any provider
/// failure falls back to the deterministic pattern matcher and is logged
/// rather than surfaced.
pub async fn classify_mood(mood: &str, llm: Option<&dyn LlmClient>) -> MoodIntent {
    let Some(client) = llm else {
        return patterns::analyze_mood(mood);
    };

    if is_small_talk(mood) {
        return match client
            .chat(
                prompt::small_talk_messages(mood),
                &GenerationParams::small_talk(),
            )
            .await
        {
            Ok(reply) => MoodIntent::small_talk(reply.trim()),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "Small-talk reply generation failed, using canned greeting"
                );
                MoodIntent::small_talk(FALLBACK_REPLY)
            }
        };
    }

    match classify_generative(mood, client).await {
        Ok(intent) => intent,
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Generative classification failed, falling back to pattern matching"
            );
            patterns::analyze_mood(mood)
        }
    }
}

async fn classify_generative(mood: &str, client: &dyn LlmClient) -> AppResult<MoodIntent> {
    let text = client
        .chat(
            prompt::classification_messages(mood),
            &GenerationParams::classification(),
        )
        .await
        .map_err(|e| AppError::ClassifierUnavailable(e.to_string()))?;

    match extract_json(&text).and_then(|json| serde_json::from_str::<RawIntent>(&json).ok()) {
        Some(raw) => Ok(sanitize_intent(raw, mood)),
        None => {
            // The model ignored the schema but still wrote something a
            // sommelier might say; hand the text back as conversation
            tracing::info!("Model output was not intent JSON, degrading to conversational reply");
            Ok(MoodIntent::small_talk(text.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use super::llm::{ChatMessage, LlmError, MockLlmClient};

    struct FailingLlmClient;

    #[async_trait]
    impl LlmClient for FailingLlmClient {
        async fn chat(
            &self,
            _messages: Vec<ChatMessage>,
            _params: &GenerationParams,
        ) -> Result<String, LlmError> {
            Err(LlmError::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn test_short_input_is_small_talk() {
        assert!(is_small_talk("hi there"));
        assert!(is_small_talk("thanks!"));
        assert!(is_small_talk("ok"));
    }

    #[test]
    fn test_greeting_prefix_is_small_talk() {
        assert!(is_small_talk("good evening, how was your day then"));
        assert!(is_small_talk("hello there my fine recommendation machine"));
    }

    #[test]
    fn test_greeting_prefix_requires_word_boundary() {
        // "highly" must not match the "hi" greeting
        assert!(!is_small_talk("highly stressed after work this week"));
    }

    #[test]
    fn test_movie_terms_force_classification() {
        assert!(!is_small_talk("what should I watch tonight?"));
        assert!(!is_small_talk("can you recommend a good comedy for us"));
    }

    #[test]
    fn test_question_without_movie_term_is_small_talk() {
        assert!(is_small_talk("how does this whole thing work exactly"));
    }

    #[test]
    fn test_plain_mood_is_not_small_talk() {
        assert!(!is_small_talk(
            "I had the worst day at work today and need something"
        ));
    }

    #[test]
    fn test_sanitize_keeps_complete_model_output() {
        let raw: RawIntent = serde_json::from_str(
            r#"{
                "primaryEmotion": "melancholy",
                "intensity": "low",
                "desiredOutcome": "gentle reflection",
                "genres": [18, 10402],
                "excludeGenres": [27],
                "keywords": "bittersweet,quiet",
                "explanation": "A quiet evening deserves quiet films.",
                "sommelierNote": "Soft tannins, long finish."
            }"#,
        )
        .unwrap();

        let intent = sanitize_intent(raw, "feeling wistful tonight");
        assert_eq!(intent.primary_emotion, "melancholy");
        assert_eq!(intent.intensity, Intensity::Low);
        assert_eq!(intent.genres, vec![18, 10402]);
        assert_eq!(intent.keywords, "bittersweet,quiet");
        assert_eq!(intent.explanation, "A quiet evening deserves quiet films.");
    }

    #[test]
    fn test_sanitize_patches_missing_fields_from_pattern_matcher() {
        let raw: RawIntent =
            serde_json::from_str(r#"{"primaryEmotion": "stressed", "genres": []}"#).unwrap();

        let intent = sanitize_intent(raw, "so stressed about the deadline");
        assert_eq!(intent.primary_emotion, "stressed");
        // Empty genre list is replaced with the matcher's stressed profile
        assert_eq!(intent.genres, vec![35, 16, 10751]);
        assert!(!intent.keywords.is_empty());
        // "so" is an intensifier, picked up by the deterministic scan
        assert_eq!(intent.intensity, Intensity::High);
        assert!(!intent.explanation.is_empty());
        assert!(!intent.sommelier_note.is_empty());
    }

    #[test]
    fn test_sanitize_coerces_invalid_intensity_to_medium() {
        let raw: RawIntent = serde_json::from_str(
            r#"{"primaryEmotion": "sad", "intensity": "overwhelming", "genres": [18]}"#,
        )
        .unwrap();

        let intent = sanitize_intent(raw, "sad");
        assert_eq!(intent.intensity, Intensity::Medium);
    }

    #[test]
    fn test_sanitize_honors_small_talk_flag_with_reply() {
        let raw: RawIntent = serde_json::from_str(
            r#"{"isSmallTalk": true, "conversationReply": "Lovely to meet you!"}"#,
        )
        .unwrap();

        let intent = sanitize_intent(raw, "hello friend, pleasure to meet you");
        assert!(intent.is_small_talk);
        assert_eq!(intent.conversation_reply.as_deref(), Some("Lovely to meet you!"));
    }

    #[test]
    fn test_sanitize_ignores_small_talk_flag_without_reply() {
        let raw: RawIntent = serde_json::from_str(r#"{"isSmallTalk": true}"#).unwrap();

        let intent = sanitize_intent(raw, "feeling lonely lately");
        assert!(!intent.is_small_talk);
        assert_eq!(intent.primary_emotion, "lonely");
    }

    #[tokio::test]
    async fn test_classify_without_provider_uses_patterns() {
        let intent = classify_mood("feeling stressed about everything", None).await;
        assert_eq!(intent.primary_emotion, "stressed");
        assert!(!intent.is_small_talk);
    }

    #[tokio::test]
    async fn test_classify_parses_model_json() {
        let client = MockLlmClient {
            response: r#"```json
{"primaryEmotion": "adventurous", "intensity": "high", "genres": [12, 28], "keywords": "epic,quest"}
```"#
                .to_string(),
        };

        let intent = classify_mood(
            "I want an epic adventure for movie night",
            Some(&client),
        )
        .await;
        assert_eq!(intent.primary_emotion, "adventurous");
        assert_eq!(intent.genres, vec![12, 28]);
        assert_eq!(intent.intensity, Intensity::High);
    }

    #[tokio::test]
    async fn test_classify_degrades_unparseable_output_to_conversation() {
        let client = MockLlmClient {
            response: "I'd love to help! Tell me more about your evening plans.".to_string(),
        };

        let intent = classify_mood(
            "I had the worst day at work today and need something",
            Some(&client),
        )
        .await;
        assert!(intent.is_small_talk);
        assert_eq!(
            intent.conversation_reply.as_deref(),
            Some("I'd love to help! Tell me more about your evening plans.")
        );
    }

    #[tokio::test]
    async fn test_classify_falls_back_to_patterns_on_provider_failure() {
        let intent = classify_mood(
            "feeling really sad after that phone call",
            Some(&FailingLlmClient),
        )
        .await;
        // Silent fallback: a full deterministic intent, not an error
        assert_eq!(intent.primary_emotion, "sad");
        assert_eq!(intent.genres, vec![18, 10749, 35]);
        assert!(!intent.is_small_talk);
    }

    #[tokio::test]
    async fn test_small_talk_provider_failure_uses_canned_greeting() {
        let intent = classify_mood("hi there", Some(&FailingLlmClient)).await;
        assert!(intent.is_small_talk);
        assert_eq!(intent.conversation_reply.as_deref(), Some(FALLBACK_REPLY));
    }

    #[tokio::test]
    async fn test_small_talk_uses_token_capped_reply() {
        let client = MockLlmClient {
            response: "Good evening! In the mood for anything in particular?".to_string(),
        };

        let intent = classify_mood("hey there friend", Some(&client)).await;
        assert!(intent.is_small_talk);
        assert_eq!(
            intent.conversation_reply.as_deref(),
            Some("Good evening! In the mood for anything in particular?")
        );
    }
}
