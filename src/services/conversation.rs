//! Multi-turn conversation handling. When a request carries the previous
//! turn's recommendations, cheap phrase extraction resolves rejections and
//! explicit preferences locally; only turns with no structured signal fall
//! through to full mood classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{genre_id_by_name, genre_name, Intensity, MoodIntent};
use crate::services::classifier::{self, llm::LlmClient, patterns};

/// Phrases that mark the previous turn's recommendations as rejected
const REJECTION_PHRASES: &[&str] = &[
    "don't like",
    "dislike",
    "not in the mood",
    "something else",
    "different",
    "change",
    "not interested",
];

static DISLIKED_GENRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:don'?t|not)\s+(?:like|want|into)\s+(\w+)").unwrap());

static GENRE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i like|i want|how about|what about|looking for|prefer)\s+(\w+)").unwrap()
});

static COUNTRY_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:movies?|films?)\s+from\s+([a-z ]+?)\s*(?:[.!?,]|$)").unwrap());

static SIMILAR_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:like|similar to|enjoyed)\s+['"]([^'"]+)['"]"#).unwrap());

/// Resolves a conversation turn into a search-ready intent.
///
/// First turns (no previous ids) go straight to classification. Follow-up
/// turns are first checked for a rejection of the previous shelf, then for
/// explicit genre/country/similar-title preferences; both produce a
/// refinement intent locally without a generative call. Anything else is
/// treated as a brand-new request and classified in full.
pub async fn resolve(mood: &str, previous_ids: &[u64], llm: Option<&dyn LlmClient>) -> MoodIntent {
    if previous_ids.is_empty() {
        return classifier::classify_mood(mood, llm).await;
    }

    let lowered = mood.to_lowercase();
    if REJECTION_PHRASES.iter().any(|p| lowered.contains(p)) {
        tracing::info!(excluded = previous_ids.len(), "Previous shelf rejected, refining");
        return rejection_intent(mood, previous_ids);
    }

    if let Some(intent) = preference_intent(mood, previous_ids) {
        tracing::info!(excluded = previous_ids.len(), "Explicit preference extracted");
        return intent;
    }

    classifier::classify_mood(mood, llm).await
}

/// Neutral refinement intent: generic genres minus anything the user called
/// out as disliked, with the previous shelf excluded. Removing every genre
/// leaves nothing to search on, so that case turns into a clarifying
/// question instead.
fn rejection_intent(mood: &str, previous_ids: &[u64]) -> MoodIntent {
    let (_, profile) = patterns::default_profile();
    let mut genres: Vec<u32> = profile.genres.to_vec();

    for capture in DISLIKED_GENRE.captures_iter(mood) {
        if let Some(code) = genre_code_for_word(&capture[1]) {
            genres.retain(|g| *g != code);
        }
    }

    let mut intent = MoodIntent {
        primary_emotion: "neutral".to_string(),
        intensity: Intensity::Medium,
        desired_outcome: "a better match".to_string(),
        genres,
        exclude_genres: Vec::new(),
        keywords: profile.keywords.to_string(),
        genre_preference: None,
        country_preference: None,
        excluded_catalog_ids: previous_ids.to_vec(),
        explanation:
            "My apologies, those selections didn't resonate. Let me curate a fresh set along different lines."
                .to_string(),
        sommelier_note: patterns::sommelier_note_for("neutral"),
        is_small_talk: false,
        conversation_reply: None,
    };

    if intent.genres.is_empty() {
        intent.is_small_talk = true;
        intent.conversation_reply = Some(
            "No problem, let's recalibrate. What would you like instead? You can name a genre, describe the mood you're after, or ask for films from a particular country."
                .to_string(),
        );
    }

    intent
}

/// Builds a refinement intent from explicit preference phrases, or None
/// when the turn carries no extractable signal
fn preference_intent(mood: &str, previous_ids: &[u64]) -> Option<MoodIntent> {
    let genre_code = GENRE_PHRASE
        .captures(mood)
        .and_then(|c| genre_code_for_word(&c[1]));
    let country = COUNTRY_PHRASE
        .captures(mood)
        .map(|c| c[1].trim().to_string());
    let similar_title = SIMILAR_TITLE.captures(mood).map(|c| c[1].to_string());

    if genre_code.is_none() && country.is_none() && similar_title.is_none() {
        return None;
    }

    let (_, profile) = patterns::default_profile();
    let mut intent = MoodIntent {
        primary_emotion: "interested".to_string(),
        intensity: Intensity::Medium,
        desired_outcome: "a tailored selection".to_string(),
        genres: profile.genres.to_vec(),
        exclude_genres: Vec::new(),
        keywords: profile.keywords.to_string(),
        genre_preference: None,
        country_preference: None,
        excluded_catalog_ids: previous_ids.to_vec(),
        explanation: "Let me refine my recommendations based on your preferences.".to_string(),
        sommelier_note: patterns::sommelier_note_for("interested"),
        is_small_talk: false,
        conversation_reply: None,
    };

    if let Some(code) = genre_code {
        intent.genres = vec![code];
        intent.genre_preference = Some(vec![code]);
        if let Some(name) = genre_name(code) {
            intent
                .explanation
                .push_str(&format!(" Focusing on {} films.", name.to_lowercase()));
        }
    }

    if let Some(country) = country {
        intent
            .explanation
            .push_str(&format!(" Searching for films from {}.", country));
        intent.country_preference = Some(country);
    }

    if let Some(title) = similar_title {
        intent.keywords = format!("similar to {},{}", title, intent.keywords);
        intent
            .explanation
            .push_str(&format!(" Finding stories similar to '{}'.", title));
    }

    Some(intent)
}

/// Resolves a captured word to a genre code, tolerating plural forms
fn genre_code_for_word(word: &str) -> Option<u32> {
    genre_id_by_name(word)
        .or_else(|| {
            word.strip_suffix("ies")
                .and_then(|stem| genre_id_by_name(&format!("{}y", stem)))
        })
        .or_else(|| word.strip_suffix('s').and_then(genre_id_by_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_turn_delegates_to_classifier() {
        let intent = resolve("I'm feeling stressed about work", &[], None).await;
        assert_eq!(intent.primary_emotion, "stressed");
        assert_eq!(intent.genres, vec![35, 16, 10751]);
    }

    #[tokio::test]
    async fn test_rejection_excludes_previous_shelf() {
        let intent = resolve("I don't like these", &[1, 2, 3], None).await;
        assert_eq!(intent.primary_emotion, "neutral");
        assert_eq!(intent.excluded_catalog_ids, vec![1, 2, 3]);
        // Generic genres stay intact when no specific dislike is named
        assert_eq!(intent.genres, vec![18, 10751, 35]);
        assert!(!intent.is_small_talk);
        assert!(intent.explanation.contains("apologies"));
    }

    #[tokio::test]
    async fn test_rejection_removes_disliked_genre() {
        let intent = resolve("I don't like drama movies", &[7], None).await;
        assert_eq!(intent.genres, vec![10751, 35]);
        assert_eq!(intent.excluded_catalog_ids, vec![7]);
    }

    #[tokio::test]
    async fn test_rejection_of_every_genre_asks_to_clarify() {
        let intent = resolve(
            "I don't like drama, not into comedy, and I don't want family stuff",
            &[4, 5],
            None,
        )
        .await;
        assert!(intent.is_small_talk);
        let reply = intent.conversation_reply.unwrap();
        assert!(reply.contains("genre"));
        assert!(reply.contains("country"));
    }

    #[tokio::test]
    async fn test_genre_preference_without_generative_call() {
        let intent = resolve("how about comedy movies", &[9], None).await;
        assert_eq!(intent.genres, vec![35]);
        assert_eq!(intent.genre_preference, Some(vec![35]));
        assert_eq!(intent.excluded_catalog_ids, vec![9]);
        assert!(intent.explanation.contains("comedy films"));
    }

    #[tokio::test]
    async fn test_genre_preference_tolerates_plurals() {
        let intent = resolve("looking for thrillers tonight", &[2], None).await;
        assert_eq!(intent.genres, vec![53]);

        let intent = resolve("i want documentaries", &[2], None).await;
        assert_eq!(intent.genres, vec![99]);
    }

    #[tokio::test]
    async fn test_country_preference_extracted() {
        let intent = resolve("show me films from south korea.", &[3], None).await;
        assert_eq!(intent.country_preference.as_deref(), Some("south korea"));
        assert!(intent.explanation.contains("south korea"));
    }

    #[tokio::test]
    async fn test_similar_title_prepends_keywords() {
        let intent = resolve("I enjoyed 'The Matrix' a lot", &[6], None).await;
        assert!(intent.keywords.starts_with("similar to The Matrix,"));
        assert!(intent.explanation.contains("'The Matrix'"));
    }

    #[tokio::test]
    async fn test_combined_preferences_compose_explanation() {
        let intent = resolve("how about comedy movies from france.", &[1], None).await;
        assert_eq!(intent.genres, vec![35]);
        assert_eq!(intent.country_preference.as_deref(), Some("france"));
        assert!(intent.explanation.contains("comedy films"));
        assert!(intent.explanation.contains("from france"));
    }

    #[tokio::test]
    async fn test_unstructured_followup_reclassifies() {
        let intent = resolve("now i feel lonely tonight", &[1, 2], None).await;
        // Full classification runs; phrase extraction found nothing
        assert_eq!(intent.primary_emotion, "lonely");
        assert!(intent.excluded_catalog_ids.is_empty());
    }

    #[tokio::test]
    async fn test_rejection_wins_over_preference() {
        let intent = resolve("something else, i like action", &[8], None).await;
        assert_eq!(intent.primary_emotion, "neutral");
        assert!(intent.genre_preference.is_none());
    }

    #[test]
    fn test_genre_word_resolution() {
        assert_eq!(genre_code_for_word("comedy"), Some(35));
        assert_eq!(genre_code_for_word("comedies"), Some(35));
        assert_eq!(genre_code_for_word("thrillers"), Some(53));
        assert_eq!(genre_code_for_word("documentaries"), Some(99));
        assert_eq!(genre_code_for_word("pizza"), None);
    }
}
