use crate::models::{Intensity, MoodIntent};

/// The search recipe associated with one detected emotion
#[derive(Debug, PartialEq)]
pub struct MoodProfile {
    pub genres: &'static [u32],
    pub exclude_genres: &'static [u32],
    pub keywords: &'static str,
    pub outcome: &'static str,
}

/// Ordered mood-pattern table. Iteration order is the priority ranking:
/// the first trigger whose full text or stem (trigger minus its last two
/// characters) appears in the lowercased input wins, so entries must not
/// be reordered.
pub const MOOD_PATTERNS: &[(&str, MoodProfile)] = &[
    // Stress and anxiety
    (
        "stressed",
        MoodProfile {
            genres: &[35, 16, 10751], // Comedy, Animation, Family
            exclude_genres: &[27, 53, 80], // Horror, Thriller, Crime
            keywords: "feel-good,heartwarming,uplifting,light-hearted",
            outcome: "relaxation and stress relief",
        },
    ),
    (
        "anxious",
        MoodProfile {
            genres: &[35, 16, 99], // Comedy, Animation, Documentary
            exclude_genres: &[27, 53, 80],
            keywords: "calming,peaceful,gentle,soothing",
            outcome: "peace and tranquility",
        },
    ),
    // Sadness and melancholy
    (
        "sad",
        MoodProfile {
            genres: &[18, 10749, 35], // Drama, Romance, Comedy
            exclude_genres: &[],
            keywords: "hope,redemption,friendship,overcoming,healing",
            outcome: "emotional catharsis and hope",
        },
    ),
    (
        "melancholy",
        MoodProfile {
            genres: &[18, 10402, 36], // Drama, Music, History
            exclude_genres: &[],
            keywords: "bittersweet,contemplative,beautiful,artistic",
            outcome: "thoughtful reflection",
        },
    ),
    (
        "heartbroken",
        MoodProfile {
            genres: &[18, 10749], // Drama, Romance
            exclude_genres: &[],
            keywords: "healing,self-discovery,new-beginnings,empowerment",
            outcome: "emotional healing and growth",
        },
    ),
    // Energy and excitement
    (
        "energetic",
        MoodProfile {
            genres: &[28, 12, 878], // Action, Adventure, Sci-Fi
            exclude_genres: &[],
            keywords: "high-energy,fast-paced,exciting,dynamic",
            outcome: "adrenaline and excitement",
        },
    ),
    (
        "adventurous",
        MoodProfile {
            genres: &[12, 28, 14], // Adventure, Action, Fantasy
            exclude_genres: &[],
            keywords: "epic,journey,quest,exploration,discovery",
            outcome: "vicarious adventure",
        },
    ),
    (
        "restless",
        MoodProfile {
            genres: &[28, 53, 9648], // Action, Thriller, Mystery
            exclude_genres: &[],
            keywords: "engaging,gripping,intense,captivating",
            outcome: "mental engagement",
        },
    ),
    // Contemplative and thoughtful
    (
        "thoughtful",
        MoodProfile {
            genres: &[18, 878, 9648], // Drama, Sci-Fi, Mystery
            exclude_genres: &[],
            keywords: "philosophical,deep,meaningful,thought-provoking",
            outcome: "intellectual stimulation",
        },
    ),
    (
        "nostalgic",
        MoodProfile {
            genres: &[18, 10749, 35], // Drama, Romance, Comedy
            exclude_genres: &[],
            keywords: "coming-of-age,childhood,memories,classic,vintage",
            outcome: "warm nostalgia",
        },
    ),
    (
        "contemplative",
        MoodProfile {
            genres: &[18, 99, 36], // Drama, Documentary, History
            exclude_genres: &[],
            keywords: "introspective,meditative,profound,artistic",
            outcome: "deep reflection",
        },
    ),
    // Social and romantic
    (
        "lonely",
        MoodProfile {
            genres: &[10749, 35, 18], // Romance, Comedy, Drama
            exclude_genres: &[],
            keywords: "friendship,connection,community,belonging",
            outcome: "sense of connection",
        },
    ),
    (
        "romantic",
        MoodProfile {
            genres: &[10749, 35], // Romance, Comedy
            exclude_genres: &[],
            keywords: "love,romance,chemistry,passion,heartwarming",
            outcome: "romantic fulfillment",
        },
    ),
    // Inspiration and motivation
    (
        "unmotivated",
        MoodProfile {
            genres: &[18, 36, 99], // Drama, History, Documentary
            exclude_genres: &[],
            keywords: "inspiring,triumph,perseverance,achievement,success",
            outcome: "motivation and inspiration",
        },
    ),
    (
        "hopeful",
        MoodProfile {
            genres: &[18, 10751, 35], // Drama, Family, Comedy
            exclude_genres: &[],
            keywords: "uplifting,optimistic,positive,encouraging,bright",
            outcome: "renewed hope",
        },
    ),
];

/// Secondary triggers applied when no primary pattern matched:
/// (reported emotion, trigger words, primary profile to borrow)
const SECONDARY_TRIGGERS: &[(&str, &[&str], &str)] = &[
    ("tired", &["tired", "exhausted"], "stressed"),
    ("happy", &["happy", "good"], "hopeful"),
    ("bored", &["bored"], "restless"),
    ("confused", &["confused", "lost"], "contemplative"),
];

const HIGH_INTENSITY_WORDS: &[&str] = &[
    "extremely",
    "very",
    "really",
    "so",
    "incredibly",
    "absolutely",
];

const LOW_INTENSITY_WORDS: &[&str] = &["a bit", "slightly", "somewhat", "kind of", "a little"];

/// Looks up a primary profile by its trigger word
fn profile_for(trigger: &str) -> &'static MoodProfile {
    MOOD_PATTERNS
        .iter()
        .find(|(name, _)| *name == trigger)
        .map(|(_, profile)| profile)
        .unwrap_or(&MOOD_PATTERNS[MOOD_PATTERNS.len() - 1].1)
}

/// The profile used when nothing matched and when a sparse classifier
/// result needs its gaps filled
pub fn default_profile() -> (&'static str, &'static MoodProfile) {
    ("general", profile_for("hopeful"))
}

/// Matches the lowercased mood text against the ordered pattern table,
/// then the secondary triggers, then the default profile.
pub fn match_profile(mood: &str) -> (&'static str, &'static MoodProfile) {
    let mood = mood.to_lowercase();

    for (trigger, profile) in MOOD_PATTERNS {
        let stem = &trigger[..trigger.len() - 2];
        if mood.contains(trigger) || mood.contains(stem) {
            return (trigger, profile);
        }
    }

    for (emotion, triggers, source) in SECONDARY_TRIGGERS {
        if triggers.iter().any(|t| mood.contains(t)) {
            return (emotion, profile_for(source));
        }
    }

    default_profile()
}

/// Scans for intensifier and diminisher words; intensifiers win ties.
pub fn determine_intensity(mood: &str) -> Intensity {
    let mood = mood.to_lowercase();

    if HIGH_INTENSITY_WORDS.iter().any(|w| mood.contains(w)) {
        Intensity::High
    } else if LOW_INTENSITY_WORDS.iter().any(|w| mood.contains(w)) {
        Intensity::Low
    } else {
        Intensity::Medium
    }
}

/// Explanation template for a detected emotion; unknown emotions get the
/// generic template.
pub fn explanation_for(emotion: &str, outcome: &str) -> String {
    match emotion {
        "stressed" => format!(
            "I can sense you're feeling overwhelmed. For {}, I've selected films that offer gentle escapism without additional tension.",
            outcome
        ),
        "sad" => format!(
            "I understand you're going through a difficult time. These films are chosen to provide {} through stories of resilience and human connection.",
            outcome
        ),
        "adventurous" => format!(
            "Your adventurous spirit calls for epic storytelling! These selections will satisfy your craving for {} and grand narratives.",
            outcome
        ),
        "thoughtful" => format!(
            "I appreciate your contemplative mood. These films are curated to provide {} and meaningful cinematic experiences.",
            outcome
        ),
        "nostalgic" => format!(
            "There's something beautiful about looking back. These films will embrace your {} with stories that honor the past.",
            outcome
        ),
        "lonely" => format!(
            "Connection is what you're seeking. These films celebrate {} and the power of human relationships.",
            outcome
        ),
        "romantic" => format!(
            "Love is in the air! These selections are perfect for indulging in {} and heartwarming romance.",
            outcome
        ),
        "tired" => format!(
            "You need something that won't demand too much energy. These gentle films offer {} and easy viewing.",
            outcome
        ),
        "happy" => format!(
            "Your positive energy deserves to be celebrated! These uplifting films will amplify your {}.",
            outcome
        ),
        "bored" => format!(
            "Time to shake things up! These engaging films will provide the {} you're craving.",
            outcome
        ),
        _ => format!(
            "Based on your mood, I've selected films that should provide {} and an enjoyable viewing experience.",
            outcome
        ),
    }
}

/// Stylized sommelier remark for a detected emotion
pub fn sommelier_note_for(emotion: &str) -> String {
    let note = match emotion {
        "stressed" => {
            "Like a warm cup of tea on a rainy day, these films offer comfort without complexity. Each selection provides gentle humor and heartwarming moments that naturally ease tension."
        }
        "sad" => {
            "These films understand that sometimes we need to feel our emotions fully before we can heal. They offer hope without dismissing your current feelings."
        }
        "adventurous" => {
            "Bold flavors for a bold spirit! These cinematic journeys will transport you to worlds where anything is possible and heroes rise to meet their destiny."
        }
        "thoughtful" => {
            "Intellectual palate cleansers that respect your desire for depth. Each film offers layers of meaning that will satisfy your contemplative nature."
        }
        "nostalgic" => {
            "Like finding a treasured photograph, these films capture the bittersweet beauty of memory and the passage of time."
        }
        "lonely" => {
            "Stories that remind us we're never truly alone. These films celebrate the connections that make life meaningful."
        }
        "romantic" => {
            "Pure romantic indulgence - like the perfect wine paired with candlelight. These films understand the language of the heart."
        }
        "tired" => {
            "Comfort food for the soul. These selections require minimal emotional investment while providing maximum satisfaction."
        }
        "happy" => {
            "Effervescent and bright, like champagne bubbles. These films will amplify your joy without overwhelming your senses."
        }
        "bored" => {
            "Sharp, engaging flavors to awaken your interest. These films provide the mental stimulation you're craving."
        }
        _ => {
            "A carefully balanced selection designed to complement your current emotional palette and enhance your viewing experience."
        }
    };
    note.to_string()
}

/// Full deterministic mood analysis: pattern match plus intensity scan plus
/// templated explanation text. Always produces a search-ready intent.
pub fn analyze_mood(mood: &str) -> MoodIntent {
    let (emotion, profile) = match_profile(mood);

    MoodIntent {
        primary_emotion: emotion.to_string(),
        intensity: determine_intensity(mood),
        desired_outcome: profile.outcome.to_string(),
        genres: profile.genres.to_vec(),
        exclude_genres: profile.exclude_genres.to_vec(),
        keywords: profile.keywords.to_string(),
        genre_preference: None,
        country_preference: None,
        excluded_catalog_ids: Vec::new(),
        explanation: explanation_for(emotion, profile.outcome),
        sommelier_note: sommelier_note_for(emotion),
        is_small_talk: false,
        conversation_reply: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_pattern_match() {
        let intent = analyze_mood("I'm feeling stressed about work");
        assert_eq!(intent.primary_emotion, "stressed");
        assert_eq!(intent.genres, vec![35, 16, 10751]);
        assert_eq!(intent.exclude_genres, vec![27, 53, 80]);
        assert_eq!(intent.desired_outcome, "relaxation and stress relief");
        assert!(!intent.is_small_talk);
    }

    #[test]
    fn test_stem_match() {
        // "stress" is the stem of "stressed"
        let intent = analyze_mood("so much stress lately");
        assert_eq!(intent.primary_emotion, "stressed");
    }

    #[test]
    fn test_table_order_is_priority() {
        // Matches both "sad" and "restless"; "sad" sits earlier in the table
        let intent = analyze_mood("sad and restless");
        assert_eq!(intent.primary_emotion, "sad");
        assert_eq!(intent.genres, vec![18, 10749, 35]);
    }

    #[test]
    fn test_secondary_trigger_tired() {
        let intent = analyze_mood("i am tired today");
        assert_eq!(intent.primary_emotion, "tired");
        // Borrows the stressed profile
        assert_eq!(intent.genres, vec![35, 16, 10751]);
        assert_eq!(intent.desired_outcome, "relaxation and stress relief");
    }

    #[test]
    fn test_secondary_trigger_happy() {
        let intent = analyze_mood("feeling happy");
        assert_eq!(intent.primary_emotion, "happy");
        assert_eq!(intent.genres, vec![18, 10751, 35]);
        assert_eq!(intent.desired_outcome, "renewed hope");
    }

    #[test]
    fn test_unmatched_mood_falls_back_to_default_profile() {
        let intent = analyze_mood("blah");
        assert_eq!(intent.primary_emotion, "general");
        assert_eq!(intent.genres, vec![18, 10751, 35]);
        assert!(!intent.keywords.is_empty());
        assert!(!intent.explanation.is_empty());
        assert!(!intent.sommelier_note.is_empty());
    }

    #[test]
    fn test_intensity_high() {
        assert_eq!(
            determine_intensity("I am extremely stressed"),
            Intensity::High
        );
        assert_eq!(determine_intensity("incredibly bored"), Intensity::High);
    }

    #[test]
    fn test_intensity_low() {
        assert_eq!(determine_intensity("a bit stressed"), Intensity::Low);
        assert_eq!(determine_intensity("slightly bored"), Intensity::Low);
    }

    #[test]
    fn test_intensity_default_medium() {
        assert_eq!(determine_intensity("stressed"), Intensity::Medium);
    }

    #[test]
    fn test_explanation_interpolates_outcome() {
        let explanation = explanation_for("stressed", "relaxation and stress relief");
        assert!(explanation.contains("relaxation and stress relief"));
    }

    #[test]
    fn test_unknown_emotion_gets_generic_templates() {
        let explanation = explanation_for("melancholy", "thoughtful reflection");
        assert!(explanation.starts_with("Based on your mood"));
        let note = sommelier_note_for("melancholy");
        assert!(note.starts_with("A carefully balanced selection"));
    }

    #[test]
    fn test_default_profile_is_search_ready() {
        let (emotion, profile) = default_profile();
        assert_eq!(emotion, "general");
        assert!(!profile.genres.is_empty());
        assert!(!profile.keywords.is_empty());
    }
}
