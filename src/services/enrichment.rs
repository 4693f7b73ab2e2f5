//! Flavor content generation: pairings, double features, palette cleansers,
//! and contextual viewing notes. Everything here is a pure function of the
//! resolved intent and the viewing-time context; no external calls.

use crate::context::{TimeContext, TimeOfDay};
use crate::models::{DoubleFeature, MoodIntent, PerfectPairing};

/// Bundle of secondary content the assembler folds into a recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub pairing: PerfectPairing,
    pub double_feature: Option<DoubleFeature>,
    pub palette_cleansers: Vec<String>,
    pub contextual_note: String,
}

/// Genres that call for a palette cleanser afterwards:
/// drama, horror, thriller, crime
const HEAVY_GENRES: &[u32] = &[18, 27, 53, 80];

/// Derives the full enrichment bundle for a resolved intent
pub fn generate(intent: &MoodIntent, mood_text: &str, time: &TimeContext) -> Enrichment {
    Enrichment {
        pairing: perfect_pairing(&intent.genres, mood_text, time.time_of_day),
        double_feature: double_feature(&intent.genres, mood_text),
        palette_cleansers: palette_cleansers(&intent.genres),
        contextual_note: contextual_note(time.time_of_day, None),
    }
}

fn pairing(food: &str, drink: &str, description: &str) -> PerfectPairing {
    PerfectPairing {
        food: food.to_string(),
        drink: drink.to_string(),
        description: description.to_string(),
    }
}

/// Base pairing for a genre code; unmapped codes get the comedy pairing
fn base_pairing(genre: u32) -> PerfectPairing {
    match genre {
        // Romance
        10749 => pairing(
            "Dark chocolate and strawberries",
            "A glass of red wine or champagne",
            "The sweetness complements the romantic atmosphere, creating an indulgent viewing experience.",
        ),
        // Horror
        27 => pairing(
            "Spicy wings or jalapeño poppers",
            "Strong coffee or an energy drink",
            "The heat matches the intensity, while caffeine keeps you alert for those jump scares.",
        ),
        // Drama
        18 => pairing(
            "Artisanal cheese and crackers",
            "A sophisticated wine or herbal tea",
            "Refined flavors that complement the emotional depth without overwhelming the experience.",
        ),
        // Action
        28 => pairing(
            "Pizza slices or loaded fries",
            "Cold beer or sports drink",
            "Hearty, satisfying food that matches the high-energy pace of the action.",
        ),
        // Animation
        16 => pairing(
            "Colorful candy and cookies",
            "Hot chocolate or fruit juice",
            "Playful treats that capture the whimsical spirit of animated storytelling.",
        ),
        // Science fiction
        878 => pairing(
            "Futuristic snacks like molecular gastronomy or space ice cream",
            "Blue cocktails or energy drinks",
            "Innovative flavors that match the forward-thinking themes of science fiction.",
        ),
        // Documentary
        99 => pairing(
            "Healthy trail mix or fruit",
            "Green tea or kombucha",
            "Mindful snacking that keeps you focused on learning without heavy distractions.",
        ),
        // Comedy, and the default for everything unmapped
        _ => pairing(
            "Buttered popcorn and nachos",
            "Craft beer or a fruity cocktail",
            "Classic comfort snacks that won't distract from the laughs and keep the mood light.",
        ),
    }
}

/// Whether a genre code has its own entry in the base pairing table
fn has_base_pairing(genre: u32) -> bool {
    matches!(genre, 10749 | 35 | 27 | 18 | 28 | 16 | 878 | 99)
}

/// Snack and drink pairing for the intent genres, adjusted for the time of
/// day (food and drink only) and then for mood keywords found in the raw
/// mood text (first match wins: stressed, sad, celebratory).
pub fn perfect_pairing(genres: &[u32], mood_text: &str, time_of_day: TimeOfDay) -> PerfectPairing {
    let primary = genres
        .iter()
        .copied()
        .find(|g| has_base_pairing(*g))
        .unwrap_or(35);
    let mut result = base_pairing(primary);

    match time_of_day {
        TimeOfDay::Morning => {
            result.food = "Fresh pastries or breakfast items".to_string();
            result.drink = "Coffee or fresh juice".to_string();
        }
        TimeOfDay::Afternoon => {
            result.food = "Light sandwiches or salads".to_string();
            result.drink = "Iced tea or sparkling water".to_string();
        }
        TimeOfDay::Evening => {
            result.drink = "Wine or cocktails".to_string();
        }
        TimeOfDay::LateNight => {
            result.food = "Comfort snacks like ice cream".to_string();
            result.drink = "Warm milk or decaf tea".to_string();
        }
    }

    let mood_lower = mood_text.to_lowercase();
    if mood_lower.contains("stressed") {
        result = pairing(
            "Comfort food like mac and cheese",
            "Chamomile tea or warm cocoa",
            "Soothing comfort foods that help you relax and unwind.",
        );
    } else if mood_lower.contains("sad") {
        result = pairing(
            "Your favorite comfort treats",
            "Warm beverages like tea or hot chocolate",
            "Familiar flavors that provide emotional comfort during difficult moments.",
        );
    } else if mood_lower.contains("celebratory") {
        result = pairing(
            "Gourmet snacks or desserts",
            "Champagne or festive cocktails",
            "Special treats that enhance the celebratory mood.",
        );
    }

    result
}

fn feature(theme: &str, description: &str, movies: [&str; 2]) -> DoubleFeature {
    DoubleFeature {
        theme: theme.to_string(),
        description: description.to_string(),
        movies: movies.iter().map(|m| m.to_string()).collect(),
    }
}

/// Themed companion-film pairing for the intent genres; first matching code
/// in priority order wins, no match omits the feature entirely.
pub fn double_feature(genres: &[u32], mood_text: &str) -> Option<DoubleFeature> {
    if genres.contains(&878) {
        return Some(feature(
            "Artificial Intelligence & Humanity",
            "Explore the relationship between humans and AI through different cinematic lenses.",
            ["Blade Runner 2049", "Her"],
        ));
    }
    if genres.contains(&18) && mood_text.to_lowercase().contains("nostalgic") {
        return Some(feature(
            "Coming of Age Stories",
            "Two perspectives on growing up and finding your place in the world.",
            ["Lady Bird", "Eighth Grade"],
        ));
    }
    if genres.contains(&80) || genres.contains(&28) {
        return Some(feature(
            "Heist & Crime Capers",
            "The perfect double feature for fans of clever criminals and elaborate schemes.",
            ["Ocean's Eleven", "The Italian Job"],
        ));
    }
    if genres.contains(&10749) {
        return Some(feature(
            "Romantic Comedies Through Time",
            "Classic and modern takes on love and laughter.",
            ["When Harry Met Sally", "The Big Sick"],
        ));
    }
    if genres.contains(&16) {
        return Some(feature(
            "Animated Masterpieces",
            "Two stunning examples of animation as an art form.",
            ["Spirited Away", "WALL-E"],
        ));
    }
    if genres.contains(&53) {
        return Some(feature(
            "Psychological Thrillers",
            "Mind-bending stories that will keep you guessing until the end.",
            ["Shutter Island", "Gone Girl"],
        ));
    }
    if genres.contains(&10402) {
        return Some(feature(
            "Musical Journeys",
            "Celebrate the power of music through different storytelling approaches.",
            ["La La Land", "A Star Is Born"],
        ));
    }
    None
}

/// Lighter follow-up suggestions, offered only after heavy genres
pub fn palette_cleansers(genres: &[u32]) -> Vec<String> {
    let is_heavy = genres.iter().any(|g| HEAVY_GENRES.contains(g));
    if !is_heavy {
        return Vec::new();
    }

    vec![
        "A delightful Pixar short film to restore your faith in humanity".to_string(),
        "A nature documentary segment showcasing beautiful landscapes".to_string(),
        "A feel-good music video or concert performance".to_string(),
        "A comedy sketch or stand-up routine to lighten the mood".to_string(),
        "A peaceful cooking or crafting tutorial video".to_string(),
    ]
}

/// Viewing note for the time of day, with an optional weather flourish
pub fn contextual_note(time_of_day: TimeOfDay, weather: Option<&str>) -> String {
    let mut note = match time_of_day {
        TimeOfDay::Morning => {
            "Perfect for a leisurely morning viewing with your coffee. The gentle pace will ease you into the day."
        }
        TimeOfDay::Afternoon => {
            "An ideal afternoon escape that won't leave you too emotionally drained for the rest of your day."
        }
        TimeOfDay::Evening => {
            "The perfect way to unwind after a long day. Settle in with some comfort food and enjoy."
        }
        TimeOfDay::LateNight => {
            "A cozy late-night viewing that will give you pleasant dreams. Keep the lights dim for the full experience."
        }
    }
    .to_string();

    let weather_note = match weather {
        Some("rainy") => {
            Some("The perfect companion for a rainy day - let the weather outside enhance the cozy atmosphere.")
        }
        Some("sunny") => {
            Some("While it's beautiful outside, sometimes the best adventures happen indoors with a great film.")
        }
        Some("snowy") => {
            Some("Bundle up with a warm blanket and let this film transport you somewhere magical.")
        }
        Some("cloudy") => {
            Some("The overcast sky creates the perfect ambiance for this cinematic journey.")
        }
        _ => None,
    };

    if let Some(extra) = weather_note {
        note.push(' ');
        note.push_str(extra);
    }

    note
}
