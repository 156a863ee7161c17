//! Mood scoring for dream analyses.
//!
//! The score starts from a neutral 0.5 baseline and is nudged by emotion
//! tags, lexical cues in the raw text, and detected elements, then averaged
//! over a running factor count and clamped into `[0.1, 0.9]`.

use super::analyzer::DreamElement;

/// A label with a fixed mood weight.
#[derive(Debug, Clone, Copy)]
pub struct MoodWeight {
    pub label: &'static str,
    pub weight: f32,
}

/// Lower clamp bound for the final mood score.
pub const MOOD_MIN: f32 = 0.1;
/// Upper clamp bound for the final mood score.
pub const MOOD_MAX: f32 = 0.9;

/// Per-emotion-tag mood weights.
pub const EMOTION_WEIGHTS: &[MoodWeight] = &[
    MoodWeight { label: "joy", weight: 0.8 },
    MoodWeight { label: "happiness", weight: 0.8 },
    MoodWeight { label: "love", weight: 0.7 },
    MoodWeight { label: "peace", weight: 0.6 },
    MoodWeight { label: "excitement", weight: 0.7 },
    MoodWeight { label: "fear", weight: -0.6 },
    MoodWeight { label: "anxiety", weight: -0.5 },
    MoodWeight { label: "terror", weight: -0.8 },
    MoodWeight { label: "sadness", weight: -0.4 },
    MoodWeight { label: "anger", weight: -0.5 },
    MoodWeight { label: "mystery", weight: 0.1 },
    MoodWeight { label: "curiosity", weight: 0.3 },
    MoodWeight { label: "wonder", weight: 0.4 },
    MoodWeight { label: "confusion", weight: -0.2 },
];

/// Words that push the mood score up when present in the text.
pub const POSITIVE_WORDS: &[&str] = &[
    "beautiful", "bright", "warm", "safe", "happy", "peaceful", "wonderful", "amazing",
];

/// Words that push the mood score down when present in the text.
pub const NEGATIVE_WORDS: &[&str] = &[
    "dark", "scary", "cold", "dangerous", "lost", "trapped", "broken", "dead",
];

/// Mood impact of specific detected elements, scaled by prominence.
pub const ELEMENT_MOOD_IMPACT: &[MoodWeight] = &[
    MoodWeight { label: "flying", weight: 0.3 },
    MoodWeight { label: "dancing", weight: 0.4 },
    MoodWeight { label: "swimming", weight: 0.2 },
    MoodWeight { label: "falling", weight: -0.3 },
    MoodWeight { label: "running", weight: -0.1 },
    MoodWeight { label: "hiding", weight: -0.2 },
    MoodWeight { label: "fire", weight: 0.1 },
    MoodWeight { label: "water", weight: 0.1 },
    MoodWeight { label: "mirror", weight: -0.1 },
];

fn lookup(table: &[MoodWeight], label: &str) -> Option<f32> {
    table
        .iter()
        .find(|w| w.label.eq_ignore_ascii_case(label))
        .map(|w| w.weight)
}

/// Compute the mood score for an analyzed dream.
///
/// `text_lower` must already be lowercased; `elements` are the detected
/// elements (including emotion-tag elements). The result is clamped to
/// `[MOOD_MIN, MOOD_MAX]`.
pub fn mood_score(text_lower: &str, emotion_tags: &[String], elements: &[DreamElement]) -> f32 {
    let mut score = 0.5f32;
    let mut factors = 1.0f32;

    for tag in emotion_tags {
        if let Some(weight) = lookup(EMOTION_WEIGHTS, tag) {
            score += weight;
        }
        factors += 1.0;
    }

    for word in POSITIVE_WORDS {
        if text_lower.contains(word) {
            score += 0.2;
            factors += 0.5;
        }
    }
    for word in NEGATIVE_WORDS {
        if text_lower.contains(word) {
            score -= 0.2;
            factors += 0.5;
        }
    }

    // Only elements with a listed weight contribute an adjustment, and only
    // adjustments enter the factor count.
    for element in elements {
        if let Some(impact) = lookup(ELEMENT_MOOD_IMPACT, &element.value) {
            score += impact * element.prominence;
            factors += 0.3;
        }
    }

    (score / factors).clamp(MOOD_MIN, MOOD_MAX)
}
