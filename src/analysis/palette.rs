//! Color palette suggestion for dream analyses.
//!
//! Seeds five colors from a three-tier mood banding, then appends
//! environment- and emotion-specific sets, deduplicates preserving first
//! appearance, and truncates to six.

use super::analyzer::{DreamElement, ElementKind};

/// Maximum number of colors in a suggested palette.
pub const PALETTE_MAX: usize = 6;

/// Mood threshold above which the high-mood seed palette is used.
pub const HIGH_MOOD_THRESHOLD: f32 = 0.7;
/// Mood threshold above which the medium-mood seed palette is used.
pub const MEDIUM_MOOD_THRESHOLD: f32 = 0.4;

/// Seed palette for high mood scores.
pub const HIGH_MOOD_PALETTE: &[&str] = &["#FFD700", "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"];
/// Seed palette for medium mood scores.
pub const MEDIUM_MOOD_PALETTE: &[&str] = &["#A8E6CF", "#DCEDC1", "#FFD3A5", "#FD9853", "#C7CEEA"];
/// Seed palette for low mood scores.
pub const LOW_MOOD_PALETTE: &[&str] = &["#2C3E50", "#34495E", "#7F8C8D", "#95A5A6", "#BDC3C7"];

/// A label with an associated color set.
#[derive(Debug, Clone, Copy)]
pub struct ColorSet {
    pub label: &'static str,
    pub colors: &'static [&'static str],
}

/// Colors contributed by detected environment elements.
pub const ENVIRONMENT_COLORS: &[ColorSet] = &[
    ColorSet {
        label: "underwater",
        colors: &["#006994", "#0099CC", "#66B2FF", "#99CCFF"],
    },
    ColorSet {
        label: "forest",
        colors: &["#228B22", "#32CD32", "#90EE90", "#98FB98"],
    },
    ColorSet {
        label: "city",
        colors: &["#708090", "#778899", "#B0C4DE", "#D3D3D3"],
    },
    ColorSet {
        label: "space",
        colors: &["#191970", "#4B0082", "#8A2BE2", "#9370DB"],
    },
    ColorSet {
        label: "fire",
        colors: &["#FF4500", "#FF6347", "#FF7F50", "#FFA500"],
    },
    ColorSet {
        label: "sky",
        colors: &["#87CEEB", "#87CEFA", "#B0E0E6", "#E0F6FF"],
    },
];

/// Colors contributed by caller-supplied emotion tags.
pub const EMOTION_COLORS: &[ColorSet] = &[
    ColorSet {
        label: "joy",
        colors: &["#FFD700", "#FFA500", "#FF69B4"],
    },
    ColorSet {
        label: "fear",
        colors: &["#2F4F4F", "#696969", "#800000"],
    },
    ColorSet {
        label: "peace",
        colors: &["#B0E0E6", "#E6E6FA", "#F0F8FF"],
    },
    ColorSet {
        label: "love",
        colors: &["#FF69B4", "#FFB6C1", "#FFC0CB"],
    },
    ColorSet {
        label: "mystery",
        colors: &["#4B0082", "#663399", "#8A2BE2"],
    },
];

/// Build the suggested color palette for an analysis.
pub fn suggested_palette(
    mood_score: f32,
    elements: &[DreamElement],
    emotion_tags: &[String],
) -> Vec<String> {
    let mut palette: Vec<String> = Vec::new();
    let mut push = |color: &str| {
        if !palette.iter().any(|c| c == color) {
            palette.push(color.to_string());
        }
    };

    let seed = if mood_score > HIGH_MOOD_THRESHOLD {
        HIGH_MOOD_PALETTE
    } else if mood_score > MEDIUM_MOOD_THRESHOLD {
        MEDIUM_MOOD_PALETTE
    } else {
        LOW_MOOD_PALETTE
    };
    for color in seed {
        push(color);
    }

    for element in elements {
        if element.kind != ElementKind::Environment {
            continue;
        }
        if let Some(set) = ENVIRONMENT_COLORS
            .iter()
            .find(|s| s.label == element.value)
        {
            for color in set.colors {
                push(color);
            }
        }
    }

    for tag in emotion_tags {
        if let Some(set) = EMOTION_COLORS
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(tag))
        {
            for color in set.colors {
                push(color);
            }
        }
    }

    palette.truncate(PALETTE_MAX);
    palette
}
