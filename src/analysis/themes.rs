//! Dominant theme extraction.
//!
//! Each theme pattern scores keyword hits in the text (+1.0), the presence
//! of an associated element (+0.5), and the presence of an associated
//! emotion tag (+0.7). Themes scoring at least 1.0 are included, evaluated
//! in declared order, truncated to four.

use super::analyzer::DreamElement;

/// Maximum number of dominant themes reported.
pub const THEMES_MAX: usize = 4;

/// Score a theme must reach to be included.
pub const THEME_THRESHOLD: f32 = 1.0;

/// Score contribution of one keyword hit in the text.
pub const KEYWORD_SCORE: f32 = 1.0;
/// Score contribution of an associated element being present.
pub const ELEMENT_SCORE: f32 = 0.5;
/// Score contribution of an associated emotion tag being present.
pub const EMOTION_SCORE: f32 = 0.7;

/// One theme with its detection lists.
#[derive(Debug, Clone, Copy)]
pub struct ThemePattern {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub elements: &'static [&'static str],
    pub emotions: &'static [&'static str],
}

/// Theme detection table, evaluated in declared order.
pub const THEME_PATTERNS: &[ThemePattern] = &[
    ThemePattern {
        name: "transformation",
        keywords: &["change", "transform", "different", "becoming", "turning into", "metamorphosis"],
        elements: &["mirror", "door", "stairs"],
        emotions: &["mystery", "fear", "wonder"],
    },
    ThemePattern {
        name: "journey",
        keywords: &["path", "road", "travel", "journey", "destination", "walking", "moving"],
        elements: &["bridge", "car", "stairs", "door"],
        emotions: &["curiosity", "excitement", "anxiety"],
    },
    ThemePattern {
        name: "pursuit",
        keywords: &["chase", "follow", "run", "escape", "flee", "hunting", "searching"],
        elements: &["running", "hiding", "car"],
        emotions: &["fear", "anxiety", "excitement"],
    },
    ThemePattern {
        name: "loss",
        keywords: &["lost", "missing", "gone", "disappear", "vanish", "forgotten"],
        elements: &["searching", "crying", "empty"],
        emotions: &["sadness", "fear", "anxiety"],
    },
    ThemePattern {
        name: "discovery",
        keywords: &["find", "discover", "reveal", "uncover", "hidden", "secret"],
        elements: &["door", "key", "book", "light"],
        emotions: &["curiosity", "wonder", "excitement"],
    },
    ThemePattern {
        name: "freedom",
        keywords: &["free", "escape", "liberate", "break", "open", "release"],
        elements: &["flying", "running", "door", "sky"],
        emotions: &["joy", "relief", "excitement"],
    },
    ThemePattern {
        name: "connection",
        keywords: &["together", "meet", "friend", "family", "love", "unite"],
        elements: &["talking", "dancing", "bridge"],
        emotions: &["love", "joy", "peace"],
    },
    ThemePattern {
        name: "conflict",
        keywords: &["fight", "battle", "struggle", "war", "argue", "compete"],
        elements: &["fighting", "running", "hiding"],
        emotions: &["anger", "fear", "anxiety"],
    },
];

/// Extract the dominant themes for an analyzed dream.
///
/// `text_lower` must already be lowercased. When no theme reaches the
/// threshold, defaults to `["emotional journey"]` if any emotion tags were
/// supplied, otherwise `["mystery", "exploration"]`.
pub fn dominant_themes(
    text_lower: &str,
    elements: &[DreamElement],
    emotion_tags: &[String],
) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();

    for pattern in THEME_PATTERNS {
        let mut score = 0.0f32;

        for keyword in pattern.keywords {
            if text_lower.contains(keyword) {
                score += KEYWORD_SCORE;
            }
        }
        for value in pattern.elements {
            if elements.iter().any(|e| e.value == *value) {
                score += ELEMENT_SCORE;
            }
        }
        for emotion in pattern.emotions {
            if emotion_tags.iter().any(|t| t.eq_ignore_ascii_case(emotion)) {
                score += EMOTION_SCORE;
            }
        }

        if score >= THEME_THRESHOLD {
            themes.push(pattern.name.to_string());
        }
    }

    if themes.is_empty() {
        if emotion_tags.is_empty() {
            themes.push("mystery".to_string());
            themes.push("exploration".to_string());
        } else {
            themes.push("emotional journey".to_string());
        }
    }

    themes.truncate(THEMES_MAX);
    themes
}
