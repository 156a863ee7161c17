//! Dream text analysis entry point.
//!
//! `analyze` is a total function: any UTF-8 input (including the empty
//! string) yields a well-formed `DreamAnalysis` with at least one element,
//! a mood score clamped to `[0.1, 0.9]`, one to four dominant themes and
//! one to six palette colors. There is no I/O and no randomness, so equal
//! inputs always produce equal output.

use serde::{Deserialize, Serialize};

use super::mood;
use super::palette;
use super::patterns::{
    self, SymbolPattern, ACTION_CAP, ACTION_PATTERNS, ACTION_WEIGHT, EMOTION_TAG_PROMINENCE,
    ENVIRONMENT_CAP, ENVIRONMENT_PATTERNS, ENVIRONMENT_WEIGHT, OBJECT_CAP, OBJECT_PATTERNS,
    OBJECT_WEIGHT,
};
use super::themes;

/// Category of a detected dream element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Environment,
    Objects,
    Actions,
    Emotions,
}

/// A single detected symbol with a saturating prominence score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub value: String,
    pub prominence: f32,
}

/// Structured semantic analysis of one dream narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamAnalysis {
    pub elements: Vec<DreamElement>,
    pub dominant_themes: Vec<String>,
    pub suggested_palette: Vec<String>,
    pub mood_score: f32,
}

impl DreamAnalysis {
    /// Elements of one category, in detection order.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &DreamElement> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }
}

fn detect_category(
    text_lower: &str,
    table: &[SymbolPattern],
    kind: ElementKind,
    weight: f32,
    cap: f32,
    out: &mut Vec<DreamElement>,
) {
    for pattern in table {
        let hits = patterns::trigger_hits(pattern, text_lower);
        if hits > 0 {
            out.push(DreamElement {
                kind,
                value: pattern.label.to_string(),
                prominence: (hits as f32 * weight).min(cap),
            });
        }
    }
}

/// Analyze raw dream text plus user-picked emotion tags.
pub fn analyze(text: &str, emotion_tags: &[String]) -> DreamAnalysis {
    let text_lower = text.to_lowercase();
    let mut elements: Vec<DreamElement> = Vec::new();

    detect_category(
        &text_lower,
        ENVIRONMENT_PATTERNS,
        ElementKind::Environment,
        ENVIRONMENT_WEIGHT,
        ENVIRONMENT_CAP,
        &mut elements,
    );
    detect_category(
        &text_lower,
        OBJECT_PATTERNS,
        ElementKind::Objects,
        OBJECT_WEIGHT,
        OBJECT_CAP,
        &mut elements,
    );
    detect_category(
        &text_lower,
        ACTION_PATTERNS,
        ElementKind::Actions,
        ACTION_WEIGHT,
        ACTION_CAP,
        &mut elements,
    );

    for tag in emotion_tags {
        elements.push(DreamElement {
            kind: ElementKind::Emotions,
            value: tag.clone(),
            prominence: EMOTION_TAG_PROMINENCE,
        });
    }

    // Never return an empty analysis: fall back to a generic scene.
    if elements.is_empty() {
        elements.push(DreamElement {
            kind: ElementKind::Environment,
            value: "surreal landscape".to_string(),
            prominence: 0.8,
        });
        elements.push(DreamElement {
            kind: ElementKind::Objects,
            value: "mysterious objects".to_string(),
            prominence: 0.6,
        });
        elements.push(DreamElement {
            kind: ElementKind::Actions,
            value: "wandering".to_string(),
            prominence: 0.5,
        });
    }

    let mood_score = mood::mood_score(&text_lower, emotion_tags, &elements);
    let suggested_palette = palette::suggested_palette(mood_score, &elements, emotion_tags);
    let dominant_themes = themes::dominant_themes(&text_lower, &elements, emotion_tags);

    DreamAnalysis {
        elements,
        dominant_themes,
        suggested_palette,
        mood_score,
    }
}
