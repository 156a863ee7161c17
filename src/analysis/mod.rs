//! Dream text analysis.
//!
//! Turns free-text dream narration plus user-picked emotion tags into a
//! structured [`DreamAnalysis`]: detected elements with saturating
//! prominence scores, dominant themes, a suggested color palette and a
//! mood score. Everything in this module is pure and deterministic.

mod analyzer;
mod mood;
mod palette;
mod patterns;
mod themes;

pub use analyzer::{analyze, DreamAnalysis, DreamElement, ElementKind};
pub use mood::{mood_score, MOOD_MAX, MOOD_MIN};
pub use palette::{suggested_palette, PALETTE_MAX};
pub use patterns::{
    SymbolPattern, ACTION_PATTERNS, EMOTION_TAG_PROMINENCE, ENVIRONMENT_PATTERNS, OBJECT_PATTERNS,
};
pub use themes::{dominant_themes, ThemePattern, THEMES_MAX, THEME_PATTERNS};
