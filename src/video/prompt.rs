//! Prompt construction for the video-generation provider.
//!
//! `build` renders a `DreamAnalysis` plus style and duration into the
//! single natural-language prompt sent to the provider. Clause order is
//! fixed, connectors are deterministic and the output is
//! whitespace-normalized, so equal inputs produce byte-identical prompts.

use crate::analysis::{DreamAnalysis, ElementKind};
use crate::catalog;

/// Mood score above which the atmosphere clause reads bright.
pub const BRIGHT_MOOD_THRESHOLD: f32 = 0.6;
/// Mood score below which the atmosphere clause reads mysterious.
pub const DARK_MOOD_THRESHOLD: f32 = 0.4;

/// Durations up to this many seconds get fast pacing.
pub const FAST_PACING_MAX_SECS: u32 = 5;
/// Durations up to this many seconds get medium pacing.
pub const MEDIUM_PACING_MAX_SECS: u32 = 8;

fn values_of(analysis: &DreamAnalysis, kind: ElementKind) -> Vec<&str> {
    analysis
        .elements_of(kind)
        .map(|e| e.value.as_str())
        .collect()
}

/// Atmosphere clause derived from the mood score banding.
fn atmosphere(mood_score: f32) -> &'static str {
    if mood_score > BRIGHT_MOOD_THRESHOLD {
        "bright and uplifting atmosphere"
    } else if mood_score < DARK_MOOD_THRESHOLD {
        "mysterious and introspective atmosphere"
    } else {
        "balanced and contemplative atmosphere"
    }
}

/// Pacing clause derived from the clip duration banding.
fn pacing(duration_seconds: u32) -> &'static str {
    if duration_seconds <= FAST_PACING_MAX_SECS {
        "Fast-paced with dynamic transitions and energetic movement."
    } else if duration_seconds <= MEDIUM_PACING_MAX_SECS {
        "Medium-paced with smooth transitions and balanced movement."
    } else {
        "Slow-paced with gentle transitions and contemplative movement."
    }
}

/// Build the generation prompt for an analysis/style/duration triple.
///
/// Pure function: no I/O, no randomness.
pub fn build(analysis: &DreamAnalysis, style: &str, duration_seconds: u32) -> String {
    let environments = values_of(analysis, ElementKind::Environment);
    let objects = values_of(analysis, ElementKind::Objects);
    let actions = values_of(analysis, ElementKind::Actions);
    let emotions = values_of(analysis, ElementKind::Emotions);

    let mut prompt = String::from("A cinematic dream sequence featuring ");

    if !environments.is_empty() {
        let plural = if environments.len() > 1 { "s" } else { "" };
        prompt.push_str(&format!(
            "{} environment{}, ",
            environments.join(" and "),
            plural
        ));
    }

    if !objects.is_empty() || !actions.is_empty() {
        let mut features: Vec<&str> = Vec::with_capacity(objects.len() + actions.len());
        features.extend(&objects);
        features.extend(&actions);
        prompt.push_str(&format!("with {}, ", features.join(", ")));
    }

    if !emotions.is_empty() {
        prompt.push_str(&format!("conveying {} emotions, ", emotions.join(" and ")));
    }

    if !analysis.dominant_themes.is_empty() {
        prompt.push_str(&format!(
            "exploring themes of {}, ",
            analysis.dominant_themes.join(", ")
        ));
    }

    prompt.push_str(&format!(
        "rendered in {}, ",
        catalog::prompt_fragment(style)
    ));

    prompt.push_str(&format!("with {}. ", atmosphere(analysis.mood_score)));
    prompt.push_str(pacing(duration_seconds));

    // Normalize whitespace so the output is stable regardless of clause
    // composition.
    prompt.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_build_is_deterministic() {
        let tags = vec!["joy".to_string()];
        let analysis = analyze("flying over a sunlit forest", &tags);
        let a = build(&analysis, "watercolor", 6);
        let b = build(&analysis, "watercolor", 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scene_clause_mentions_detected_elements() {
        let analysis = analyze("flying over the forest, looking into a mirror", &[]);
        let prompt = build(&analysis, "realistic", 6);
        assert!(prompt.contains("forest"));
        assert!(prompt.contains("mirror"));
        assert!(prompt.contains("flying"));
    }

    #[test]
    fn test_emotion_clause_lists_tags() {
        let tags = vec!["joy".to_string(), "wonder".to_string()];
        let analysis = analyze("a quiet beach at sunset", &tags);
        let prompt = build(&analysis, "realistic", 6);
        assert!(prompt.contains("conveying joy and wonder emotions"));
    }

    #[test]
    fn test_style_fragment_is_included() {
        let analysis = analyze("a quiet beach", &[]);
        let prompt = build(&analysis, "ghibli", 6);
        assert!(prompt.contains("Studio Ghibli style"));
    }

    #[test]
    fn test_unknown_style_uses_realistic_fragment() {
        let analysis = analyze("a quiet beach", &[]);
        let unknown = build(&analysis, "not-a-style", 6);
        let realistic = build(&analysis, "realistic", 6);
        assert_eq!(unknown, realistic);
    }

    #[test]
    fn test_atmosphere_banding() {
        assert_eq!(atmosphere(0.7), "bright and uplifting atmosphere");
        assert_eq!(atmosphere(0.3), "mysterious and introspective atmosphere");
        assert_eq!(atmosphere(0.5), "balanced and contemplative atmosphere");
        // Band edges fall through to balanced.
        assert_eq!(atmosphere(0.6), "balanced and contemplative atmosphere");
        assert_eq!(atmosphere(0.4), "balanced and contemplative atmosphere");
    }

    #[test]
    fn test_pacing_banding() {
        assert!(pacing(3).starts_with("Fast-paced"));
        assert!(pacing(5).starts_with("Fast-paced"));
        assert!(pacing(6).starts_with("Medium-paced"));
        assert!(pacing(8).starts_with("Medium-paced"));
        assert!(pacing(10).starts_with("Slow-paced"));
    }

    #[test]
    fn test_output_has_normalized_whitespace() {
        let analysis = analyze("", &[]);
        let prompt = build(&analysis, "realistic", 6);
        assert!(!prompt.contains("  "));
        assert_eq!(prompt, prompt.trim());
    }
}
