//! Symbol pattern tables for dream element detection.
//!
//! Each category is a fixed-order table of canonical labels with their
//! trigger substrings. Tables are iterated in declared order so analysis
//! output is deterministic for a given input.

/// One canonical dream symbol and the substrings that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPattern {
    /// Canonical element label emitted into the analysis.
    pub label: &'static str,
    /// Lowercase substrings counted against the dream text.
    pub triggers: &'static [&'static str],
}

/// Per-hit prominence weight for environment matches.
pub const ENVIRONMENT_WEIGHT: f32 = 0.3;
/// Prominence cap for environment elements.
pub const ENVIRONMENT_CAP: f32 = 1.0;

/// Per-hit prominence weight for object matches.
pub const OBJECT_WEIGHT: f32 = 0.25;
/// Prominence cap for object elements.
pub const OBJECT_CAP: f32 = 0.8;

/// Per-hit prominence weight for action matches.
pub const ACTION_WEIGHT: f32 = 0.3;
/// Prominence cap for action elements.
pub const ACTION_CAP: f32 = 0.9;

/// Fixed prominence assigned to caller-supplied emotion tags.
pub const EMOTION_TAG_PROMINENCE: f32 = 0.7;

/// Environment symbols recognized in dream text.
pub const ENVIRONMENT_PATTERNS: &[SymbolPattern] = &[
    SymbolPattern {
        label: "underwater",
        triggers: &["ocean", "sea", "underwater", "swimming", "diving", "fish", "coral"],
    },
    SymbolPattern {
        label: "forest",
        triggers: &["forest", "trees", "woods", "jungle", "leaves", "branches", "nature"],
    },
    SymbolPattern {
        label: "city",
        triggers: &["city", "building", "street", "urban", "skyscraper", "traffic", "crowd"],
    },
    SymbolPattern {
        label: "mountains",
        triggers: &["mountain", "peak", "cliff", "valley", "hiking", "summit", "rocks"],
    },
    SymbolPattern {
        label: "sky",
        triggers: &["sky", "clouds", "flying", "floating", "air", "wind", "birds"],
    },
    SymbolPattern {
        label: "space",
        triggers: &["space", "stars", "planets", "galaxy", "universe", "cosmic", "void"],
    },
    SymbolPattern {
        label: "house",
        triggers: &["house", "home", "room", "bedroom", "kitchen", "living room", "basement"],
    },
    SymbolPattern {
        label: "school",
        triggers: &["school", "classroom", "teacher", "students", "desk", "hallway", "library"],
    },
    SymbolPattern {
        label: "hospital",
        triggers: &["hospital", "doctor", "nurse", "patient", "medical", "surgery", "emergency"],
    },
    SymbolPattern {
        label: "beach",
        triggers: &["beach", "sand", "waves", "shore", "sunset", "seashells", "tide"],
    },
];

/// Object symbols recognized in dream text.
pub const OBJECT_PATTERNS: &[SymbolPattern] = &[
    SymbolPattern {
        label: "mirror",
        triggers: &["mirror", "reflection", "glass", "looking glass"],
    },
    SymbolPattern {
        label: "door",
        triggers: &["door", "entrance", "exit", "doorway", "portal"],
    },
    SymbolPattern {
        label: "water",
        triggers: &["water", "river", "lake", "pond", "stream", "rain"],
    },
    SymbolPattern {
        label: "fire",
        triggers: &["fire", "flame", "burning", "smoke", "heat", "light"],
    },
    SymbolPattern {
        label: "car",
        triggers: &["car", "vehicle", "driving", "road", "highway", "traffic"],
    },
    SymbolPattern {
        label: "phone",
        triggers: &["phone", "call", "calling", "telephone", "mobile"],
    },
    SymbolPattern {
        label: "book",
        triggers: &["book", "reading", "pages", "story", "words", "text"],
    },
    SymbolPattern {
        label: "stairs",
        triggers: &["stairs", "steps", "climbing", "ascending", "descending"],
    },
    SymbolPattern {
        label: "bridge",
        triggers: &["bridge", "crossing", "over", "connection", "span"],
    },
    SymbolPattern {
        label: "key",
        triggers: &["key", "lock", "unlock", "open", "access"],
    },
];

/// Action symbols recognized in dream text.
pub const ACTION_PATTERNS: &[SymbolPattern] = &[
    SymbolPattern {
        label: "flying",
        triggers: &["flying", "soaring", "floating", "levitating", "airborne"],
    },
    SymbolPattern {
        label: "running",
        triggers: &["running", "chasing", "pursuing", "sprinting", "racing"],
    },
    SymbolPattern {
        label: "falling",
        triggers: &["falling", "dropping", "plummeting", "tumbling", "descending"],
    },
    SymbolPattern {
        label: "swimming",
        triggers: &["swimming", "diving", "floating", "underwater", "submerged"],
    },
    SymbolPattern {
        label: "climbing",
        triggers: &["climbing", "ascending", "scaling", "mounting", "rising"],
    },
    SymbolPattern {
        label: "searching",
        triggers: &["searching", "looking", "seeking", "finding", "hunting"],
    },
    SymbolPattern {
        label: "hiding",
        triggers: &["hiding", "concealing", "escaping", "avoiding", "fleeing"],
    },
    SymbolPattern {
        label: "dancing",
        triggers: &["dancing", "moving", "rhythm", "music", "celebration"],
    },
    SymbolPattern {
        label: "fighting",
        triggers: &["fighting", "battling", "struggling", "conflict", "war"],
    },
    SymbolPattern {
        label: "talking",
        triggers: &["talking", "speaking", "conversation", "dialogue", "communication"],
    },
];

/// Count how many of a pattern's triggers occur in the (lowercased) text.
pub fn trigger_hits(pattern: &SymbolPattern, text_lower: &str) -> usize {
    pattern
        .triggers
        .iter()
        .filter(|t| text_lower.contains(*t))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_sizes() {
        assert_eq!(ENVIRONMENT_PATTERNS.len(), 10);
        assert_eq!(OBJECT_PATTERNS.len(), 10);
        assert_eq!(ACTION_PATTERNS.len(), 10);
    }

    #[test]
    fn test_labels_are_unique_within_category() {
        for table in [ENVIRONMENT_PATTERNS, OBJECT_PATTERNS, ACTION_PATTERNS] {
            let mut labels: Vec<&str> = table.iter().map(|p| p.label).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), table.len());
        }
    }

    #[test]
    fn test_trigger_hits_counts_distinct_triggers() {
        let sky = ENVIRONMENT_PATTERNS
            .iter()
            .find(|p| p.label == "sky")
            .unwrap();
        assert_eq!(trigger_hits(sky, "flying through golden clouds"), 2);
        assert_eq!(trigger_hits(sky, "nothing matches here"), 0);
    }

    #[test]
    fn test_trigger_hits_is_substring_based() {
        let forest = ENVIRONMENT_PATTERNS
            .iter()
            .find(|p| p.label == "forest")
            .unwrap();
        // "trees" matches inside "treeshade" — substring matching, as in
        // the analysis contract.
        assert_eq!(trigger_hits(forest, "treeshade"), 1);
    }

    #[test]
    fn test_weights_saturate_within_three_hits() {
        // Calibration: 2-3 hits reach the cap in every category.
        assert!(ENVIRONMENT_WEIGHT * 4.0 > ENVIRONMENT_CAP);
        assert!(OBJECT_WEIGHT * 4.0 > OBJECT_CAP);
        assert!(ACTION_WEIGHT * 3.0 >= ACTION_CAP);
    }
}
