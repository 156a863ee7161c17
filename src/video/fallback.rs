//! Curated fallback video library.
//!
//! A static style × tone matrix of pre-recorded video URLs used whenever
//! the provider path cannot produce a result. `select` is total: unknown
//! styles land on the watercolor row, unknown tones on that row's peaceful
//! column.

use crate::analysis::DreamAnalysis;

/// Style row used when the requested style is unknown.
pub const FALLBACK_STYLE: &str = "watercolor";

/// Coarse emotional tone keying the fallback library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Joyful,
    Dramatic,
    Peaceful,
    Mysterious,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Joyful => "joyful",
            Tone::Dramatic => "dramatic",
            Tone::Peaceful => "peaceful",
            Tone::Mysterious => "mysterious",
        }
    }

    /// Derive the emotional tone of an analysis from its themes and
    /// elements. Mysterious is the default when nothing matches.
    pub fn of(analysis: &DreamAnalysis) -> Tone {
        let has_theme = |needles: &[&str]| {
            needles.iter().any(|needle| {
                analysis
                    .dominant_themes
                    .iter()
                    .any(|t| t.to_lowercase().contains(needle))
            })
        };
        let has_element = |needles: &[&str]| {
            needles.iter().any(|needle| {
                analysis
                    .elements
                    .iter()
                    .any(|e| e.value.to_lowercase().contains(needle))
            })
        };

        if has_theme(&["joy", "happiness", "love", "celebration"])
            || has_element(&["dancing", "flying", "light"])
        {
            Tone::Joyful
        } else if has_theme(&["fear", "anxiety", "terror", "horror", "conflict"])
            || has_element(&["falling", "fighting", "storm"])
        {
            Tone::Dramatic
        } else if has_theme(&["peace", "calm", "tranquil", "serene"])
            || has_element(&["water", "floating", "garden"])
        {
            Tone::Peaceful
        } else {
            Tone::Mysterious
        }
    }
}

/// One style row of the fallback library.
#[derive(Debug, Clone, Copy)]
pub struct LibraryRow {
    pub style: &'static str,
    pub peaceful: &'static str,
    pub mysterious: &'static str,
    pub joyful: &'static str,
    pub dramatic: &'static str,
}

impl LibraryRow {
    fn url(&self, tone: &str) -> &'static str {
        match tone {
            "peaceful" => self.peaceful,
            "mysterious" => self.mysterious,
            "joyful" => self.joyful,
            "dramatic" => self.dramatic,
            _ => self.peaceful,
        }
    }
}

const SERENE: &str =
    "https://videos.pexels.com/video-files/3571264/3571264-uhd_2560_1440_30fps.mp4";
const NEBULOUS: &str =
    "https://videos.pexels.com/video-files/3045163/3045163-uhd_2560_1440_30fps.mp4";
const RADIANT: &str =
    "https://videos.pexels.com/video-files/2795405/2795405-uhd_2560_1440_30fps.mp4";

/// Row returned for unknown styles.
const WATERCOLOR_ROW: LibraryRow = LibraryRow {
    style: "watercolor",
    peaceful: SERENE,
    mysterious: NEBULOUS,
    joyful: RADIANT,
    dramatic: SERENE,
};

/// The curated video library, keyed by style and tone.
pub const LIBRARY: &[LibraryRow] = &[
    LibraryRow {
        style: "realistic",
        peaceful: SERENE,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    LibraryRow {
        style: "cinematic",
        peaceful: RADIANT,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    LibraryRow {
        style: "anime",
        peaceful: RADIANT,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    LibraryRow {
        style: "ghibli",
        peaceful: RADIANT,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    WATERCOLOR_ROW,
    LibraryRow {
        style: "claymation",
        peaceful: RADIANT,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    LibraryRow {
        style: "hand-drawn",
        peaceful: RADIANT,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
    LibraryRow {
        style: "cyberpunk",
        peaceful: NEBULOUS,
        mysterious: NEBULOUS,
        joyful: RADIANT,
        dramatic: SERENE,
    },
];

/// Select a curated video for a style/tone pair. Total: never fails, for
/// any input strings.
pub fn select(style: &str, tone: &str) -> &'static str {
    let row = LIBRARY
        .iter()
        .find(|r| r.style == style)
        .unwrap_or(&WATERCOLOR_ROW);
    row.url(tone)
}
