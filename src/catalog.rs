//! Static catalog of supported visual styles, durations and aspect ratios.
//!
//! All entries are process-wide constants in fixed declared order. The
//! prompt fragments and time multipliers feed the prompt builder and the
//! generation-time estimate; the grouped listings feed option pickers.

/// One supported visual style.
#[derive(Debug, Clone, Copy)]
pub struct StyleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Style clause appended to generation prompts.
    pub prompt_fragment: &'static str,
    /// Multiplier applied to the per-second generation-time estimate.
    pub time_multiplier: f64,
}

/// One supported clip duration.
#[derive(Debug, Clone, Copy)]
pub struct DurationOption {
    pub seconds: u32,
    pub label: &'static str,
    pub description: &'static str,
}

/// One supported aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct AspectRatioInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Style categories in display order.
pub const CATEGORIES: &[&str] = &[
    "realistic",
    "anime",
    "artistic",
    "digital",
    "fantasy",
    "experimental",
    "vintage",
];

/// Style id used when an unknown style is requested.
pub const DEFAULT_STYLE: &str = "realistic";

/// All supported styles, grouped by category in declared order.
pub const STYLES: &[StyleInfo] = &[
    StyleInfo {
        id: "realistic",
        name: "Realistic",
        description: "Photorealistic with lifelike details",
        category: "realistic",
        prompt_fragment: "photorealistic cinematic style with professional lighting, detailed textures, and lifelike movement",
        time_multiplier: 1.2,
    },
    StyleInfo {
        id: "cinematic",
        name: "Cinematic",
        description: "Movie-quality production style",
        category: "realistic",
        prompt_fragment: "cinematic film style with dramatic lighting, professional camera work, and movie-quality production",
        time_multiplier: 1.3,
    },
    StyleInfo {
        id: "documentary",
        name: "Documentary",
        description: "Natural, authentic atmosphere",
        category: "realistic",
        prompt_fragment: "documentary style with natural lighting, authentic atmosphere, and realistic human behavior",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "anime",
        name: "Anime",
        description: "Japanese anime with vibrant colors",
        category: "anime",
        prompt_fragment: "Japanese anime style with vibrant colors, expressive characters, dynamic action sequences, and traditional anime aesthetics",
        time_multiplier: 1.1,
    },
    StyleInfo {
        id: "ghibli",
        name: "Studio Ghibli",
        description: "Miyazaki-inspired whimsical style",
        category: "anime",
        prompt_fragment: "Studio Ghibli style with hand-drawn animation, whimsical characters, magical atmosphere, and Miyazaki-inspired visuals",
        time_multiplier: 1.4,
    },
    StyleInfo {
        id: "manga",
        name: "Manga",
        description: "Japanese comic book aesthetics",
        category: "anime",
        prompt_fragment: "manga-inspired animation with bold lines, dramatic expressions, and Japanese comic book aesthetics",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "watercolor",
        name: "Watercolor",
        description: "Soft, flowing watercolor painting",
        category: "artistic",
        prompt_fragment: "soft watercolor painting style with flowing, dreamy transitions, ethereal atmosphere, and artistic brush strokes",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "claymation",
        name: "Claymation",
        description: "Stop-motion clay animation",
        category: "artistic",
        prompt_fragment: "charming stop-motion claymation style with tactile textures, handcrafted appearance, and clay-like characters",
        time_multiplier: 1.5,
    },
    StyleInfo {
        id: "hand-drawn",
        name: "Hand-drawn",
        description: "Traditional 2D animation",
        category: "artistic",
        prompt_fragment: "traditional hand-drawn animation style with organic lines, sketchy details, artistic flair, and 2D animation",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "cyberpunk",
        name: "Cyberpunk",
        description: "Neon-lit futuristic aesthetic",
        category: "digital",
        prompt_fragment: "neon-lit cyberpunk aesthetic with glowing elements, digital effects, futuristic atmosphere, and sci-fi visuals",
        time_multiplier: 1.1,
    },
    StyleInfo {
        id: "pixel-art",
        name: "Pixel Art",
        description: "8-bit retro gaming style",
        category: "digital",
        prompt_fragment: "8-bit pixel art style with retro gaming aesthetics, blocky characters, and nostalgic video game visuals",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "digital-art",
        name: "Digital Art",
        description: "Modern digital illustration",
        category: "digital",
        prompt_fragment: "modern digital art style with clean lines, vibrant colors, and contemporary illustration techniques",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "fantasy",
        name: "Fantasy",
        description: "Magical and mystical elements",
        category: "fantasy",
        prompt_fragment: "fantasy art style with magical elements, mystical creatures, enchanted environments, and otherworldly atmosphere",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "sci-fi",
        name: "Sci-Fi",
        description: "Futuristic science fiction",
        category: "fantasy",
        prompt_fragment: "science fiction style with futuristic technology, space environments, advanced machinery, and alien landscapes",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "steampunk",
        name: "Steampunk",
        description: "Victorian-era machinery",
        category: "fantasy",
        prompt_fragment: "steampunk aesthetic with Victorian-era machinery, brass and copper elements, and retro-futuristic design",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "abstract",
        name: "Abstract",
        description: "Geometric and experimental",
        category: "experimental",
        prompt_fragment: "abstract art style with geometric shapes, flowing forms, experimental visuals, and non-representational imagery",
        time_multiplier: 0.9,
    },
    StyleInfo {
        id: "surreal",
        name: "Surreal",
        description: "Dreamlike and impossible",
        category: "experimental",
        prompt_fragment: "surreal art style with dreamlike imagery, impossible scenarios, and Salvador Dali-inspired visuals",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "minimalist",
        name: "Minimalist",
        description: "Clean and simple forms",
        category: "experimental",
        prompt_fragment: "minimalist style with clean lines, simple forms, limited color palette, and elegant simplicity",
        time_multiplier: 0.8,
    },
    StyleInfo {
        id: "vintage",
        name: "Vintage",
        description: "Aged film aesthetics",
        category: "vintage",
        prompt_fragment: "vintage film style with aged aesthetics, retro color grading, and classic cinematography",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "film-noir",
        name: "Film Noir",
        description: "Classic black and white",
        category: "vintage",
        prompt_fragment: "film noir style with dramatic shadows, high contrast lighting, and classic black and white cinematography",
        time_multiplier: 1.0,
    },
    StyleInfo {
        id: "80s-retro",
        name: "80s Retro",
        description: "Neon synthwave style",
        category: "vintage",
        prompt_fragment: "1980s retro style with neon colors, synthwave aesthetics, and nostalgic 80s visuals",
        time_multiplier: 1.0,
    },
];

/// Supported clip durations.
pub const DURATIONS: &[DurationOption] = &[
    DurationOption { seconds: 3, label: "3 seconds", description: "Quick preview" },
    DurationOption { seconds: 5, label: "5 seconds", description: "Short clip" },
    DurationOption { seconds: 6, label: "6 seconds", description: "Standard (recommended)" },
    DurationOption { seconds: 8, label: "8 seconds", description: "Extended clip" },
    DurationOption { seconds: 10, label: "10 seconds", description: "Long form" },
];

/// Supported aspect ratios.
pub const ASPECT_RATIOS: &[AspectRatioInfo] = &[
    AspectRatioInfo {
        id: "16:9",
        name: "Landscape",
        description: "16:9 - Perfect for YouTube, desktop",
    },
    AspectRatioInfo {
        id: "9:16",
        name: "Portrait",
        description: "9:16 - Perfect for TikTok, Instagram Stories",
    },
    AspectRatioInfo {
        id: "1:1",
        name: "Square",
        description: "1:1 - Perfect for Instagram posts",
    },
    AspectRatioInfo {
        id: "4:3",
        name: "Classic",
        description: "4:3 - Traditional video format",
    },
    AspectRatioInfo {
        id: "21:9",
        name: "Ultrawide",
        description: "21:9 - Cinematic widescreen",
    },
];

/// Base generation-time estimate in milliseconds.
pub const BASE_TIME_MS: u64 = 45_000;
/// Estimated generation cost per second of video, in milliseconds.
pub const PER_SECOND_MS: u64 = 5_000;

/// Look up a style by id.
pub fn style(id: &str) -> Option<&'static StyleInfo> {
    STYLES.iter().find(|s| s.id == id)
}

/// Styles grouped by category, in declared order.
pub fn styles_by_category() -> Vec<(&'static str, Vec<&'static StyleInfo>)> {
    CATEGORIES
        .iter()
        .map(|category| {
            let members = STYLES.iter().filter(|s| s.category == *category).collect();
            (*category, members)
        })
        .collect()
}

/// Prompt fragment for a style, defaulting to the realistic fragment for
/// unknown ids.
pub fn prompt_fragment(id: &str) -> &'static str {
    style(id)
        .or_else(|| style(DEFAULT_STYLE))
        .map(|s| s.prompt_fragment)
        .unwrap_or_default()
}

/// Time multiplier for a style, 1.0 for unknown ids.
pub fn time_multiplier(id: &str) -> f64 {
    style(id).map(|s| s.time_multiplier).unwrap_or(1.0)
}

/// Estimated generation time in milliseconds for a duration/style pair.
pub fn estimated_generation_time_ms(duration_seconds: u32, style_id: &str) -> u64 {
    let scaled = duration_seconds as f64 * PER_SECOND_MS as f64 * time_multiplier(style_id);
    BASE_TIME_MS + scaled.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(STYLES.len(), 21);
        assert_eq!(DURATIONS.len(), 5);
        assert_eq!(ASPECT_RATIOS.len(), 5);
        assert_eq!(CATEGORIES.len(), 7);
    }

    #[test]
    fn test_every_style_belongs_to_a_declared_category() {
        for s in STYLES {
            assert!(
                CATEGORIES.contains(&s.category),
                "style {} has unknown category {}",
                s.id,
                s.category
            );
        }
    }

    #[test]
    fn test_styles_by_category_covers_all_styles() {
        let grouped = styles_by_category();
        let total: usize = grouped.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, STYLES.len());
        assert_eq!(grouped[0].0, "realistic");
        assert_eq!(grouped[0].1.len(), 3);
    }

    #[test]
    fn test_style_lookup() {
        assert_eq!(style("ghibli").unwrap().name, "Studio Ghibli");
        assert!(style("nonexistent").is_none());
    }

    #[test]
    fn test_prompt_fragment_falls_back_to_realistic() {
        assert_eq!(prompt_fragment("nope"), prompt_fragment("realistic"));
        assert!(prompt_fragment("watercolor").contains("watercolor"));
    }

    #[test]
    fn test_time_multiplier_defaults_to_one() {
        assert_eq!(time_multiplier("claymation"), 1.5);
        assert_eq!(time_multiplier("unknown-style"), 1.0);
    }

    #[test]
    fn test_estimated_generation_time() {
        // 45_000 + 6 * 5_000 * 1.4
        assert_eq!(estimated_generation_time_ms(6, "ghibli"), 87_000);
        // Unknown style uses multiplier 1.0.
        assert_eq!(estimated_generation_time_ms(6, "unknown"), 75_000);
        assert_eq!(estimated_generation_time_ms(3, "minimalist"), 57_000);
    }

    #[test]
    fn test_duration_options_are_sorted_and_in_provider_range() {
        let mut previous = 0;
        for option in DURATIONS {
            assert!(option.seconds > previous);
            assert!((3..=10).contains(&option.seconds));
            previous = option.seconds;
        }
    }
}
