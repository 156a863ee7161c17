// The library surface is compiled into the binary directly; parts of it are
// only reachable through the library crate.
#![allow(dead_code)]

mod analysis;
mod catalog;
mod config;
mod video;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parse and validate a clip duration (3-10 seconds)
fn parse_duration(s: &str) -> Result<u32, String> {
    let secs: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid duration", s))?;
    if !(video::MIN_DURATION_SECS..=video::MAX_DURATION_SECS).contains(&secs) {
        return Err(format!(
            "Duration must be between {} and {} seconds, got {}",
            video::MIN_DURATION_SECS,
            video::MAX_DURATION_SECS,
            secs
        ));
    }
    Ok(secs)
}

/// dream-cinema: Turn dream narration into short generated videos
#[derive(Parser)]
#[command(name = "dream-cinema")]
#[command(version, about = "Turn dream narration into short generated videos")]
#[command(long_about = "Analyze free-text dream narration into elements, themes, \
    mood and palette, then drive the HailuoAI video-generation API to completion \
    with bounded retries and a curated fallback library.")]
#[command(after_help = "EXAMPLES:
    # Generate a video from a dream
    dream-cinema generate \"I was flying through golden clouds\" --emotion joy

    # Pick a style, duration and aspect ratio
    dream-cinema generate \"a quiet forest at night\" -s ghibli -d 8 -a 9:16

    # Download the finished video
    dream-cinema generate \"waves on a dark shore\" --output dream.mp4

    # Inspect the analysis only
    dream-cinema analyze \"I was falling through a broken mirror\" --json

    # List the supported options
    dream-cinema styles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a video from dream text
    Generate {
        /// The dream narration (10-500 characters)
        text: String,

        /// Emotion tag to attach to the analysis (repeatable)
        #[arg(short, long = "emotion")]
        emotions: Vec<String>,

        /// Visual style id (see `styles`)
        #[arg(short, long)]
        style: Option<String>,

        /// Clip duration in seconds (3-10)
        #[arg(short, long, value_parser = parse_duration)]
        duration: Option<u32>,

        /// Aspect ratio id (see `aspect-ratios`)
        #[arg(short, long)]
        aspect_ratio: Option<String>,

        /// Download the finished video to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze dream text without generating a video
    Analyze {
        /// The dream narration
        text: String,

        /// Emotion tag to attach to the analysis (repeatable)
        #[arg(short, long = "emotion")]
        emotions: Vec<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported visual styles, grouped by category
    Styles,

    /// List supported clip durations
    Durations,

    /// List supported aspect ratios
    AspectRatios,

    /// Estimate generation time for a duration/style pair
    Estimate {
        /// Clip duration in seconds (3-10)
        #[arg(short, long, value_parser = parse_duration)]
        duration: u32,

        /// Visual style id
        #[arg(short, long)]
        style: String,
    },
}

/// Build the provider client from the environment and config file.
///
/// Returns `None` when no API key is configured; the service then serves
/// fallback videos only.
fn build_client(cfg: &config::Config) -> Option<video::HailuoClient> {
    let api_key = std::env::var(video::HAILUO_API_KEY_ENV).ok()?;
    let base_url = cfg
        .provider
        .base_url
        .clone()
        .unwrap_or_else(|| video::HAILUO_API_BASE_URL.to_string());

    let client = match video::HailuoClient::with_base_url(api_key, base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Warning: provider client unavailable: {}", e);
            return None;
        }
    };

    Some(match cfg.provider.model.clone() {
        Some(model) => client.with_model_name(model),
        None => client,
    })
}

/// Run the generate command: analyze, generate, optionally download.
fn run_generate(
    text: &str,
    emotions: &[String],
    style: Option<String>,
    duration: Option<u32>,
    aspect_ratio: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), String> {
    let cfg = config::Config::load(config_path.as_deref()).map_err(|e| e.to_string())?;

    let style = style
        .or_else(|| cfg.defaults.style.clone())
        .unwrap_or_else(|| catalog::DEFAULT_STYLE.to_string());
    let duration = duration.or(cfg.defaults.duration_seconds).unwrap_or(6);
    let aspect_ratio = aspect_ratio
        .or_else(|| cfg.defaults.aspect_ratio.clone())
        .unwrap_or_else(|| "16:9".to_string());

    if std::env::var(video::HAILUO_API_KEY_ENV).is_err() {
        println!(
            "{} is not set; the curated fallback library will be used.",
            video::HAILUO_API_KEY_ENV
        );
        println!("To enable AI generation, add your API key to a .env file:");
        println!("    echo '{}=your-api-key-here' >> .env", video::HAILUO_API_KEY_ENV);
        println!();
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    rt.block_on(async {
        let service = video::VideoService::new(build_client(&cfg));

        println!("Generating video for: \"{}\"", text);
        println!(
            "  Style: {}, duration: {}s, aspect ratio: {}",
            style, duration, aspect_ratio
        );
        println!(
            "  Estimated generation time: ~{}s",
            catalog::estimated_generation_time_ms(duration, &style) / 1000
        );
        println!();

        let result = service
            .generate(text, emotions, &style, duration, &aspect_ratio)
            .await
            .map_err(|e| e.to_string())?;

        match result.source {
            video::VideoSource::Provider => println!("Video generated by HailuoAI."),
            video::VideoSource::Fallback => println!("Served from the curated video library."),
        }
        println!("  URL: {}", result.video_url);

        if let Some(dest) = output {
            print!("Downloading video... ");
            use std::io::Write;
            std::io::stdout().flush().ok();
            video::download_video(&result.video_url, &dest)
                .await
                .map_err(|e| format!("Failed to download video: {}", e))?;
            println!("done");
            println!("  Saved to: {}", dest.display());
        }

        Ok(())
    })
}

/// Run the analyze command and print the structured analysis.
fn run_analyze(text: &str, emotions: &[String], json: bool) -> Result<(), String> {
    let result = analysis::analyze(text, emotions);

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to render analysis: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Elements:");
    for element in &result.elements {
        println!(
            "  {:?} {} (prominence {:.2})",
            element.kind, element.value, element.prominence
        );
    }
    println!("Themes: {}", result.dominant_themes.join(", "));
    println!("Palette: {}", result.suggested_palette.join(" "));
    println!("Mood score: {:.2}", result.mood_score);
    Ok(())
}

fn run_styles() {
    for (category, members) in catalog::styles_by_category() {
        println!("{}:", category);
        for style in members {
            println!("  {:<12} {} - {}", style.id, style.name, style.description);
        }
    }
}

fn run_durations() {
    for option in catalog::DURATIONS {
        println!("  {:<12} {}", option.label, option.description);
    }
}

fn run_aspect_ratios() {
    for ratio in catalog::ASPECT_RATIOS {
        println!("  {:<6} {:<10} {}", ratio.id, ratio.name, ratio.description);
    }
}

fn run_estimate(duration: u32, style: &str) {
    let ms = catalog::estimated_generation_time_ms(duration, style);
    println!(
        "Estimated generation time for {}s of {}: ~{}s",
        duration,
        style,
        ms / 1000
    );
}

fn main() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            text,
            emotions,
            style,
            duration,
            aspect_ratio,
            output,
            config,
        } => run_generate(
            &text,
            &emotions,
            style,
            duration,
            aspect_ratio,
            output,
            config,
        ),
        Commands::Analyze {
            text,
            emotions,
            json,
        } => run_analyze(&text, &emotions, json),
        Commands::Styles => {
            run_styles();
            Ok(())
        }
        Commands::Durations => {
            run_durations();
            Ok(())
        }
        Commands::AspectRatios => {
            run_aspect_ratios();
            Ok(())
        }
        Commands::Estimate { duration, style } => {
            run_estimate(duration, &style);
            Ok(())
        }
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
