//! Two-tier video generation orchestration.
//!
//! `VideoService` is the entry point surrounding collaborators call: it
//! validates the raw dream text, analyzes it, and tries the provider path;
//! any provider-side failure degrades to the curated fallback library, so
//! a well-formed request always yields a playable video URL.

use serde::Serialize;

use crate::analysis::{analyze, DreamAnalysis};
use crate::catalog::{self, AspectRatioInfo, DurationOption, StyleInfo};

use super::cancel::CancelToken;
use super::client::{GenerationRequest, HailuoClient};
use super::fallback::{self, Tone};
use super::prompt;

/// Minimum accepted dream text length, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

/// Maximum accepted dream text length, in characters.
pub const MAX_TEXT_CHARS: usize = 500;

/// Where a generated video came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    /// Generated by the remote provider.
    Provider,
    /// Served from the curated fallback library.
    Fallback,
}

/// The result returned to collaborators: a playable URL plus metadata.
///
/// Carries no job identifiers; jobs are not addressable outside this
/// subsystem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub video_url: String,
    pub source: VideoSource,
    pub style: String,
    pub duration_seconds: u32,
}

/// Rejected caller input, surfaced before any analysis or network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dream text must be between {MIN_TEXT_CHARS} and {MAX_TEXT_CHARS} characters, got {len}")]
pub struct ValidationError {
    pub len: usize,
}

/// Orchestrates the provider path with a curated-library fallback.
///
/// The provider client is injected by whoever composes the service; `None`
/// means fallback-only operation (e.g. no credential configured).
pub struct VideoService {
    provider: Option<HailuoClient>,
}

impl VideoService {
    /// Create a service around an explicitly constructed provider client.
    pub fn new(provider: Option<HailuoClient>) -> Self {
        Self { provider }
    }

    /// Create a service from the environment; a missing API key yields a
    /// fallback-only service rather than an error.
    pub fn from_env() -> Self {
        match HailuoClient::new() {
            Ok(client) => Self::new(Some(client)),
            Err(e) => {
                log::warn!("Provider client unavailable ({}), using fallback library only", e);
                Self::new(None)
            }
        }
    }

    /// Generate a video from raw dream text and emotion tags.
    ///
    /// The single external entry point: rejects out-of-bounds text before
    /// any analysis or network activity, and otherwise always returns a
    /// result.
    ///
    /// # Errors
    ///
    /// `ValidationError` when the text is shorter than `MIN_TEXT_CHARS` or
    /// longer than `MAX_TEXT_CHARS` characters. No other error escapes.
    pub async fn generate(
        &self,
        text: &str,
        emotion_tags: &[String],
        style: &str,
        duration_seconds: u32,
        aspect_ratio: &str,
    ) -> Result<GenerationResult, ValidationError> {
        self.generate_with_cancel(
            text,
            emotion_tags,
            style,
            duration_seconds,
            aspect_ratio,
            CancelToken::disarmed(),
        )
        .await
    }

    /// Like `generate`, honoring a caller-supplied cancellation token.
    ///
    /// Cancellation abandons provider work immediately; the returned result
    /// then comes from the fallback library, preserving the never-fail
    /// contract.
    pub async fn generate_with_cancel(
        &self,
        text: &str,
        emotion_tags: &[String],
        style: &str,
        duration_seconds: u32,
        aspect_ratio: &str,
        cancel: CancelToken,
    ) -> Result<GenerationResult, ValidationError> {
        let len = text.chars().count();
        if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&len) {
            return Err(ValidationError { len });
        }

        let analysis = analyze(text, emotion_tags);
        Ok(self
            .generate_from_analysis(&analysis, style, duration_seconds, aspect_ratio, cancel)
            .await)
    }

    /// Generate a video for an already-computed analysis. Infallible: any
    /// provider-path error degrades to the curated library.
    pub async fn generate_from_analysis(
        &self,
        analysis: &DreamAnalysis,
        style: &str,
        duration_seconds: u32,
        aspect_ratio: &str,
        cancel: CancelToken,
    ) -> GenerationResult {
        if let Some(client) = &self.provider {
            if client.is_available().await {
                let built = prompt::build(analysis, style, duration_seconds);
                let request = GenerationRequest::new(
                    built,
                    style.to_string(),
                    duration_seconds,
                    aspect_ratio.to_string(),
                );
                match client.generate_with_cancel(&request, cancel).await {
                    Ok(video_url) => {
                        return GenerationResult {
                            video_url,
                            source: VideoSource::Provider,
                            style: style.to_string(),
                            duration_seconds: request.duration_seconds(),
                        };
                    }
                    Err(e) => {
                        log::warn!("Provider generation failed ({}), falling back to curated library", e);
                    }
                }
            } else {
                log::info!("Provider unavailable, falling back to curated library");
            }
        } else {
            log::info!("No provider configured, using curated library");
        }

        let tone = Tone::of(analysis);
        let video_url = fallback::select(style, tone.as_str()).to_string();
        log::info!(
            "Selected curated video for style '{}', tone '{}'",
            style,
            tone.as_str()
        );
        GenerationResult {
            video_url,
            source: VideoSource::Fallback,
            style: style.to_string(),
            duration_seconds,
        }
    }

    /// Styles grouped by category, for option pickers.
    pub fn styles(&self) -> Vec<(&'static str, Vec<&'static StyleInfo>)> {
        catalog::styles_by_category()
    }

    /// Supported clip durations.
    pub fn durations(&self) -> &'static [DurationOption] {
        catalog::DURATIONS
    }

    /// Supported aspect ratios.
    pub fn aspect_ratios(&self) -> &'static [AspectRatioInfo] {
        catalog::ASPECT_RATIOS
    }

    /// Estimated generation time in milliseconds.
    pub fn estimate_time_ms(&self, duration_seconds: u32, style: &str) -> u64 {
        catalog::estimated_generation_time_ms(duration_seconds, style)
    }
}
