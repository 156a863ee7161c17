//! Video generation pipeline.
//!
//! Drives the HailuoAI video-generation API to completion with bounded
//! polling, exponential backoff and cancellation, and degrades to a curated
//! fallback library whenever the provider path cannot produce a result.

mod backoff;
mod cancel;
mod client;
mod fallback;
mod orchestrator;
mod prompt;

pub use backoff::{
    poll_backoff, PollConfig, MAX_NETWORK_RETRIES, MAX_POLL_ATTEMPTS, NETWORK_RETRY_DELAY,
    POLL_BASE_DELAY, POLL_GROWTH, POLL_MAX_DELAY,
};
pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::{
    download_video, GenerationRequest, HailuoClient, JobHandle, JobState, PollStatus,
    ProviderError, DEFAULT_MODEL, HAILUO_API_BASE_URL, HAILUO_API_KEY_ENV, MAX_DURATION_SECS,
    MIN_DURATION_SECS,
};
pub use fallback::{select, LibraryRow, Tone, FALLBACK_STYLE, LIBRARY};
pub use orchestrator::{
    GenerationResult, ValidationError, VideoService, VideoSource, MAX_TEXT_CHARS, MIN_TEXT_CHARS,
};
pub use prompt::build as build_prompt;
