//! dream-cinema library crate.
//!
//! Turns free-text dream narration into a short generated video: text
//! analysis, prompt building, and a provider client with bounded polling
//! and a curated-library fallback.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod video;
