//! Top-level module for the character language model.
//!
//! This module provides:
//! - The trainable and sampling model (`LanguageModel`)
//! - Per-window observations (`Observation`)
//! - Random source selection (`RandomMode`)

/// Fixed-order character language model.
///
/// Handles corpus scanning, probability derivation and text generation.
pub mod language_model;

/// One (character, count, p, cp) record.
pub mod observation;

/// A single window and the characters observed after it.
///
/// Tracks observations in first-seen order and resolves uniform draws.
/// This module is not exposed publicly.
mod state;

/// Seeding strategy for the model's random source.
pub mod random_source;
