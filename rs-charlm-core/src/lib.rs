//! Fixed-order character-level Markov language model.
//!
//! This crate provides:
//! - Training a table from every fixed-length character window of a corpus
//!   to the characters observed right after it
//! - Probabilistic generation by cumulative-probability sampling
//! - Reproducible runs through an explicitly seeded random source
//!
//! File access is kept internal; callers either hand over a corpus string
//! or a path.

/// Language model, per-window states and the random source.
pub mod model;

/// Errors returned by model construction and training.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;
