use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, info, trace};
use rand::Rng;
use rand::rngs::StdRng;

use super::observation::Observation;
use super::random_source::RandomMode;
use super::state::State;
use crate::error::ModelError;
use crate::io::read_corpus;

/// Represents a fixed-order character language model.
///
/// The `LanguageModel` stores one state per window of `window_length`
/// characters and generates text by repeatedly sampling the character that
/// follows the current trailing window.
///
/// # Responsibilities
/// - Build the table from a corpus (counts first, then probabilities)
/// - Extend a seed text by cumulative-probability sampling
/// - Own the single random source every draw comes from
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Each key in `states` has exactly `window_length` characters
/// - Every state has at least one observation and computed probabilities
///
/// Not meant for concurrent use: `generate` advances the random source, so
/// callers sharing a model must serialize access.
#[derive(Debug)]
pub struct LanguageModel {
	/// The order of the model (number of characters in a window)
	window_length: usize,

	/// Mapping from a window to its corresponding state
	states: HashMap<String, State>,

	/// Seeded once at construction, advanced once per sampled character
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an empty model with the given window length.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize, mode: RandomMode) -> Result<Self, ModelError> {
		if window_length < 1 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		Ok(Self {
			window_length,
			states: HashMap::new(),
			rng: mode.into_rng(),
		})
	}

	/// Creates a model whose generations are reproducible for `seed`.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, ModelError> {
		Self::new(window_length, RandomMode::Fixed(seed))
	}

	/// Number of distinct windows in the table.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Observations recorded after `window`, in first-seen order.
	///
	/// Returns `None` if the window never occurred in the corpus.
	pub fn observations(&self, window: &str) -> Option<&[Observation]> {
		self.states.get(window).map(State::observations)
	}

	/// Known windows, in no particular order.
	pub fn windows(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(String::as_str)
	}

	/// Builds the table from `corpus`, replacing any previous one.
	///
	/// Every window of `window_length` characters that is followed by at
	/// least one character contributes one observation. A corpus of
	/// `window_length` characters or fewer yields an empty table.
	///
	/// # Notes
	/// - UTF-8 safe: windows are counted in characters, not bytes.
	/// - No normalisation: case, whitespace and line breaks are kept.
	pub fn train(&mut self, corpus: &str) {
		self.states.clear();

		let chars: Vec<char> = corpus.chars().collect();
		let w = self.window_length;

		if chars.len() > w {
			for i in 0..chars.len() - w {
				let window: String = chars[i..i + w].iter().collect();
				let next_char = chars[i + w];

				let state = self.states.entry(window).or_insert_with_key(|key| State::new(key));
				state.add_transition(next_char);
			}
		}

		for state in self.states.values_mut() {
			state.compute_probabilities();
		}

		info!(
			"trained order-{} model on {} characters: {} windows",
			w,
			chars.len(),
			self.states.len()
		);
	}

	/// Reads `path` fully and trains on its content.
	///
	/// The file must be valid UTF-8.
	///
	/// # Errors
	/// Returns `CorpusAccess` if the file cannot be read; the current table
	/// is left untouched in that case.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ModelError> {
		let path = path.as_ref();
		let corpus = read_corpus(path).map_err(|source| ModelError::CorpusAccess {
			path: path.to_path_buf(),
			source,
		})?;
		self.train(&corpus);
		Ok(())
	}

	/// Extends `seed` by up to `length` sampled characters.
	///
	/// # Behavior
	/// - If `seed` is shorter than the window length, it is returned unchanged.
	/// - Otherwise the trailing window of `seed` is looked up, one character
	///   is sampled from it, appended, and the window slides by one.
	/// - Generation stops early as soon as the current window is unknown;
	///   whatever was produced so far (seed included) is returned.
	pub fn generate(&mut self, seed: &str, length: usize) -> String {
		let seed_len = seed.chars().count();
		if seed_len < self.window_length {
			debug!("seed {:?} is shorter than the window length {}", seed, self.window_length);
			return seed.to_owned();
		}

		let mut result = seed.to_owned();
		let mut window: String = seed.chars().skip(seed_len - self.window_length).collect();

		for generated in 0..length {
			let state = match self.states.get(&window) {
				Some(state) => state,
				None => {
					debug!("unknown window {:?}, stopping after {} of {} characters", window, generated, length);
					break;
				}
			};

			let r: f64 = self.rng.random();
			let next_char = state.sample(r);
			trace!("{:?} + draw {} -> {:?}", window, r, next_char);

			result.push(next_char);
			window = window.chars().skip(1).chain(std::iter::once(next_char)).collect();
		}

		result
	}
}

/// Renders the table one window per line, windows sorted.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut keys: Vec<&String> = self.states.keys().collect();
		keys.sort();
		for key in keys {
			writeln!(f, "{}", self.states[key])?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TOLERANCE: f64 = 1e-9;

	fn fixed(window_length: usize, corpus: &str) -> LanguageModel {
		let mut model = LanguageModel::with_seed(window_length, 20).unwrap();
		model.train(corpus);
		model
	}

	fn counts(model: &LanguageModel, window: &str) -> Vec<(char, usize)> {
		model
			.observations(window)
			.unwrap()
			.iter()
			.map(|o| (o.chr(), o.count()))
			.collect()
	}

	#[test]
	fn test_zero_window_length_rejected() {
		let err = LanguageModel::new(0, RandomMode::Entropy).unwrap_err();
		assert!(matches!(err, ModelError::InvalidWindowLength(0)));
	}

	#[test]
	fn test_abcabcabc_enumeration() {
		let model = fixed(3, "abcabcabc");
		assert_eq!(model.len(), 3);
		assert_eq!(counts(&model, "abc"), vec![('a', 2)]);
		assert_eq!(counts(&model, "bca"), vec![('b', 2)]);
		assert_eq!(counts(&model, "cab"), vec![('c', 2)]);
		assert!(model.observations("bcabc").is_none());
	}

	#[test]
	fn test_abcabcabc_generation_is_forced() {
		let mut model = fixed(3, "abcabcabc");
		assert_eq!(model.generate("abc", 6), "abcabcabc");
		assert_eq!(model.generate("xxbca", 4), "xxbcabcab");
	}

	#[test]
	fn test_first_seen_order() {
		let model = fixed(2, "hello world hello there");
		assert_eq!(counts(&model, "he"), vec![('l', 2), ('r', 1)]);
		assert_eq!(counts(&model, "lo"), vec![(' ', 2)]);
		assert_eq!(counts(&model, "o "), vec![('w', 1), ('t', 1)]);
	}

	#[test]
	fn test_probability_invariants() {
		let model = fixed(2, "the quick brown fox jumps over the lazy dog; the end, then nothing");
		assert!(!model.is_empty());
		for window in model.windows() {
			assert_eq!(window.chars().count(), 2);
			let observations = model.observations(window).unwrap();
			assert!(!observations.is_empty());

			let sum: f64 = observations.iter().map(Observation::p).sum();
			assert!((sum - 1.0).abs() < TOLERANCE, "{:?} sums to {}", window, sum);

			let mut previous = 0.0;
			for observation in observations {
				assert!(observation.count() >= 1);
				assert!(observation.cp() >= previous);
				previous = observation.cp();
			}
			assert!((previous - sum).abs() < TOLERANCE);
		}
	}

	#[test]
	fn test_retrain_is_idempotent() {
		let corpus = "she sells sea shells by the sea shore";
		let mut model = fixed(3, corpus);
		let first: HashMap<String, State> = model.states.clone();
		model.train(corpus);
		assert_eq!(model.states, first);
	}

	#[test]
	fn test_retrain_replaces_table() {
		let mut model = fixed(2, "aaaa");
		assert!(model.observations("aa").is_some());
		model.train("bbbb");
		assert!(model.observations("aa").is_none());
		assert_eq!(counts(&model, "bb"), vec![('b', 2)]);
	}

	#[test]
	fn test_fixed_mode_is_deterministic() {
		let corpus = "hello world hello there";
		let a = fixed(2, corpus).generate("he", 10);
		let b = fixed(2, corpus).generate("he", 10);
		assert_eq!(a, b);
		assert!(a.starts_with("he"));
		assert!(a.chars().count() <= 12);
	}

	#[test]
	fn test_fixed_mode_known_output() {
		let mut model = fixed(2, "hello world hello there");
		assert_eq!(model.generate("he", 10), "hello thello");
	}

	#[test]
	fn test_generated_text_follows_table() {
		let corpus = "hello world hello there";
		let mut model = fixed(2, corpus);
		let text: Vec<char> = model.generate("he", 40).chars().collect();
		for i in 2..text.len() {
			let window: String = text[i - 2..i].iter().collect();
			let observations = model.observations(&window).unwrap();
			assert!(observations.iter().any(|o| o.chr() == text[i]));
		}
	}

	#[test]
	fn test_short_seed_returned_unchanged() {
		let mut model = fixed(3, "abcabcabc");
		assert_eq!(model.generate("ab", 0), "ab");
		assert_eq!(model.generate("ab", 100), "ab");
		assert_eq!(model.generate("", 5), "");
	}

	#[test]
	fn test_unknown_window_stops_generation() {
		let mut model = fixed(2, "abcd");
		assert_eq!(model.generate("ab", 10), "abcd");
		assert_eq!(model.generate("zz", 10), "zz");
	}

	#[test]
	fn test_zero_length() {
		let mut model = fixed(2, "abcd");
		assert_eq!(model.generate("ab", 0), "ab");
	}

	#[test]
	fn test_corpus_too_short() {
		let mut model = fixed(3, "abc");
		assert!(model.is_empty());
		assert_eq!(model.generate("abc", 5), "abc");

		model.train("");
		assert!(model.is_empty());
	}

	#[test]
	fn test_multibyte_characters() {
		let mut model = fixed(1, "é→é→");
		assert_eq!(counts(&model, "é"), vec![('→', 2)]);
		assert_eq!(counts(&model, "→"), vec![('é', 1)]);
		assert_eq!(model.generate("é", 3), "é→é→");
	}

	#[test]
	fn test_display_sorted() {
		let model = fixed(1, "abab");
		assert_eq!(model.to_string(), "\"a\" : ('b' 2 1 1)\n\"b\" : ('a' 1 1 1)\n");
	}
}
