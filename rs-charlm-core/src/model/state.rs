use std::fmt;

use super::observation::Observation;

/// Represents a window in the language model.
///
/// A `State` corresponds to a fixed-length character window (`key`) and
/// stores every character observed right after it, in first-seen order.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate observations during training
/// - Derive probabilities and cumulative probabilities once training is done
/// - Resolve a uniform draw into the next character
///
/// ## Invariants
/// - A state stored in a trained model has at least one observation
/// - Each observation count is strictly positive
/// - Observation order is the order of first occurrence in the corpus; it is
///   also the order cumulative probabilities are summed in, so it decides
///   which character a given draw resolves to
#[derive(Clone, Debug, PartialEq)]
pub struct State {
	/// Window this state belongs to.
	key: String,
	/// Next characters in first-seen order.
	/// Example: [('l', 2), ('r', 1)] after "he" in "hello hello there"
	observations: Vec<Observation>,
}

impl State {
	/// Creates a new empty state for the given window.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			observations: Vec::new(),
		}
	}

	/// Observations in first-seen order.
	pub fn observations(&self) -> &[Observation] {
		&self.observations
	}

	/// Records an occurrence of `next_char` after this window.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise, a new observation is appended with a count of 1.
	pub fn add_transition(&mut self, next_char: char) {
		match self.observations.iter_mut().find(|o| o.chr() == next_char) {
			Some(observation) => observation.increment(),
			None => self.observations.push(Observation::new(next_char)),
		}
	}

	/// Sum of all observation counts.
	pub fn total_count(&self) -> usize {
		self.observations.iter().map(Observation::count).sum()
	}

	/// Sets `p` and `cp` for every observation, in stored order.
	///
	/// The last `cp` is pinned to 1.0: the `p` values sum to 1 exactly in
	/// theory, and rounding must not leave a gap a draw in [0, 1) can land in.
	pub fn compute_probabilities(&mut self) {
		let total = self.total_count() as f64;
		let last = self.observations.len().saturating_sub(1);

		let mut cumulative = 0.0;
		for (i, observation) in self.observations.iter_mut().enumerate() {
			let p = observation.count() as f64 / total;
			cumulative += p;
			let cp = if i == last { 1.0 } else { cumulative };
			observation.set_probabilities(p, cp);
		}
	}

	/// Resolves the uniform draw `r` in [0, 1) into a character.
	///
	/// Returns the first observation, in stored order, whose `cp >= r`.
	///
	/// # Panics
	/// If no observation covers `r`. This only happens on an empty state or
	/// one whose probabilities were never computed, both of which mean the
	/// model was built incorrectly.
	pub fn sample(&self, r: f64) -> char {
		match self.observations.iter().find(|o| o.cp() >= r) {
			Some(observation) => observation.chr(),
			None => panic!(
				"internal invariant violated: no observation of window {:?} covers draw {} ({} observations)",
				self.key,
				r,
				self.observations.len()
			),
		}
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?} :", self.key)?;
		for observation in &self.observations {
			write!(f, " {}", observation)?;
		}
		Ok(())
	}
}
