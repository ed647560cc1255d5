use std::fmt;

/// One character observed right after a given window.
///
/// `count` is accumulated during training; `p` and `cp` are derived once the
/// whole corpus has been scanned (see `State::compute_probabilities`).
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
	chr: char,
	count: usize,
	p: f64,
	cp: f64,
}

impl Observation {
	/// First sighting of `chr`: count 1, probabilities not computed yet.
	pub(crate) fn new(chr: char) -> Self {
		Self { chr, count: 1, p: 0.0, cp: 0.0 }
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub(crate) fn set_probabilities(&mut self, p: f64, cp: f64) {
		self.p = p;
		self.cp = cp;
	}

	pub fn chr(&self) -> char {
		self.chr
	}

	pub fn count(&self) -> usize {
		self.count
	}

	/// Probability of this character given the window.
	pub fn p(&self) -> f64 {
		self.p
	}

	/// Cumulative probability up to and including this observation.
	pub fn cp(&self) -> f64 {
		self.cp
	}
}

impl fmt::Display for Observation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:?} {} {} {})", self.chr, self.count, self.p, self.cp)
	}
}
