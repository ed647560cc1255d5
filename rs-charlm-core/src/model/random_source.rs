use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed used by the `"fixed"` mode.
pub const FIXED_SEED: u64 = 20;

/// Strategy used to seed the model's random source.
///
/// # Variants
/// - `Fixed(u64)`: deterministic seed; the same model, corpus and seed text
///   always generate the same output. Good for debugging.
/// - `Entropy`: seeded from the operating system; every run differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomMode {
	Fixed(u64),
	Entropy,
}

impl RandomMode {
	/// Maps the command-line mode string to a strategy.
	///
	/// Exactly `"fixed"` selects `Fixed(FIXED_SEED)`; anything else selects
	/// `Entropy`.
	pub fn from_mode(mode: &str) -> Self {
		if mode == "fixed" {
			RandomMode::Fixed(FIXED_SEED)
		} else {
			RandomMode::Entropy
		}
	}

	/// Builds the random source. Called once per model.
	///
	/// `StdRng` is only stable within a `rand` release: a `Fixed` seed
	/// reproduces the same output as long as the `rand` version is unchanged.
	pub(crate) fn into_rng(self) -> StdRng {
		match self {
			RandomMode::Fixed(seed) => StdRng::seed_from_u64(seed),
			RandomMode::Entropy => StdRng::from_os_rng(),
		}
	}
}
