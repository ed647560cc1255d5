use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced by the language model.
///
/// Both variants are reported before the model table is touched: a rejected
/// window length never builds a model, and an unreadable corpus leaves the
/// previous table in place.
#[derive(Debug)]
pub enum ModelError {
	/// The window length (model order) must be at least 1.
	InvalidWindowLength(usize),

	/// The corpus file could not be read.
	CorpusAccess {
		path: PathBuf,
		source: io::Error,
	},
}

impl fmt::Display for ModelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ModelError::InvalidWindowLength(n) => {
				write!(f, "window length must be >= 1, got {}", n)
			}
			ModelError::CorpusAccess { path, .. } => {
				write!(f, "cannot read corpus {}", path.display())
			}
		}
	}
}

impl Error for ModelError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			ModelError::InvalidWindowLength(_) => None,
			ModelError::CorpusAccess { source, .. } => Some(source),
		}
	}
}
