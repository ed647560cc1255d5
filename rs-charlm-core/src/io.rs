use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns its whole content.
///
/// Line breaks are kept as-is: they are ordinary corpus characters.
/// The file must be valid UTF-8; anything else is an `InvalidData` error.
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
