//! Reading tags from files and readers

use crate::config::ParseOptions;
use crate::error::{ErrorKind, Mp3MetaError, Result};
use crate::id3::read::{parse_id3v23, read_tag_body};
use crate::id3::{Frame, Id3v23Tag};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the ID3v2.3 tag at the start of a file
///
/// # Examples
///
/// ```rust,no_run
/// use mp3meta::config::{ParseOptions, ParsingMode};
/// use mp3meta::reader::TagReader;
///
/// # fn main() -> mp3meta::error::Result<()> {
/// let tag = TagReader::new()
/// 	.options(ParseOptions::new().parsing_mode(ParsingMode::Relaxed))
/// 	.read_from_path("test.mp3")?;
///
/// for skipped in tag.skipped_frames() {
/// 	eprintln!("Dropped {} frame: {}", skipped.name(), skipped.error());
/// }
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TagReader {
	options: ParseOptions,
}

impl TagReader {
	/// Create a new `TagReader` with the default [`ParseOptions`]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the [`ParseOptions`] for the reader
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = options;
		self
	}

	/// Read the tag of the file at `path`
	///
	/// The header and the entire tag body are buffered, and the file is closed before any
	/// frame is decoded.
	///
	/// # Errors
	///
	/// * `path` does not exist
	/// * See [`TagReader::read_from`]
	pub fn read_from_path(&self, path: impl AsRef<Path>) -> Result<Id3v23Tag> {
		let path = path.as_ref();
		log::debug!("Reading tag from {}", path.display());

		let (header, body) = {
			let mut file = open(path)?;
			read_tag_body(&mut file, self.options)?
		};

		parse_id3v23(body, header, self.options)
	}

	/// Read a tag from the start of `reader`
	///
	/// Only the header and tag body are read, `reader` is left positioned right after the tag.
	///
	/// # Errors
	///
	/// * The input does not start with `"ID3"` ([`ErrorKind::InvalidFormat`])
	/// * The tag is not ID3v2.3 ([`ErrorKind::UnsupportedVersion`])
	/// * The tag is larger than [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
	/// * Any frame fails to decode, unless reading with [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed)
	/// * Reading from `reader` fails
	pub fn read_from<R>(&self, reader: &mut R) -> Result<Id3v23Tag>
	where
		R: Read,
	{
		let (header, body) = read_tag_body(reader, self.options)?;
		parse_id3v23(body, header, self.options)
	}
}

fn open(path: &Path) -> Result<File> {
	File::open(path).map_err(|err| {
		if err.kind() == std::io::ErrorKind::NotFound {
			Mp3MetaError::new(ErrorKind::NotFound(path.to_path_buf()))
		} else {
			err.into()
		}
	})
}

/// Read the frames of the file at `path` with the default [`ParseOptions`]
///
/// # Errors
///
/// See [`TagReader::read_from_path`]
///
/// # Examples
///
/// ```rust,no_run
/// use mp3meta::id3::Frame;
///
/// # fn main() -> mp3meta::error::Result<()> {
/// for frame in mp3meta::read_tags("test.mp3")? {
/// 	if let Frame::Text(text) = frame {
/// 		println!("{}: {}", text.name(), text.value);
/// 	}
/// }
/// # Ok(()) }
/// ```
pub fn read_tags(path: impl AsRef<Path>) -> Result<Vec<Frame>> {
	TagReader::new()
		.read_from_path(path)
		.map(Id3v23Tag::into_frames)
}

/// Read the tag of the file at `path`
///
/// # Errors
///
/// See [`TagReader::read_from_path`]
pub fn read_tag_from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Id3v23Tag> {
	TagReader::new().options(options).read_from_path(path)
}
