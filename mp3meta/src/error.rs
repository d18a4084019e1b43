//! Contains the errors that can arise within mp3meta
//!
//! The primary error is [`Mp3MetaError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// Alias for `Result<T, Mp3MetaError>`
pub type Result<T> = std::result::Result<T, Mp3MetaError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// File related errors
	/// The provided path does not point to an existing file
	NotFound(PathBuf),

	// Tag header related errors
	/// The input does not start with the `"ID3"` signature
	InvalidFormat,
	/// The tag is not an ID3v2.3 tag, holds the (major, revision) found
	UnsupportedVersion(u8, u8),

	// Data related errors
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
	TooMuchData,
	/// Errors that arise while reading frames
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while reading the frames of an ID3v2.3 tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	/// Arises when a frame header or its payload runs past the end of the tag
	BadFrameLength,
	/// Arises when the tag body is shorter than the size declared in the header
	///
	/// This is only an error with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	TruncatedTag {
		/// The size declared in the tag header
		expected: u32,
		/// The number of bytes actually available
		actual: u64,
	},
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::TruncatedTag { expected, actual } => write!(
				f,
				"Tag body is truncated (expected {expected} bytes, found {actual})"
			),
		}
	}
}

/// An error that arises while reading the frames of an ID3v2.3 tag
#[derive(Clone, PartialEq, Eq)]
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within mp3meta
pub struct Mp3MetaError {
	pub(crate) kind: ErrorKind,
}

impl Mp3MetaError {
	/// Create an `Mp3MetaError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::error::{ErrorKind, Mp3MetaError};
	///
	/// let invalid_format = Mp3MetaError::new(ErrorKind::InvalidFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::error::{ErrorKind, Mp3MetaError};
	///
	/// let invalid_format = Mp3MetaError::new(ErrorKind::InvalidFormat);
	/// if let ErrorKind::InvalidFormat = invalid_format.kind() {
	/// 	println!("Where's the tag?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Mp3MetaError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::Alloc(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Mp3MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for Mp3MetaError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<std::io::Error> for Mp3MetaError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for Mp3MetaError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for Mp3MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::NotFound(ref path) => {
				write!(f, "File \"{}\" does not exist", path.display())
			},
			ErrorKind::InvalidFormat => {
				write!(f, "Reading: Expected an ID3v2 tag, found invalid data")
			},
			ErrorKind::UnsupportedVersion(major, revision) => write!(
				f,
				"Found an unsupported version (v2.{major}.{revision}), only ID3v2.3 is supported"
			),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}
