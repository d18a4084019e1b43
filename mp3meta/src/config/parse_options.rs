/// Options to control how mp3meta reads a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) unknown_frames: UnknownFrameHandling,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	unknown_frames: UnknownFrameHandling::SkipBySize,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default handling of unrecognized frames
	pub const DEFAULT_UNKNOWN_FRAME_HANDLING: UnknownFrameHandling =
		UnknownFrameHandling::SkipBySize;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			unknown_frames: Self::DEFAULT_UNKNOWN_FRAME_HANDLING,
			read_cover_art: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::config::{ParseOptions, ParsingMode};
	///
	/// // One bad frame shouldn't cost me the rest of the tag
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// How to step over frames with an unrecognized ID, see [`UnknownFrameHandling`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::config::{ParseOptions, UnknownFrameHandling};
	///
	/// // Reproduce the output of older readers byte for byte
	/// let parsing_options = ParseOptions::new().unknown_frames(UnknownFrameHandling::Rescan);
	/// ```
	pub fn unknown_frames(&mut self, unknown_frames: UnknownFrameHandling) -> Self {
		self.unknown_frames = unknown_frames;
		*self
	}

	/// Whether or not to decode cover art
	///
	/// When disabled, `APIC` frames are still consumed, but never decoded or returned.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::config::ParseOptions;
	///
	/// // Decoding cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`TagReader::options`](crate::reader::TagReader::options).
///
/// # Examples
///
/// ```rust,no_run
/// use mp3meta::config::{ParseOptions, ParsingMode};
/// use mp3meta::reader::TagReader;
///
/// # fn main() -> mp3meta::error::Result<()> {
/// // Only well-formed tags, please
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let tag = TagReader::new()
/// 	.options(parsing_options)
/// 	.read_from_path("foo.mp3")?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Tag body shorter than its declared size - The reader will error
	/// * A frame runs past the end of the tag - The reader will error and all frames are discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// Frames are still all-or-nothing: a single frame that cannot be decoded discards
	/// the entire tag.
	///
	/// ## Examples of behavior
	///
	/// * Tag body shorter than its declared size - The available bytes are decoded
	/// * A frame runs past the end of the tag - The reader will error and all frames are discarded
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// Frames that cannot be decoded are dropped and reported through
	/// [`Id3v23Tag::skipped_frames`](crate::id3::Id3v23Tag::skipped_frames).
	///
	/// ## Examples of behavior
	///
	/// * Tag body shorter than its declared size - The available bytes are decoded
	/// * A frame runs past the end of the tag - The frame is skipped, all prior frames are kept
	Relaxed,
}

/// How to step over a frame whose ID is not one of the recognized frames
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum UnknownFrameHandling {
	/// Read the frame's size and skip its payload
	///
	/// A frame ID of four zero bytes is treated as the start of the tag padding and
	/// ends the frame iteration.
	#[default]
	SkipBySize,
	/// Consume only the 4 ID bytes, treating the following 4 bytes as the next frame ID
	///
	/// This matches older readers that never skip unrecognized frames. The size, flags, and
	/// payload of the unknown frame are scanned as if they were more frame IDs, so a recognized
	/// ID that happens to appear in that data will be decoded as a frame.
	Rescan,
}
