use super::header::Id3v2Header;
use super::items::{AttachedPictureFrame, CommentFrame};
use super::{Frame, FrameId, frame_name};
use crate::error::Mp3MetaError;

/// A frame that was dropped while reading with [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed)
#[derive(Debug)]
pub struct SkippedFrame {
	id: [u8; 4],
	offset: usize,
	error: Mp3MetaError,
}

impl SkippedFrame {
	pub(crate) fn new(id: [u8; 4], offset: usize, error: Mp3MetaError) -> Self {
		Self { id, offset, error }
	}

	/// The raw frame ID
	pub fn id(&self) -> &[u8; 4] {
		&self.id
	}

	/// The human-readable name of the frame
	pub fn name(&self) -> &'static str {
		frame_name(&self.id)
	}

	/// The offset of the frame, relative to the start of the tag body
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Why the frame was dropped
	pub fn error(&self) -> &Mp3MetaError {
		&self.error
	}
}

/// An ID3v2.3 tag
///
/// Frames are kept in the order they appear in the file. Duplicate frames are
/// all kept, the accessors return the first one.
///
/// ## Reading
///
/// ```rust,no_run
/// use mp3meta::reader::TagReader;
///
/// # fn main() -> mp3meta::error::Result<()> {
/// let tag = TagReader::new().read_from_path("test.mp3")?;
///
/// if let Some(title) = tag.title() {
/// 	println!("Title: {title}");
/// }
///
/// for picture in tag.pictures() {
/// 	println!("{}: {} bytes", picture.pic_type_name(), picture.data.len());
/// }
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Id3v23Tag {
	header: Id3v2Header,
	pub(crate) frames: Vec<Frame>,
	pub(crate) skipped: Vec<SkippedFrame>,
}

impl Id3v23Tag {
	pub(crate) fn new(header: Id3v2Header) -> Self {
		Self {
			header,
			frames: Vec::new(),
			skipped: Vec::new(),
		}
	}

	/// The header the tag was read with
	pub fn header(&self) -> &Id3v2Header {
		&self.header
	}

	/// All decoded frames, in file order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Consume the tag, returning the decoded frames in file order
	pub fn into_frames(self) -> Vec<Frame> {
		self.frames
	}

	/// Frames that failed to decode
	///
	/// This is only ever populated with [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed).
	pub fn skipped_frames(&self) -> &[SkippedFrame] {
		&self.skipped
	}

	/// The number of decoded frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no decoded frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Get the value of the first text frame with `id`
	pub fn get_text(&self, id: FrameId) -> Option<&str> {
		self.frames.iter().find_map(|frame| match frame {
			Frame::Text(text) if text.id == id => Some(text.value.as_str()),
			_ => None,
		})
	}

	/// `TIT2`
	pub fn title(&self) -> Option<&str> {
		self.get_text(FrameId::Title)
	}

	/// `TPE1`
	pub fn artist(&self) -> Option<&str> {
		self.get_text(FrameId::LeadArtist)
	}

	/// `TPE2`
	pub fn album_artist(&self) -> Option<&str> {
		self.get_text(FrameId::Band)
	}

	/// `TALB`
	pub fn album(&self) -> Option<&str> {
		self.get_text(FrameId::Album)
	}

	/// `TYER`
	pub fn year(&self) -> Option<&str> {
		self.get_text(FrameId::Year)
	}

	/// `TRCK`, as written (e.g. `"3"` or `"3/12"`)
	pub fn track(&self) -> Option<&str> {
		self.get_text(FrameId::TrackNumber)
	}

	/// All `COMM` frames
	pub fn comments(&self) -> impl Iterator<Item = &CommentFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::Comment(comment) => Some(comment),
			_ => None,
		})
	}

	/// All `APIC` frames
	pub fn pictures(&self) -> impl Iterator<Item = &AttachedPictureFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::Picture(picture) => Some(picture),
			_ => None,
		})
	}
}

impl IntoIterator for Id3v23Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v23Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}
