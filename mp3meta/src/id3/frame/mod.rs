mod id;
pub(crate) mod read;
mod record;

pub use id::{FrameId, UNKNOWN_FRAME_NAME, frame_name};
pub use record::FrameRecord;

use super::items::{AttachedPictureFrame, CommentFrame, TextInformationFrame};
use crate::error::Result;
use crate::util::text::TextEncoding;

/// A decoded ID3v2.3 frame
///
/// The variant is chosen by the frame ID:
///
/// * `TIT2`, `TPE1`, `TPE2`, `TALB`, `TYER`, `TRCK` - [`Frame::Text`]
/// * `COMM` - [`Frame::Comment`]
/// * `APIC` - [`Frame::Picture`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
	/// A text information frame
	Text(TextInformationFrame),
	/// A comment frame
	Comment(CommentFrame),
	/// An attached picture frame
	Picture(AttachedPictureFrame),
}

impl Frame {
	/// Decode a [`FrameRecord`] into the variant matching its ID
	///
	/// A payload that is too short for all of a frame's fields decodes with those fields empty.
	///
	/// # Errors
	///
	/// None, any payload (including an empty one) decodes.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::id3::{Frame, FrameRecord};
	///
	/// # fn main() -> mp3meta::error::Result<()> {
	/// # let record = FrameRecord::new(mp3meta::id3::FrameId::Album, vec![0, b'H', b'i']);
	/// if let Frame::Text(text) = Frame::parse(record)? {
	/// 	assert_eq!(text.value, "Hi");
	/// }
	/// # Ok(()) }
	/// ```
	pub fn parse(record: FrameRecord) -> Result<Self> {
		match record.id {
			FrameId::Comment => CommentFrame::parse(record).map(Self::Comment),
			FrameId::AttachedPicture => AttachedPictureFrame::parse(record).map(Self::Picture),
			_ => TextInformationFrame::parse(record).map(Self::Text),
		}
	}

	/// The ID of the frame
	pub fn id(&self) -> FrameId {
		match self {
			Self::Text(text) => text.id,
			Self::Comment(_) => FrameId::Comment,
			Self::Picture(_) => FrameId::AttachedPicture,
		}
	}

	/// The human-readable name of the frame
	pub fn name(&self) -> &'static str {
		self.id().name()
	}

	/// The encoding declared by the frame, `None` if the frame is empty
	pub fn encoding(&self) -> Option<TextEncoding> {
		match self {
			Self::Text(text) => text.encoding,
			Self::Comment(comment) => comment.encoding,
			Self::Picture(picture) => picture.encoding,
		}
	}
}
