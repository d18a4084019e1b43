use crate::error::Result;
use crate::id3::{FrameId, FrameRecord};
use crate::util::text::{Delimiter, TextEncoding, decode_field};

/// An ID3v2.3 text information frame
///
/// The value is the entire rest of the frame. Any null terminator present in the frame is
/// kept as a trailing `'\0'`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInformationFrame {
	pub(crate) id: FrameId,
	/// The encoding of the text, `None` if the frame is empty
	pub encoding: Option<TextEncoding>,
	/// The text itself
	pub value: String,
}

impl TextInformationFrame {
	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// Get the human-readable name for the frame
	pub fn name(&self) -> &'static str {
		self.id.name()
	}

	/// Read a [`TextInformationFrame`] from a [`FrameRecord`]
	///
	/// The frame keeps the record's ID, which is expected to be a text frame ID.
	///
	/// An empty payload produces an empty value with no encoding.
	///
	/// # Errors
	///
	/// None, any payload (including an empty one) decodes.
	pub fn parse(record: FrameRecord) -> Result<Self> {
		let id = record.id;
		let mut cursor = record.into_cursor();

		let encoding = cursor.read_u8().map(TextEncoding::from_u8);
		let value = encoding
			.map(|encoding| decode_field(&mut cursor, encoding, Delimiter::None))
			.unwrap_or_default();

		Ok(Self {
			id,
			encoding,
			value,
		})
	}
}
