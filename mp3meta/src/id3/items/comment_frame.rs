use crate::error::Result;
use crate::id3::FrameRecord;
use crate::util::text::{Delimiter, TextEncoding, decode_field};

/// An ID3v2.3 comment frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentFrame {
	/// The encoding of the description and comment text, `None` if the frame is empty
	pub encoding: Option<TextEncoding>,
	/// ISO-639-2 language code (3 bytes)
	///
	/// This is not checked against any list of languages. Bytes missing from a short frame
	/// are zero.
	pub language: [u8; 3],
	/// Content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl CommentFrame {
	/// Read a [`CommentFrame`] from a [`FrameRecord`]
	///
	/// Fields missing from a short payload are left empty.
	///
	/// # Errors
	///
	/// None, any payload (including an empty one) decodes.
	pub fn parse(record: FrameRecord) -> Result<Self> {
		let mut cursor = record.into_cursor();

		let encoding = cursor.read_u8().map(TextEncoding::from_u8);

		let mut language = [0; 3];
		let language_bytes = cursor.read(3);
		language[..language_bytes.len()].copy_from_slice(language_bytes);

		let (description, content) = match encoding {
			Some(encoding) => (
				decode_field(&mut cursor, encoding, Delimiter::for_encoding(encoding)),
				decode_field(&mut cursor, encoding, Delimiter::None),
			),
			None => (String::new(), String::new()),
		};

		Ok(Self {
			encoding,
			language,
			description,
			content,
		})
	}

	/// The language code as a string
	///
	/// Each byte is mapped to a single character, stopping at the first zero byte.
	pub fn language_str(&self) -> String {
		self.language
			.iter()
			.copied()
			.take_while(|b| *b != 0)
			.map(char::from)
			.collect()
	}
}
