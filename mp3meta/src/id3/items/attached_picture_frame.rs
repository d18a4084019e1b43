use crate::error::Result;
use crate::id3::FrameRecord;
use crate::picture::PictureType;
use crate::util::text::{Delimiter, TextEncoding, decode_field};

use data_encoding::BASE64;

/// An ID3v2.3 attached picture frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The encoding of the description, `None` if the frame is empty
	pub encoding: Option<TextEncoding>,
	/// The picture's MIME type, such as `"image/png"`
	///
	/// This is always stored as Latin-1, regardless of [`AttachedPictureFrame::encoding`].
	pub mime_type: String,
	/// The picture type, `None` if the frame ends before it
	pub pic_type: Option<PictureType>,
	/// The picture's description
	pub description: String,
	/// The binary data of the picture
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Read an [`AttachedPictureFrame`] from a [`FrameRecord`]
	///
	/// The picture data is everything in the payload after the description, it never extends
	/// past the frame's declared size.
	///
	/// Fields missing from a short payload are left empty.
	///
	/// # Errors
	///
	/// None, any payload (including an empty one) decodes.
	pub fn parse(record: FrameRecord) -> Result<Self> {
		let mut cursor = record.into_cursor();

		let encoding = cursor.read_u8().map(TextEncoding::from_u8);

		let mime_type = decode_field(&mut cursor, TextEncoding::Latin1, Delimiter::Single(0));

		let pic_type = cursor.read_u8().map(PictureType::from_u8);
		if let Some(PictureType::Undefined(code)) = pic_type {
			log::warn!("Encountered an unknown picture type: {code:#04x}");
		}

		let description = encoding
			.map(|encoding| decode_field(&mut cursor, encoding, Delimiter::for_encoding(encoding)))
			.unwrap_or_default();
		let data = cursor.read_to_end().to_vec();

		Ok(Self {
			encoding,
			mime_type,
			pic_type,
			description,
			data,
		})
	}

	/// The description of the picture type, `"Unknown"` if it is missing
	///
	/// See [`PictureType::name`].
	pub fn pic_type_name(&self) -> &'static str {
		self.pic_type.map_or("Unknown", PictureType::name)
	}

	/// The picture data, base64 encoded (standard alphabet, padded)
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::id3::{AttachedPictureFrame, FrameId, FrameRecord};
	///
	/// # fn main() -> mp3meta::error::Result<()> {
	/// let record = FrameRecord::new(FrameId::AttachedPicture, b"\x00image/png\x00\x03\x00PNG".to_vec());
	/// let picture = AttachedPictureFrame::parse(record)?;
	///
	/// assert_eq!(picture.base64_data(), "UE5H");
	/// # Ok(()) }
	/// ```
	pub fn base64_data(&self) -> String {
		BASE64.encode(&self.data)
	}
}
