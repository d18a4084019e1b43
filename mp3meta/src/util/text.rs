use crate::util::cursor::ByteCursor;

use std::fmt::{Display, Formatter};

/// The text encoding of an ID3v2.3 frame
///
/// ID3v2.3 only defines two encodings. Any other marker byte (such as the ID3v2.4 UTF-16BE
/// and UTF-8 markers) is preserved as [`TextEncoding::Unsupported`], and text fields using it
/// decode to an empty string.
///
/// The `Display` implementation formats the marker byte as two hex digits, e.g. `"01"`.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1,
	/// UTF-16 with a byte order mark
	UTF16,
	/// Any other marker byte
	Unsupported(u8),
}

impl TextEncoding {
	/// Get a `TextEncoding` from a frame's encoding marker
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(1), TextEncoding::UTF16);
	/// assert_eq!(TextEncoding::from_u8(3), TextEncoding::Unsupported(3));
	/// ```
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0 => Self::Latin1,
			1 => Self::UTF16,
			_ => Self::Unsupported(byte),
		}
	}

	/// Get the marker byte for this `TextEncoding`
	pub fn as_u8(self) -> u8 {
		match self {
			Self::Latin1 => 0,
			Self::UTF16 => 1,
			Self::Unsupported(byte) => byte,
		}
	}
}

impl Display for TextEncoding {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02x}", self.as_u8())
	}
}

/// The byte sequence that ends a text field
///
/// A [`Delimiter::Single`] is only ever compared against single bytes ([`TextEncoding::Latin1`]),
/// and a [`Delimiter::Double`] against 2-byte units ([`TextEncoding::UTF16`]). A delimiter of the
/// wrong width never matches, and the field runs to the end of the buffer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Delimiter {
	/// The field occupies the rest of the buffer
	None,
	Single(u8),
	Double([u8; 2]),
}

impl Delimiter {
	/// The null terminator for `encoding`
	pub(crate) fn for_encoding(encoding: TextEncoding) -> Self {
		match encoding {
			TextEncoding::Latin1 => Self::Single(0),
			TextEncoding::UTF16 => Self::Double([0, 0]),
			TextEncoding::Unsupported(_) => Self::None,
		}
	}
}

/// Decode a single text field, stopping after `delimiter` or at the end of the buffer
///
/// The delimiter is consumed, but not included in the output. With [`Delimiter::None`], any
/// null bytes in the rest of the buffer are kept as `'\0'`.
///
/// A UTF-16 field always starts with a 2 byte BOM, which is read on every call. `FF FE`
/// selects little endian, anything else selects big endian.
pub(crate) fn decode_field(
	cursor: &mut ByteCursor,
	encoding: TextEncoding,
	delimiter: Delimiter,
) -> String {
	match encoding {
		TextEncoding::Latin1 => latin1_decode_field(cursor, delimiter),
		TextEncoding::UTF16 => utf16_decode_field(cursor, delimiter),
		TextEncoding::Unsupported(byte) => {
			log::warn!("Encountered an unsupported text encoding ({byte:#04x}), skipping field");
			String::new()
		},
	}
}

fn latin1_decode_field(cursor: &mut ByteCursor, delimiter: Delimiter) -> String {
	let mut text = String::new();
	while let Some(byte) = cursor.read_u8() {
		if delimiter == Delimiter::Single(byte) {
			break;
		}

		// Latin-1 maps directly onto the first 256 code points
		text.push(char::from(byte));
	}

	text
}

fn utf16_decode_field(cursor: &mut ByteCursor, delimiter: Delimiter) -> String {
	let little_endian = cursor.read(2) == [0xFF, 0xFE];
	let endianness: fn([u8; 2]) -> u16 = if little_endian {
		u16::from_le_bytes
	} else {
		u16::from_be_bytes
	};

	let mut units = Vec::new();
	while !cursor.is_at_end() {
		let Some(unit) = cursor.read_array::<2>() else {
			// Trailing odd byte
			cursor.read_to_end();
			break;
		};

		if delimiter == Delimiter::Double(unit) {
			break;
		}

		units.push(endianness(unit));
	}

	utf16_decode(&units)
}

pub(crate) fn utf16_decode(units: &[u16]) -> String {
	char::decode_utf16(units.iter().copied())
		.map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
		.collect()
}

#[cfg(test)]
pub(crate) fn latin1_encode(text: &str, terminated: bool) -> Vec<u8> {
	let mut out = text
		.chars()
		.map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
		.collect::<Vec<u8>>();
	if terminated {
		out.push(0);
	}

	out
}

#[cfg(test)]
pub(crate) fn utf16_le_encode(text: &str, terminated: bool) -> Vec<u8> {
	let mut out = vec![0xFF, 0xFE];
	for unit in text.encode_utf16() {
		out.extend_from_slice(&unit.to_le_bytes());
	}

	if terminated {
		out.extend_from_slice(&[0, 0]);
	}

	out
}
