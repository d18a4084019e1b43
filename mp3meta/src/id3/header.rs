use crate::error::Result;
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The size of the fixed tag header
pub(crate) const HEADER_SIZE: u64 = 10;

/// The only major version this crate reads
pub(crate) const SUPPORTED_MAJOR_VERSION: u8 = 3;

/// The fixed 10 byte header at the start of an ID3v2.3 tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	pub(crate) revision: u8,
	pub(crate) flags: u8,
	/// The size of the tag body (**DOES NOT INCLUDE THE HEADER**)
	pub(crate) size: u32,
}

impl Id3v2Header {
	/// Read and validate a tag header
	///
	/// The size is a plain big-endian integer, ID3v2.3 sizes are not synchsafe.
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = Vec::with_capacity(HEADER_SIZE as usize);
		bytes.take(HEADER_SIZE).read_to_end(&mut header)?;

		if !header.starts_with(b"ID3") {
			err!(InvalidFormat);
		}

		// Version is stored as [major, revision], the revision is only informational
		let major = header.get(3).copied().unwrap_or_default();
		let revision = header.get(4).copied().unwrap_or_default();
		if major != SUPPORTED_MAJOR_VERSION {
			err!(UnsupportedVersion(major, revision));
		}

		if header.len() < HEADER_SIZE as usize {
			return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
		}

		Ok(Id3v2Header {
			revision,
			flags: header[5],
			size: BigEndian::read_u32(&header[6..]),
		})
	}

	/// The revision number, `x` in ID3v2.3.x
	pub fn revision(&self) -> u8 {
		self.revision
	}

	/// The raw header flags
	///
	/// These are preserved as read, no flag changes how the tag is decoded.
	pub fn flags(&self) -> u8 {
		self.flags
	}

	/// The size of the tag body, excluding the 10 byte header
	pub fn size(&self) -> u32 {
		self.size
	}
}
