use super::FrameId;
use crate::error::Result;
use crate::macros::{id3v2_err, try_vec};
use crate::util::cursor::ByteCursor;

/// A single raw frame, as found in the tag body
///
/// The payload is exactly `size` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRecord {
	pub(crate) id: FrameId,
	pub(crate) size: u32,
	pub(crate) flags: u16,
	pub(crate) payload: Vec<u8>,
}

impl FrameRecord {
	/// Create a `FrameRecord` with no flags set
	///
	/// The declared size is the payload length, saturating at `u32::MAX`.
	pub fn new(id: FrameId, payload: Vec<u8>) -> Self {
		Self {
			id,
			size: u32::try_from(payload.len()).unwrap_or(u32::MAX),
			flags: 0,
			payload,
		}
	}

	/// Read the rest of a frame whose ID has already been consumed
	///
	/// If the frame runs past the end of the tag, the cursor is moved to the end.
	pub(crate) fn read(cursor: &mut ByteCursor, id: FrameId) -> Result<Self> {
		let (Some(size), Some(flags)) = (cursor.read_u32_be(), cursor.read_u16_be()) else {
			cursor.read_to_end();
			id3v2_err!(@BAIL BadFrameLength);
		};

		log::trace!("Reading frame {id}, size: {size}");

		let len = size as usize;
		if len > cursor.remaining() {
			log::debug!(
				"Frame {id} claims {len} bytes, only {} remain",
				cursor.remaining()
			);
			cursor.read_to_end();
			id3v2_err!(@BAIL BadFrameLength);
		}

		// The cursor moves past the payload even if it can't be allocated
		let bytes = cursor.read(len);
		let mut payload = try_vec![0; len];
		payload.copy_from_slice(bytes);

		Ok(Self {
			id,
			size,
			flags,
			payload,
		})
	}

	/// Skip an unrecognized frame whose ID has already been consumed
	///
	/// Returns `false` if the frame header or payload runs past the end of the tag,
	/// in which case the cursor is moved to the end.
	pub(crate) fn skip(cursor: &mut ByteCursor) -> bool {
		let Some(size) = cursor.read_u32_be() else {
			cursor.read_to_end();
			return false;
		};

		let len = size as usize;
		if cursor.remaining() < 2 || len > cursor.remaining() - 2 {
			cursor.read_to_end();
			return false;
		}

		log::trace!("Skipping frame of size {size}");
		cursor.skip(2 + len);
		true
	}

	/// The frame ID
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// The size declared in the frame header
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The raw frame flags
	///
	/// These are preserved as read, no flag changes how the frame is decoded.
	pub fn flags(&self) -> u16 {
		self.flags
	}

	/// The frame content
	pub fn payload(&self) -> &[u8] {
		&self.payload
	}

	pub(crate) fn into_cursor(self) -> ByteCursor {
		ByteCursor::new(self.payload)
	}
}
