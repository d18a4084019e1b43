use byteorder::{BigEndian, ByteOrder};

/// An owned, in-memory byte buffer with a read position
///
/// Reads never fail, they return however many bytes remain. Callers that need an exact
/// number of bytes use [`ByteCursor::read_array`], which only advances on success.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ByteCursor {
	data: Vec<u8>,
	pos: usize,
}

impl ByteCursor {
	pub(crate) fn new(data: Vec<u8>) -> Self {
		Self { data, pos: 0 }
	}

	/// Read up to `n` bytes, the returned slice is shorter than `n` at the end of the buffer
	pub(crate) fn read(&mut self, n: usize) -> &[u8] {
		let start = self.pos;
		let end = start.saturating_add(n).min(self.data.len());
		self.pos = end;

		&self.data[start..end]
	}

	pub(crate) fn read_u8(&mut self) -> Option<u8> {
		let byte = *self.data.get(self.pos)?;
		self.pos += 1;
		Some(byte)
	}

	pub(crate) fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
		if self.remaining() < N {
			return None;
		}

		let mut out = [0; N];
		out.copy_from_slice(self.read(N));
		Some(out)
	}

	pub(crate) fn read_u32_be(&mut self) -> Option<u32> {
		self.read_array::<4>().map(|bytes| BigEndian::read_u32(&bytes))
	}

	pub(crate) fn read_u16_be(&mut self) -> Option<u16> {
		self.read_array::<2>().map(|bytes| BigEndian::read_u16(&bytes))
	}

	/// The rest of the buffer, leaving the cursor at the end
	pub(crate) fn read_to_end(&mut self) -> &[u8] {
		let start = self.pos;
		self.pos = self.data.len();

		&self.data[start..]
	}

	/// Move to an absolute position, clamped to the length of the buffer
	pub(crate) fn seek(&mut self, pos: usize) {
		self.pos = pos.min(self.data.len());
	}

	pub(crate) fn skip(&mut self, n: usize) {
		self.seek(self.pos.saturating_add(n));
	}

	pub(crate) fn position(&self) -> usize {
		self.pos
	}

	pub(crate) fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub(crate) fn is_at_end(&self) -> bool {
		self.pos >= self.data.len()
	}
}
