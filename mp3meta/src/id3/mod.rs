//! ID3v2.3 items and utilities
//!
//! ## Important notes
//!
//! * Only ID3v2.3 tags are read, ID3v2.2 and ID3v2.4 tags are rejected
//! * Only the `TIT2`, `TPE1`, `TPE2`, `TALB`, `TYER`, `TRCK`, `COMM`, and `APIC` frames are decoded
//! * Frame flags are preserved, but never acted on. Compressed, encrypted, or unsynchronised
//!   frames will decode as garbage.

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
mod tag;
#[cfg(test)]
pub(crate) mod test_util;

pub use frame::{Frame, FrameId, FrameRecord, UNKNOWN_FRAME_NAME, frame_name};
pub use header::Id3v2Header;
pub use items::*;
pub use tag::{Id3v23Tag, SkippedFrame};
