use super::{Frame, FrameId, FrameRecord};
use crate::config::{ParseOptions, UnknownFrameHandling};
use crate::error::Result;
use crate::util::cursor::ByteCursor;

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

impl ParsedFrame {
	/// Read the frame starting at `id`, whose ID has already been consumed
	///
	/// Unrecognized IDs never produce an error, even if the frame they
	/// introduce is malformed. The caller decides what to do with frame errors.
	pub(crate) fn read(
		cursor: &mut ByteCursor,
		id: [u8; 4],
		parse_options: ParseOptions,
	) -> Result<Self> {
		let Some(frame_id) = FrameId::from_bytes(&id) else {
			return Ok(handle_unknown_frame(cursor, id, parse_options));
		};

		let record = FrameRecord::read(cursor, frame_id)?;

		if !parse_options.read_cover_art && frame_id == FrameId::AttachedPicture {
			log::trace!("Skipping cover art");
			return Ok(Self::Skip);
		}

		Frame::parse(record).map(Self::Next)
	}
}

fn handle_unknown_frame(
	cursor: &mut ByteCursor,
	id: [u8; 4],
	parse_options: ParseOptions,
) -> ParsedFrame {
	match parse_options.unknown_frames {
		UnknownFrameHandling::Rescan => {
			log::trace!(
				"Unrecognized frame ID {:?}, rescanning from the next byte group",
				String::from_utf8_lossy(&id)
			);
			ParsedFrame::Skip
		},
		UnknownFrameHandling::SkipBySize => {
			if id == [0; 4] {
				log::debug!("Found padding, stopping");
				return ParsedFrame::Eof;
			}

			if FrameRecord::skip(cursor) {
				ParsedFrame::Skip
			} else {
				log::warn!(
					"Unrecognized frame {:?} runs past the end of the tag, stopping",
					String::from_utf8_lossy(&id)
				);
				ParsedFrame::Eof
			}
		},
	}
}
