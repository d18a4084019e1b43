use super::frame::read::ParsedFrame;
use super::header::Id3v2Header;
use super::tag::{Id3v23Tag, SkippedFrame};
use crate::config::ParseOptions;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::macros::parse_mode_choice;
use crate::util::alloc::VecFallibleCapacity;
use crate::util::cursor::ByteCursor;

use std::io::Read;

/// Read the tag header and buffer the entire tag body
///
/// Nothing past the tag body is read from `bytes`.
pub(crate) fn read_tag_body<R>(
	bytes: &mut R,
	parse_options: ParseOptions,
) -> Result<(Id3v2Header, Vec<u8>)>
where
	R: Read,
{
	let header = Id3v2Header::parse(bytes)?;

	let mut body = Vec::try_with_capacity_stable(header.size as usize)?;
	bytes.take(u64::from(header.size)).read_to_end(&mut body)?;

	if body.len() < header.size as usize {
		let parsing_mode = parse_options.parsing_mode;
		parse_mode_choice!(
			parsing_mode,
			STRICT: {
				return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedTag {
					expected: header.size,
					actual: body.len() as u64,
				})
				.into());
			},
			DEFAULT: log::warn!(
				"Tag body is truncated (expected {} bytes, found {}), reading what is available",
				header.size,
				body.len()
			)
		);
	}

	Ok((header, body))
}

pub(crate) fn parse_id3v23(
	body: Vec<u8>,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v23Tag> {
	log::debug!(
		"Parsing ID3v2.3 tag, size: {}, revision: {}",
		header.size,
		header.revision
	);

	let mut tag = Id3v23Tag::new(header);
	let mut cursor = ByteCursor::new(body);
	let parsing_mode = parse_options.parsing_mode;

	while !cursor.is_at_end() {
		let offset = cursor.position();

		let Some(id) = cursor.read_array::<4>() else {
			// Not enough room for another frame ID
			log::trace!("Ignoring {} trailing bytes", cursor.remaining());
			break;
		};

		match ParsedFrame::read(&mut cursor, id, parse_options) {
			Ok(ParsedFrame::Next(frame)) => tag.frames.push(frame),
			Ok(ParsedFrame::Skip) => {},
			Ok(ParsedFrame::Eof) => break,
			Err(err) => {
				parse_mode_choice!(
					parsing_mode,
					RELAXED: {
						log::warn!(
							"Failed to read frame {:?} at offset {offset}, skipping: {err}",
							String::from_utf8_lossy(&id)
						);
						tag.skipped.push(SkippedFrame::new(id, offset, err));
					},
					DEFAULT: return Err(err)
				);
			},
		}
	}

	Ok(tag)
}
