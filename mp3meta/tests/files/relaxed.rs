use crate::util::{frame, mp3, temp_asset, temp_file};
use mp3meta::config::{ParseOptions, ParsingMode};
use mp3meta::error::ErrorKind;
use mp3meta::reader::TagReader;

fn relaxed() -> TagReader {
	TagReader::new().options(ParseOptions::new().parsing_mode(ParsingMode::Relaxed))
}

#[test_log::test]
fn frame_past_end_is_skipped() {
	let file = temp_asset("bad_frame_length.mp3");
	let tag = relaxed().read_from_path(file.path()).unwrap();

	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.artist(), None);

	let [skipped] = tag.skipped_frames() else {
		panic!("Expected a single skipped frame");
	};
	assert_eq!(skipped.id(), b"TPE1");
	assert_eq!(skipped.name(), "Lead performer(s)/Soloist(s)");
	assert_eq!(skipped.offset(), 16);
	assert!(matches!(skipped.error().kind(), ErrorKind::Id3v2(_)));
}

#[test_log::test]
fn short_frames_are_not_skipped() {
	// A picture with no room for its picture type
	let mut body = frame(b"APIC", b"\x00image/png\x00");
	body.extend(frame(b"TYER", b""));
	body.extend(frame(b"TALB", b"\x00Album"));
	let file = temp_file(&mp3(&body));

	let tag = relaxed().read_from_path(file.path()).unwrap();
	assert_eq!(tag.len(), 3);
	assert!(tag.skipped_frames().is_empty());

	let picture = tag.pictures().next().unwrap();
	assert_eq!(picture.mime_type, "image/png");
	assert_eq!(picture.pic_type, None);
	assert_eq!(tag.year(), Some(""));
	assert_eq!(tag.album(), Some("Album"));
}

#[test_log::test]
fn header_errors_are_still_fatal() {
	let file = temp_asset("id3v24.mp3");

	let err = relaxed().read_from_path(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(4, 0)));
}
