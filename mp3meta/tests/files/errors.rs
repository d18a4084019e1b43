use crate::util::{frame, mp3, temp_asset, temp_file};
use mp3meta::config::{ParseOptions, ParsingMode};
use mp3meta::error::{ErrorKind, Id3v2ErrorKind};
use mp3meta::reader::TagReader;

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nothing_here.mp3");

	let err = mp3meta::read_tags(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotFound(p) if *p == path));
	assert!(err.to_string().contains("nothing_here.mp3"));
}

#[test_log::test]
fn no_tag() {
	let file = temp_asset("no_tag.mp3");

	let err = mp3meta::read_tags(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFormat));
}

#[test_log::test]
fn empty_file() {
	let file = temp_file(&[]);

	let err = mp3meta::read_tags(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn unsupported_version() {
	let file = temp_asset("id3v24.mp3");

	let err = mp3meta::read_tags(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(4, 0)));
}

#[test_log::test]
fn bad_frame_length() {
	let file = temp_asset("bad_frame_length.mp3");

	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt] {
		let err = TagReader::new()
			.options(ParseOptions::new().parsing_mode(parsing_mode))
			.read_from_path(file.path())
			.unwrap_err();

		let ErrorKind::Id3v2(id3v2_err) = err.kind() else {
			panic!("Expected an ID3v2 error, got {err:?}");
		};
		assert_eq!(id3v2_err.kind(), &Id3v2ErrorKind::BadFrameLength);
	}
}

#[test_log::test]
fn truncated_tag() {
	let mut content = mp3(&frame(b"TIT2", b"\x00Title"));
	// Claim 64 more bytes than the file holds
	content[9] += 64;
	let file = temp_file(&content);

	let err = TagReader::new()
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.read_from_path(file.path())
		.unwrap_err();
	let ErrorKind::Id3v2(id3v2_err) = err.kind() else {
		panic!("Expected an ID3v2 error, got {err:?}");
	};
	assert!(matches!(
		id3v2_err.kind(),
		Id3v2ErrorKind::TruncatedTag { .. }
	));

	// Otherwise everything available is read, the fake MPEG frame header included
	let tag = TagReader::new().read_from_path(file.path()).unwrap();
	assert_eq!(tag.title(), Some("Title"));
}
