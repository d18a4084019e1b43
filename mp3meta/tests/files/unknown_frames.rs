use crate::util::temp_asset;
use mp3meta::config::{ParseOptions, UnknownFrameHandling};
use mp3meta::reader::TagReader;

// `unknown_frame.mp3` holds a `PRIV` frame with a 9 byte payload, followed by `TIT2` and `TALB`

#[test_log::test]
fn skip_by_size() {
	let file = temp_asset("unknown_frame.mp3");
	let tag = TagReader::new().read_from_path(file.path()).unwrap();

	assert_eq!(tag.len(), 2);
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.album(), Some("Album"));
}

#[test_log::test]
fn rescan() {
	let file = temp_asset("unknown_frame.mp3");
	let tag = TagReader::new()
		.options(ParseOptions::new().unknown_frames(UnknownFrameHandling::Rescan))
		.read_from_path(file.path())
		.unwrap();

	// Every frame after `PRIV` starts at an offset that is not a multiple of 4, so none are found
	assert!(tag.is_empty());
	assert!(tag.skipped_frames().is_empty());
}
