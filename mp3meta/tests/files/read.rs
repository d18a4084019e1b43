use crate::util::{frame, mp3, temp_asset, temp_file};
use mp3meta::TextEncoding;
use mp3meta::config::ParseOptions;
use mp3meta::id3::{Frame, FrameId};
use mp3meta::picture::PictureType;
use mp3meta::reader::TagReader;

#[test_log::test]
fn read() {
	let file = temp_asset("full_test.mp3");
	let tag = TagReader::new().read_from_path(file.path()).unwrap();

	assert_eq!(tag.header().revision(), 0);
	assert_eq!(tag.len(), 8);
	assert!(tag.skipped_frames().is_empty());

	assert_eq!(tag.title(), Some("Foo title"));
	assert_eq!(tag.artist(), Some("Foo artist"));
	assert_eq!(tag.album_artist(), Some("Various"));
	assert_eq!(tag.album(), Some("Bar album"));
	assert_eq!(tag.year(), Some("2004"));
	assert_eq!(tag.track(), Some("3/12"));

	let comment = tag.comments().next().unwrap();
	assert_eq!(comment.language_str(), "eng");
	assert_eq!(comment.description, "desc");
	assert_eq!(comment.content, "Hello");

	let picture = tag.pictures().next().unwrap();
	assert_eq!(picture.mime_type, "image/png");
	assert_eq!(picture.pic_type, Some(PictureType::CoverFront));
	assert_eq!(picture.pic_type_name(), "Cover (front)");
	assert_eq!(picture.description, "cover");
	assert_eq!(&picture.data[..4], b"\x89PNG");
	assert_eq!(picture.data.len(), 16);
}

#[test_log::test]
fn frames_keep_file_order() {
	let file = temp_asset("full_test.mp3");
	let frames = mp3meta::read_tags(file.path()).unwrap();

	let names = frames.iter().map(Frame::name).collect::<Vec<_>>();
	assert_eq!(
		names,
		[
			"Title/songname/content description",
			"Lead performer(s)/Soloist(s)",
			"Band/orchestra/accompaniment",
			"Album/Movie/Show title",
			"Year",
			"Track number/Position in set",
			"Comments",
			"Attached picture",
		]
	);

	assert_eq!(frames[0].encoding(), Some(TextEncoding::Latin1));
	assert_eq!(frames[1].encoding(), Some(TextEncoding::UTF16));
}

#[test_log::test]
fn text_frame() {
	let file = temp_file(&mp3(&frame(b"TALB", b"\x00Hi")));
	let frames = mp3meta::read_tags(file.path()).unwrap();

	let [Frame::Text(text)] = &frames[..] else {
		panic!("Expected a single text frame, got {frames:?}");
	};

	assert_eq!(text.id(), FrameId::Album);
	assert_eq!(text.name(), "Album/Movie/Show title");
	assert_eq!(text.encoding.as_ref().map(ToString::to_string).as_deref(), Some("00"));
	assert_eq!(text.value, "Hi");
}

#[test_log::test]
fn comment_frame() {
	let file = temp_file(&mp3(&frame(
		b"COMM",
		b"\x01eng\xFF\xFE\x00\x00\xFF\xFEH\x00i\x00",
	)));
	let frames = mp3meta::read_tags(file.path()).unwrap();

	let [Frame::Comment(comment)] = &frames[..] else {
		panic!("Expected a single comment frame, got {frames:?}");
	};

	assert_eq!(comment.encoding, Some(TextEncoding::UTF16));
	assert_eq!(comment.language_str(), "eng");
	assert_eq!(comment.description, "");
	assert_eq!(comment.content, "Hi");
}

#[test_log::test]
fn picture_frame() {
	let blob = [0x89, 0x50, 0x4E, 0x47, 0x00, 0x00, 0xFF, 0x00];

	let mut payload = b"\x00image/png\x00\x03\x00".to_vec();
	payload.extend(blob);

	let file = temp_file(&mp3(&frame(b"APIC", &payload)));
	let frames = mp3meta::read_tags(file.path()).unwrap();

	let [Frame::Picture(picture)] = &frames[..] else {
		panic!("Expected a single picture frame, got {frames:?}");
	};

	assert_eq!(picture.mime_type, "image/png");
	assert_eq!(picture.pic_type.as_ref().map(ToString::to_string).as_deref(), Some("03"));
	assert_eq!(picture.pic_type_name(), "Cover (front)");
	assert_eq!(picture.description, "");
	assert_eq!(picture.data, blob);
	assert_eq!(picture.base64_data(), "iVBORwAA/wA=");
}

#[test_log::test]
fn zero_size_frame_between_frames() {
	let mut body = frame(b"TIT2", b"\x00Title");
	body.extend(frame(b"TYER", b""));
	body.extend(frame(b"TALB", b"\x00Album"));
	let file = temp_file(&mp3(&body));

	let frames = mp3meta::read_tags(file.path()).unwrap();
	assert_eq!(frames.len(), 3);

	let Frame::Text(year) = &frames[1] else {
		panic!("Expected a text frame, got {:?}", frames[1]);
	};
	assert_eq!(year.id(), FrameId::Year);
	assert_eq!(year.encoding, None);
	assert_eq!(year.value, "");

	let tag = mp3meta::read_tag_from_path(file.path(), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.album(), Some("Album"));
}

#[test_log::test]
fn skip_cover_art() {
	let file = temp_asset("full_test.mp3");
	let tag = TagReader::new()
		.options(ParseOptions::new().read_cover_art(false))
		.read_from_path(file.path())
		.unwrap();

	assert_eq!(tag.len(), 7);
	assert_eq!(tag.pictures().count(), 0);
	assert_eq!(tag.title(), Some("Foo title"));
}

#[test_log::test]
fn reading_twice_is_identical() {
	let file = temp_asset("full_test.mp3");

	let first = mp3meta::read_tags(file.path()).unwrap();
	let second = mp3meta::read_tags(file.path()).unwrap();

	assert_eq!(first, second);
}

#[test_log::test]
fn read_from_reader() {
	let content = std::fs::read("tests/files/assets/full_test.mp3").unwrap();

	let mut reader = &content[..];
	let tag = TagReader::new().read_from(&mut reader).unwrap();

	assert_eq!(tag.title(), Some("Foo title"));
	// Only the tag is consumed
	assert_eq!(&reader[..4], &[0xFF, 0xFB, 0x90, 0x00]);
}

#[test_log::test]
fn empty_tag() {
	let file = temp_file(&mp3(&[]));
	let tag = TagReader::new().read_from_path(file.path()).unwrap();

	assert!(tag.is_empty());
	assert_eq!(tag.header().size(), 0);
}
