use crate::{get_reader, oom_test};
use mp3meta::config::{ParseOptions, ParsingMode, UnknownFrameHandling};
use mp3meta::error::ErrorKind;
use mp3meta::reader::TagReader;

#[test_log::test]
fn oom1() {
	oom_test("oom-declared-size");
}

#[test_log::test]
fn declared_size_over_allocation_limit() {
	let err = TagReader::new()
		.read_from(&mut get_reader("oom-declared-size"))
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));
}

#[test_log::test]
fn crash1() {
	for parsing_mode in [
		ParsingMode::Strict,
		ParsingMode::BestAttempt,
		ParsingMode::Relaxed,
	] {
		for unknown_frames in [UnknownFrameHandling::SkipBySize, UnknownFrameHandling::Rescan] {
			let options = ParseOptions::new()
				.parsing_mode(parsing_mode)
				.unknown_frames(unknown_frames);

			let _ = TagReader::new()
				.options(options)
				.read_from(&mut get_reader("crash-frame-size"));
		}
	}
}

#[test_log::test]
fn every_truncation() {
	let content = get_reader("crash-frame-size").into_inner();

	for len in 0..content.len() {
		let _ = TagReader::new().read_from(&mut &content[..len]);
	}
}
