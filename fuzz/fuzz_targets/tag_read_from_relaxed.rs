#![no_main]

use libfuzzer_sys::fuzz_target;
use mp3meta::config::{ParseOptions, ParsingMode, UnknownFrameHandling};
use mp3meta::reader::TagReader;

fuzz_target!(|data: &[u8]| {
	let options = ParseOptions::new()
		.parsing_mode(ParsingMode::Relaxed)
		.unknown_frames(UnknownFrameHandling::Rescan);

	let _ = TagReader::new().options(options).read_from(&mut &data[..]);
});
