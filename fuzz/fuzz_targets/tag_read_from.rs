#![no_main]

use libfuzzer_sys::fuzz_target;
use mp3meta::reader::TagReader;

fuzz_target!(|data: &[u8]| {
	let _ = TagReader::new().read_from(&mut &data[..]);
});
