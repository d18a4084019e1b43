#![allow(missing_docs)]

use mp3meta::reader::TagReader;

use std::io::Cursor;
use std::path::Path;
use std::thread;
use std::time::Instant;

mod tag_read_from;

#[allow(clippy::missing_panics_doc)]
pub fn get_reader(path: &str) -> Cursor<Vec<u8>> {
	let path = Path::new("tests/fuzz/assets").join(path);

	let b = std::fs::read(path).unwrap();
	Cursor::new(b)
}

#[allow(clippy::missing_panics_doc)]
pub fn oom_test(path: &'static str) {
	let instant = Instant::now();
	let thread = thread::spawn(|| {
		let _ = TagReader::new().read_from(&mut get_reader(path));
	});

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			return;
		}
	}

	panic!("Failed to run test");
}
