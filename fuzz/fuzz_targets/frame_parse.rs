#![no_main]

use libfuzzer_sys::fuzz_target;
use mp3meta::id3::{Frame, FrameId, FrameRecord};

fuzz_target!(|data: &[u8]| {
	let Some((&selector, payload)) = data.split_first() else {
		return;
	};

	let id = match selector % 4 {
		0 => FrameId::Title,
		1 => FrameId::Comment,
		2 => FrameId::AttachedPicture,
		_ => FrameId::Year,
	};

	let _ = Frame::parse(FrameRecord::new(id, payload.to_vec()));
});
