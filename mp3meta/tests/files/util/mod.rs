use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

/// A raw ID3v2.3 frame with no flags set
pub fn frame(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = id.to_vec();
	out.extend(u32::try_from(payload.len()).unwrap().to_be_bytes());
	out.extend([0, 0]);
	out.extend_from_slice(payload);
	out
}

/// A complete ID3v2.3 tag wrapping `body`, followed by a fake MPEG frame header
pub fn mp3(body: &[u8]) -> Vec<u8> {
	let mut out = b"ID3\x03\x00\x00".to_vec();
	out.extend(u32::try_from(body.len()).unwrap().to_be_bytes());
	out.extend_from_slice(body);
	out.extend([0xFF, 0xFB, 0x90, 0x00]);
	out
}

/// Write `content` to a new temporary file
pub fn temp_file(content: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(content).unwrap();
	file.flush().unwrap();

	file
}

/// Copy the asset at `path` into a [`temp_file()`]
pub fn temp_asset(path: impl AsRef<Path>) -> NamedTempFile {
	let content = std::fs::read(Path::new("tests/files/assets").join(path)).unwrap();
	temp_file(&content)
}
