/// A raw ID3v2.3 frame with no flags set
pub(crate) fn frame(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = id.to_vec();
	out.extend(u32::try_from(payload.len()).unwrap().to_be_bytes());
	out.extend([0, 0]);
	out.extend_from_slice(payload);
	out
}

/// A complete ID3v2.3 tag wrapping `body`
pub(crate) fn tag(body: &[u8]) -> Vec<u8> {
	let mut out = b"ID3\x03\x00\x00".to_vec();
	out.extend(u32::try_from(body.len()).unwrap().to_be_bytes());
	out.extend_from_slice(body);
	out
}
