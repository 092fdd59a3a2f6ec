/// Build a container from a JSON document and an optional binary chunk.
///
/// Chunks are padded to 4-byte alignment the way exporters write them.
pub(crate) fn glb_bytes(json: &str, bin: Option<&[u8]>) -> Vec<u8> {
	let mut json_chunk = json.as_bytes().to_vec();
	while json_chunk.len() % 4 != 0 {
		json_chunk.push(b' ');
	}

	let mut chunks = Vec::new();
	push_chunk(&mut chunks, *b"JSON", &json_chunk);
	if let Some(bin) = bin {
		let mut bin_chunk = bin.to_vec();
		while bin_chunk.len() % 4 != 0 {
			bin_chunk.push(0);
		}
		push_chunk(&mut chunks, *b"BIN\0", &bin_chunk);
	}

	let mut out = Vec::new();
	out.extend_from_slice(b"glTF");
	out.extend_from_slice(&2_u32.to_le_bytes());
	out.extend_from_slice(&((12 + chunks.len()) as u32).to_le_bytes());
	out.extend_from_slice(&chunks);
	out
}

pub(crate) fn push_chunk(out: &mut Vec<u8>, tag: [u8; 4], payload: &[u8]) {
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(&tag);
	out.extend_from_slice(payload);
}

pub(crate) fn f32_bytes(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}
