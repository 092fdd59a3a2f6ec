use crate::gltf::bytes::Cursor;
use crate::gltf::{Chunk, ChunkHead, ChunkIter, GlbHeader, GltfError, Result};

/// Container split into its metadata and binary ranges.
#[derive(Debug, Clone, Copy)]
pub struct GlbContainer<'a> {
	/// Parsed container header.
	pub header: GlbHeader,
	/// Raw bytes of the `JSON` chunk, not decoded.
	pub json: &'a [u8],
	/// Raw bytes of the `BIN\0` chunk, when the second chunk is one.
	pub bin: Option<&'a [u8]>,
}

impl<'a> GlbContainer<'a> {
	/// Iterate every chunk in the container, including unrecognized ones.
	pub fn chunks(bytes: &'a [u8]) -> Result<ChunkIter<'a>> {
		let header = GlbHeader::parse(bytes)?;
		Ok(ChunkIter::new(window(bytes, header), GlbHeader::SIZE))
	}
}

/// Split a binary container into its `JSON` and optional `BIN\0` chunks.
///
/// Reads are bounded by the declared total length; any read past it fails with
/// [`GltfError::TruncatedContainer`].
pub fn parse_container(bytes: &[u8]) -> Result<GlbContainer<'_>> {
	let header = GlbHeader::parse(bytes)?;
	let window = window(bytes, header);
	let mut cursor = Cursor::at(window, GlbHeader::SIZE);

	let json_head = ChunkHead::parse(&mut cursor)?;
	if !json_head.is_json() {
		return Err(GltfError::MissingMetadataChunk { tag: json_head.tag });
	}
	let json = cursor.read_exact(json_head.len as usize)?;
	tracing::debug!(offset = GlbHeader::SIZE, len = json_head.len, "json chunk");

	let mut bin = None;
	if cursor.pos() < window.len() {
		let offset = cursor.pos();
		let head = ChunkHead::parse(&mut cursor)?;
		if head.is_bin() {
			bin = Some(cursor.read_exact(head.len as usize)?);
			tracing::debug!(offset, len = head.len, "bin chunk");
		} else {
			tracing::debug!(offset, tag = ?head.tag, "second chunk is not binary, ignoring");
		}
	}

	Ok(GlbContainer { header, json, bin })
}

/// Collect all chunks of a container, failing on the first malformed one.
pub fn list_chunks(bytes: &[u8]) -> Result<Vec<Chunk<'_>>> {
	GlbContainer::chunks(bytes)?.collect()
}

fn window(bytes: &[u8], header: GlbHeader) -> &[u8] {
	&bytes[..header.length as usize]
}
