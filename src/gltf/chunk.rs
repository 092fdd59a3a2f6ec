use crate::gltf::bytes::Cursor;
use crate::gltf::Result;

/// Tag of the structured-metadata chunk.
pub const CHUNK_JSON: [u8; 4] = *b"JSON";
/// Tag of the binary payload chunk.
pub const CHUNK_BIN: [u8; 4] = *b"BIN\0";

/// Parsed 8-byte chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHead {
	/// Payload length in bytes.
	pub len: u32,
	/// Raw four-byte type tag.
	pub tag: [u8; 4],
}

impl ChunkHead {
	/// Read a chunk header at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let len = cursor.read_u32_le()?;
		let tag = cursor.read_tag4()?;
		Ok(Self { len, tag })
	}

	/// True for the `JSON` chunk tag.
	pub fn is_json(&self) -> bool {
		self.tag == CHUNK_JSON
	}

	/// True for the `BIN\0` chunk tag.
	pub fn is_bin(&self) -> bool {
		self.tag == CHUNK_BIN
	}
}

/// One chunk borrowed from the container bytes.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
	/// Parsed header.
	pub head: ChunkHead,
	/// Payload bytes, exactly `head.len` long.
	pub payload: &'a [u8],
	/// Absolute offset of the chunk header.
	pub file_offset: usize,
}

/// Iterator over consecutive chunks in a container window.
///
/// Stops after the first error.
pub struct ChunkIter<'a> {
	cursor: Cursor<'a>,
	done: bool,
}

impl<'a> ChunkIter<'a> {
	/// Iterate chunks of `bytes` starting at absolute `offset`.
	pub fn new(bytes: &'a [u8], offset: usize) -> Self {
		Self {
			cursor: Cursor::at(bytes, offset),
			done: false,
		}
	}
}

impl<'a> Iterator for ChunkIter<'a> {
	type Item = Result<Chunk<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let file_offset = self.cursor.pos();
		let head = match ChunkHead::parse(&mut self.cursor) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		let payload = match self.cursor.read_exact(head.len as usize) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		Some(Ok(Chunk { head, payload, file_offset }))
	}
}
