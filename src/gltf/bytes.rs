use crate::gltf::{GltfError, Result};

/// Bounded little-endian cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor positioned at absolute offset `pos`.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(GltfError::TruncatedContainer {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a four-byte tag.
	pub fn read_tag4(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_tag4()?))
	}
}

/// Copy up to the first 4 bytes of `bytes`, zero padding the rest.
pub(crate) fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}

/// Render a four-byte tag as a printable label.
pub fn render_tag(tag: [u8; 4]) -> String {
	let mut out = String::new();
	for byte in tag {
		if byte == 0 {
			continue;
		}
		if byte.is_ascii_graphic() || byte == b' ' {
			out.push(char::from(byte));
		} else {
			out.push('.');
		}
	}
	if out.is_empty() { "....".to_owned() } else { out }
}
