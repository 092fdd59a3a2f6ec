use crate::gltf::bytes::{Cursor, first4};
use crate::gltf::{GltfError, Result};

/// Fixed container signature.
pub const GLB_MAGIC: [u8; 4] = *b"glTF";

/// Parsed 12-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
	/// Container version field, not validated.
	pub version: u32,
	/// Declared total container length in bytes.
	pub length: u32,
}

impl GlbHeader {
	/// Header size in bytes.
	pub const SIZE: usize = 12;

	/// Parse the container header from the beginning of `bytes`.
	///
	/// The signature is checked before anything else, so short buffers with a
	/// wrong prefix report [`GltfError::InvalidSignature`].
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if !bytes.starts_with(&GLB_MAGIC) {
			return Err(GltfError::InvalidSignature { magic: first4(bytes) });
		}

		let mut cursor = Cursor::new(bytes);
		let _magic = cursor.read_tag4()?;
		let version = cursor.read_u32_le()?;
		let length = cursor.read_u32_le()?;

		if length as usize > bytes.len() {
			return Err(GltfError::TruncatedContainer {
				at: 0,
				need: length as usize,
				rem: bytes.len(),
			});
		}

		Ok(Self { version, length })
	}
}
