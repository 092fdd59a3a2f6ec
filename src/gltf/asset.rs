use std::fs;
use std::path::{Path, PathBuf};

use crate::gltf::{Document, GltfError, Result, parse_container};

/// On-disk flavor of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
	/// Binary container with embedded chunks.
	Glb,
	/// JSON document with an optional sidecar buffer.
	Gltf,
}

impl AssetFormat {
	/// Pick the format from a file extension, case-insensitively.
	pub fn from_path(path: &Path) -> Result<Self> {
		let ext = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
		match ext.as_deref() {
			Some("glb") => Ok(Self::Glb),
			Some("gltf") => Ok(Self::Gltf),
			_ => Err(GltfError::UnsupportedExtension { path: path.to_path_buf() }),
		}
	}

	/// Render format as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Glb => "glb",
			Self::Gltf => "gltf",
		}
	}
}

/// A loaded scene document and its binary buffer.
pub struct Asset {
	/// Source flavor.
	pub format: AssetFormat,
	/// Parsed scene document.
	pub document: Document,
	bin: Option<Vec<u8>>,
}

impl Asset {
	/// Load an asset from disk, dispatching on the file extension.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let format = AssetFormat::from_path(path)?;
		let raw = fs::read(path)?;
		tracing::info!(path = %path.display(), format = format.as_str(), bytes = raw.len(), "opened asset");

		match format {
			AssetFormat::Glb => Self::from_glb_bytes(&raw),
			AssetFormat::Gltf => Self::from_gltf_bytes(&raw, path.parent().unwrap_or(Path::new(""))),
		}
	}

	/// Build an asset from in-memory container bytes.
	pub fn from_glb_bytes(bytes: &[u8]) -> Result<Self> {
		let container = parse_container(bytes)?;
		let document = Document::from_slice(container.json)?;
		Ok(Self {
			format: AssetFormat::Glb,
			document,
			bin: container.bin.map(<[u8]>::to_vec),
		})
	}

	/// Build an asset from a JSON document, resolving `buffers[0].uri` under `base_dir`.
	pub fn from_gltf_bytes(bytes: &[u8], base_dir: &Path) -> Result<Self> {
		let document = Document::from_slice(bytes)?;
		let bin = match document.buffers.first().and_then(|buffer| buffer.uri.as_deref()) {
			Some(uri) => Some(read_sidecar(base_dir, uri)?),
			None => None,
		};

		Ok(Self {
			format: AssetFormat::Gltf,
			document,
			bin,
		})
	}

	/// Binary buffer 0, when the asset has one.
	pub fn bin(&self) -> Option<&[u8]> {
		self.bin.as_deref()
	}
}

fn read_sidecar(base_dir: &Path, uri: &str) -> Result<Vec<u8>> {
	if uri.starts_with("data:") || uri.contains("://") {
		return Err(GltfError::UnsupportedBufferUri { uri: shorten(uri) });
	}

	let path: PathBuf = base_dir.join(uri);
	let bytes = fs::read(&path).map_err(|source| GltfError::ReadBuffer { path: path.clone(), source })?;
	tracing::debug!(path = %path.display(), bytes = bytes.len(), "read sidecar buffer");
	Ok(bytes)
}

fn shorten(uri: &str) -> String {
	match uri.char_indices().nth(48) {
		Some((at, _)) => format!("{}...", &uri[..at]),
		None => uri.to_owned(),
	}
}
