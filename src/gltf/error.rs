use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GltfError>;

/// Fatal errors produced while reading glTF containers and documents.
///
/// Per-accessor decode failures are not represented here; they are carried by
/// [`crate::gltf::DecodedAccessor::Err`] so sibling accessors keep decoding.
#[derive(Debug, Error)]
pub enum GltfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Referenced external buffer could not be read.
	#[error("failed to read buffer {path}: {source}")]
	ReadBuffer {
		/// Resolved path of the external buffer.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Scene document is not valid JSON or does not match the expected shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Leading container magic is not `glTF`.
	#[error("invalid container signature (magic={magic:?})")]
	InvalidSignature {
		/// First up-to-4 bytes of the input, zero padded.
		magic: [u8; 4],
	},
	/// First chunk of the container is not tagged `JSON`.
	#[error("first chunk is not a JSON chunk (tag={tag:?})")]
	MissingMetadataChunk {
		/// Tag found in place of `JSON`.
		tag: [u8; 4],
	},
	/// A header or chunk read would run past the end of the container.
	#[error("truncated container at {at}: need {need} bytes, have {rem}")]
	TruncatedContainer {
		/// Offset where the read started.
		at: usize,
		/// Bytes requested by the read.
		need: usize,
		/// Bytes remaining from `at`.
		rem: usize,
	},
	/// Input file extension is neither `.glb` nor `.gltf`.
	#[error("unsupported input extension: {path}")]
	UnsupportedExtension {
		/// Path of the rejected input.
		path: PathBuf,
	},
	/// Buffer URI scheme cannot be resolved to a sidecar file.
	#[error("unsupported buffer uri: {uri}")]
	UnsupportedBufferUri {
		/// URI as declared in the document, possibly shortened.
		uri: String,
	},
	/// Vertex data was requested but the asset carries no binary buffer.
	#[error("asset has no binary buffer but {needed_by} needs vertex data")]
	MissingBinaryBuffer {
		/// What requested the data, for example `3 primitive(s)`.
		needed_by: String,
	},
}
