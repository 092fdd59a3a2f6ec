use std::path::PathBuf;

use gltfdoc::gltf::{
	Asset, DEFAULT_MAX_ELEMENTS, DecodeOptions, GltfError, Result, accessor_error_at, decode_accessor_at,
};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// `.glb` or `.gltf` file to read.
	pub path: PathBuf,
	/// Accessor index in the document.
	pub index: usize,
	/// Elements kept before switching to `truncatedValues`.
	#[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
	pub limit: usize,
	/// Emit single-line JSON.
	#[arg(long)]
	pub compact: bool,
}

/// Decode one accessor and print it as JSON.
///
/// Lookup and layout failures print as `{"error": ...}`; only a missing
/// binary buffer for an otherwise decodable accessor is fatal.
pub fn run(args: Args) -> Result<()> {
	let Args { path, index, limit, compact } = args;

	let asset = Asset::open(&path)?;
	let decoded = match (accessor_error_at(&asset.document, index), asset.bin()) {
		(Some(err), _) => err,
		(None, Some(bin)) => decode_accessor_at(&asset.document, index, bin, &DecodeOptions { max_elements: limit }),
		(None, None) => {
			return Err(GltfError::MissingBinaryBuffer {
				needed_by: format!("accessor {index}"),
			});
		}
	};
	emit_json(&decoded, compact)
}
