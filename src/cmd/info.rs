use std::fs;
use std::path::{Path, PathBuf};

use gltfdoc::gltf::{Asset, AssetFormat, Document, GlbHeader, Result, list_chunks, render_tag};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// `.glb` or `.gltf` file to read.
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print container layout and document counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let format = AssetFormat::from_path(&path)?;
	let raw = fs::read(&path)?;
	let (container, asset) = match format {
		AssetFormat::Glb => {
			let header = GlbHeader::parse(&raw)?;
			let chunks = list_chunks(&raw)?
				.iter()
				.map(|chunk| ChunkJson {
					tag: render_tag(chunk.head.tag),
					offset: chunk.file_offset,
					length: chunk.head.len,
				})
				.collect();
			let container = ContainerJson {
				version: header.version,
				length: header.length,
				chunks,
			};
			(Some(container), Asset::from_glb_bytes(&raw)?)
		}
		AssetFormat::Gltf => (None, Asset::from_gltf_bytes(&raw, path.parent().unwrap_or(Path::new("")))?),
	};

	let payload = InfoJson {
		path: path.display().to_string(),
		format: format.as_str(),
		file_bytes: raw.len(),
		bin_bytes: asset.bin().map(<[u8]>::len),
		generator: asset.document.asset.generator.clone(),
		version: asset.document.asset.version.clone(),
		container,
		counts: counts(&asset.document),
	};

	if json {
		return emit_json(&payload, false);
	}

	println!("path: {}", payload.path);
	println!("format: {}", payload.format);
	println!("file_bytes: {}", payload.file_bytes);
	println!("bin_bytes: {}", opt_label(payload.bin_bytes));
	println!("generator: {}", payload.generator.as_deref().unwrap_or("-"));
	println!("version: {}", payload.version.as_deref().unwrap_or("-"));
	if let Some(container) = &payload.container {
		println!("container_version: {}", container.version);
		println!("container_length: {}", container.length);
		println!("chunks:");
		for chunk in &container.chunks {
			println!("  {}: offset={} length={}", chunk.tag, chunk.offset, chunk.length);
		}
	}
	let counts = &payload.counts;
	println!("meshes: {}", counts.meshes);
	println!("primitives: {}", counts.primitives);
	println!("materials: {}", counts.materials);
	println!("accessors: {}", counts.accessors);
	println!("buffer_views: {}", counts.buffer_views);
	println!("buffers: {}", counts.buffers);

	Ok(())
}

fn counts(doc: &Document) -> CountsJson {
	CountsJson {
		meshes: doc.meshes.len(),
		primitives: doc.meshes.iter().map(|mesh| mesh.primitives.len()).sum(),
		materials: doc.materials.len(),
		accessors: doc.accessors.len(),
		buffer_views: doc.buffer_views.len(),
		buffers: doc.buffers.len(),
	}
}

fn opt_label(value: Option<usize>) -> String {
	value.map(|item| item.to_string()).unwrap_or_else(|| "-".to_owned())
}

#[derive(serde::Serialize)]
struct ChunkJson {
	tag: String,
	offset: usize,
	length: u32,
}

#[derive(serde::Serialize)]
struct ContainerJson {
	version: u32,
	length: u32,
	chunks: Vec<ChunkJson>,
}

#[derive(serde::Serialize)]
struct CountsJson {
	meshes: usize,
	primitives: usize,
	materials: usize,
	accessors: usize,
	buffer_views: usize,
	buffers: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	format: &'static str,
	file_bytes: usize,
	bin_bytes: Option<usize>,
	generator: Option<String>,
	version: Option<String>,
	container: Option<ContainerJson>,
	counts: CountsJson,
}
