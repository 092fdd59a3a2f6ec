use std::path::PathBuf;

use gltfdoc::gltf::{Asset, DEFAULT_MAX_ELEMENTS, DecodeOptions, Result, build_report};

use crate::cmd::util::write_json;

#[derive(clap::Args)]
pub struct Args {
	/// `.glb` or `.gltf` file to read.
	pub path: PathBuf,
	/// Write the report here instead of stdout.
	#[arg(long, short)]
	pub out: Option<PathBuf>,
	/// Elements kept per accessor before switching to `truncatedValues`.
	#[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
	pub limit: usize,
	/// Emit single-line JSON.
	#[arg(long)]
	pub compact: bool,
}

/// Build and write the full inspection report.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out, limit, compact } = args;

	let asset = Asset::open(&path)?;
	let report = build_report(&asset, &DecodeOptions { max_elements: limit })?;
	write_json(&report, out.as_deref(), compact)
}

