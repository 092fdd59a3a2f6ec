use std::fs;
use std::path::Path;

use gltfdoc::gltf::Result;
use serde::Serialize;

/// Serialize `value` as JSON, pretty unless `compact`.
pub(crate) fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
	let text = if compact {
		serde_json::to_string(value)?
	} else {
		serde_json::to_string_pretty(value)?
	};
	Ok(text)
}

/// Print JSON payload to stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
	println!("{}", to_json(value, compact)?);
	Ok(())
}

/// Write JSON payload to `path`, or stdout when `path` is `None`.
pub(crate) fn write_json<T: Serialize>(value: &T, path: Option<&Path>, compact: bool) -> Result<()> {
	let Some(path) = path else {
		return emit_json(value, compact);
	};

	let mut text = to_json(value, compact)?;
	text.push('\n');
	fs::write(path, text)?;
	tracing::info!(path = %path.display(), "wrote report");
	Ok(())
}
