#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Two-vertex line with a float position accessor and a u16 index accessor.
const LINE_DOC: &str = r#"{
	"asset": { "generator": "cmd-tests", "version": "2.0" },
	"meshes": [{ "name": "Line", "primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1, "mode": 1 }] }],
	"accessors": [
		{ "bufferView": 0, "componentType": 5126, "count": 2, "type": "VEC3" },
		{ "bufferView": 1, "componentType": 5123, "count": 2, "type": "SCALAR" }
	],
	"bufferViews": [
		{ "buffer": 0, "byteOffset": 0, "byteLength": 24 },
		{ "buffer": 0, "byteOffset": 24, "byteLength": 4 }
	],
	"buffers": [{ "byteLength": 28 }]
}"#;

fn line_bin() -> Vec<u8> {
	let mut bin: Vec<u8> = [0.0_f32, 0.0, 0.0, 1.0, 2.0, 3.0].iter().flat_map(|value| value.to_le_bytes()).collect();
	bin.extend_from_slice(&0_u16.to_le_bytes());
	bin.extend_from_slice(&1_u16.to_le_bytes());
	bin
}

fn write_glb(dir: &Path, name: &str, json: &str, bin: Option<&[u8]>) -> PathBuf {
	let mut json_chunk = json.as_bytes().to_vec();
	while json_chunk.len() % 4 != 0 {
		json_chunk.push(b' ');
	}

	let mut body = Vec::new();
	body.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
	body.extend_from_slice(b"JSON");
	body.extend_from_slice(&json_chunk);
	if let Some(bin) = bin {
		body.extend_from_slice(&(bin.len() as u32).to_le_bytes());
		body.extend_from_slice(b"BIN\0");
		body.extend_from_slice(bin);
	}

	let mut bytes = Vec::new();
	bytes.extend_from_slice(b"glTF");
	bytes.extend_from_slice(&2_u32.to_le_bytes());
	bytes.extend_from_slice(&((12 + body.len()) as u32).to_le_bytes());
	bytes.extend_from_slice(&body);

	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}

fn run_gltfdoc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_gltfdoc")).args(args).output().expect("gltfdoc command executes")
}

fn run_gltfdoc_json(args: &[&str]) -> Value {
	let output = run_gltfdoc(args);
	assert!(
		output.status.success(),
		"gltfdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

#[test]
fn report_writes_decoded_values_to_stdout() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let path = path.to_string_lossy().into_owned();
	let json = run_gltfdoc_json(&["report", &path]);

	assert_eq!(json["metadata"]["generator"], "cmd-tests");
	assert_eq!(json["metadata"]["totalBytes"], 28);
	let primitive = &json["meshes"][0]["primitives"][0];
	assert_eq!(primitive["attributes"]["POSITION"]["values"][1], json!([1.0, 2.0, 3.0]));
	assert_eq!(primitive["indices"]["values"], json!([0, 1]));
}

#[test]
fn report_limit_switches_to_truncated_values() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let path = path.to_string_lossy().into_owned();
	let json = run_gltfdoc_json(&["report", &path, "--limit", "1", "--compact"]);

	assert_eq!(json["metadata"]["truncationLimit"], 1);
	let position = &json["meshes"][0]["primitives"][0]["attributes"]["POSITION"];
	assert_eq!(position["truncatedValues"].as_array().map(Vec::len), Some(1));
	assert!(position.get("values").is_none());
}

#[test]
fn report_writes_output_file() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let out = dir.path().join("report.json");

	let output = run_gltfdoc(&["report", &path.to_string_lossy(), "--out", &out.to_string_lossy()]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let text = std::fs::read_to_string(&out).expect("report written");
	let json: serde_json::Value = serde_json::from_str(&text).expect("report is json");
	assert_eq!(json["metadata"]["meshCount"], 1);
}

#[test]
fn report_fails_without_binary_chunk() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, None);

	let output = run_gltfdoc(&["report", &path.to_string_lossy()]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("no binary buffer"));
}

#[test]
fn info_json_lists_chunk_table() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let path = path.to_string_lossy().into_owned();
	let json = run_gltfdoc_json(&["info", &path, "--json"]);

	assert_eq!(json["format"], "glb");
	assert_eq!(json["bin_bytes"], 28);
	assert_eq!(json["generator"], "cmd-tests");
	assert_eq!(json["container"]["version"], 2);

	let chunks = json["container"]["chunks"].as_array().expect("chunk list");
	let tags: Vec<_> = chunks.iter().filter_map(|chunk| chunk["tag"].as_str()).collect();
	assert_eq!(tags, vec!["JSON", "BIN"]);
	assert_eq!(chunks[0]["offset"], 12);

	assert_eq!(json["counts"]["meshes"], 1);
	assert_eq!(json["counts"]["primitives"], 1);
	assert_eq!(json["counts"]["accessors"], 2);
}

#[test]
fn info_text_output_mentions_chunks() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let output = run_gltfdoc(&["info", &path.to_string_lossy()]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("format: glb"));
	assert!(stdout.contains("  JSON: offset=12"));
	assert!(stdout.contains("meshes: 1"));
}

#[test]
fn info_rejects_unsupported_extension() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("scene.fbx");
	std::fs::write(&path, b"glTF").expect("write");

	let output = run_gltfdoc(&["info", &path.to_string_lossy()]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported input extension"));
}

#[test]
fn accessor_command_decodes_single_accessor() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));
	let json = run_gltfdoc_json(&["accessor", &path.to_string_lossy(), "0"]);

	assert_eq!(json["type"], "VEC3");
	assert_eq!(json["componentType"], "FLOAT");
	assert_eq!(json["values"], json!([[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]));
}

#[test]
fn accessor_command_reports_out_of_range_index_as_json() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_glb(dir.path(), "line.glb", LINE_DOC, Some(&line_bin()));

	let json = run_gltfdoc_json(&["accessor", &path.to_string_lossy(), "5"]);
	assert_eq!(json, json!({ "error": "Accessor 5 out of range" }));
}

#[test]
fn accessor_command_reports_unknown_type_without_binary() {
	let dir = tempfile::tempdir().expect("tempdir");
	let doc = r#"{
		"asset": { "version": "2.0" },
		"accessors": [{ "bufferView": 0, "componentType": 9999, "count": 1, "type": "SCALAR" }],
		"bufferViews": [{ "buffer": 0, "byteLength": 4 }],
		"buffers": [{ "byteLength": 4 }]
	}"#;
	let path = write_glb(dir.path(), "nobin.glb", doc, None);

	let json = run_gltfdoc_json(&["accessor", &path.to_string_lossy(), "0"]);
	assert_eq!(json, json!({ "error": "Unknown component type: 9999" }));

	let valid = doc.replace("9999", "5126");
	let path = write_glb(dir.path(), "nobin-valid.glb", &valid, None);
	let output = run_gltfdoc(&["accessor", &path.to_string_lossy(), "0"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("accessor 0 needs vertex data"));
}

#[test]
fn report_reads_gltf_with_sidecar_buffer() {
	let dir = tempfile::tempdir().expect("tempdir");
	std::fs::write(dir.path().join("line.bin"), line_bin()).expect("write bin");
	let doc = LINE_DOC.replace(r#"{ "byteLength": 28 }"#, r#"{ "byteLength": 28, "uri": "line.bin" }"#);
	let path = dir.path().join("line.gltf");
	std::fs::write(&path, doc).expect("write doc");

	let json = run_gltfdoc_json(&["report", &path.to_string_lossy()]);
	assert_eq!(json["metadata"]["totalBytes"], 28);
	assert_eq!(json["meshes"][0]["primitives"][0]["indices"]["values"], json!([0, 1]));
}
