use std::collections::BTreeMap;

use serde::Serialize;

use crate::gltf::{Asset, DecodeOptions, DecodedAccessor, Document, GltfError, Material, Result, decode_accessor_at};

/// Full inspection report for one asset.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
	/// Run and document summary.
	pub metadata: ReportMetadata,
	/// Material summaries.
	pub materials: Vec<MaterialReport>,
	/// Decoded meshes.
	pub meshes: Vec<MeshReport>,
}

/// Run and document summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
	/// `asset.generator`.
	pub generator: Option<String>,
	/// `asset.version`.
	pub version: Option<String>,
	/// `asset.copyright`, omitted when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copyright: Option<String>,
	/// Length of the binary buffer, absent when the asset has none.
	pub total_bytes: Option<usize>,
	/// Number of meshes.
	pub mesh_count: usize,
	/// Number of materials.
	pub material_count: usize,
	/// Number of accessors.
	pub accessor_count: usize,
	/// Element limit applied to every accessor.
	pub truncation_limit: usize,
}

/// Material summary; texture slots report the texture index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReport {
	/// Material index in the document.
	pub index: usize,
	/// Optional material name.
	pub name: Option<String>,
	/// Disables back-face culling.
	pub double_sided: bool,
	/// Declared alpha mode.
	pub alpha_mode: Option<String>,
	/// Cutoff used by `MASK`.
	pub alpha_cutoff: Option<f32>,
	/// Linear RGBA base color.
	pub base_color_factor: Option<[f32; 4]>,
	/// Metalness factor.
	pub metallic_factor: Option<f32>,
	/// Roughness factor.
	pub roughness_factor: Option<f32>,
	/// Linear emissive color.
	pub emissive_factor: Option<[f32; 3]>,
	/// Base color texture index.
	pub base_color_texture: Option<usize>,
	/// Metallic-roughness texture index.
	pub metallic_roughness_texture: Option<usize>,
	/// Normal texture index.
	pub normal_texture: Option<usize>,
	/// Occlusion texture index.
	pub occlusion_texture: Option<usize>,
	/// Emissive texture index.
	pub emissive_texture: Option<usize>,
}

/// One mesh with its decoded primitives.
#[derive(Debug, Clone, Serialize)]
pub struct MeshReport {
	/// Mesh index in the document.
	pub index: usize,
	/// Optional mesh name.
	pub name: Option<String>,
	/// Decoded primitives.
	pub primitives: Vec<PrimitiveReport>,
}

/// One primitive with decoded attribute and index data.
#[derive(Debug, Clone, Serialize)]
pub struct PrimitiveReport {
	/// Topology mode code, when declared.
	pub mode: Option<u32>,
	/// Material index, when declared.
	pub material: Option<usize>,
	/// Attribute name to decoded accessor.
	pub attributes: BTreeMap<String, DecodedAccessor>,
	/// Decoded index list, when the primitive is indexed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub indices: Option<DecodedAccessor>,
}

/// Build the report for a loaded asset.
///
/// Fails with [`GltfError::MissingBinaryBuffer`] when primitives reference
/// accessors but the asset has no binary buffer. Per-accessor failures stay
/// inside the report.
pub fn build_report(asset: &Asset, opt: &DecodeOptions) -> Result<Report> {
	let doc = &asset.document;
	let needs_data = doc.primitives_with_data();
	let bin: &[u8] = match asset.bin() {
		Some(bin) => bin,
		None if needs_data == 0 => &[],
		None => {
			return Err(GltfError::MissingBinaryBuffer {
				needed_by: format!("{needs_data} primitive(s)"),
			});
		}
	};

	Ok(Report {
		metadata: ReportMetadata {
			generator: doc.asset.generator.clone(),
			version: doc.asset.version.clone(),
			copyright: doc.asset.copyright.clone(),
			total_bytes: asset.bin().map(<[u8]>::len),
			mesh_count: doc.meshes.len(),
			material_count: doc.materials.len(),
			accessor_count: doc.accessors.len(),
			truncation_limit: opt.max_elements,
		},
		materials: doc.materials.iter().enumerate().map(|(index, material)| material_report(index, material)).collect(),
		meshes: mesh_reports(doc, bin, opt),
	})
}

fn mesh_reports(doc: &Document, bin: &[u8], opt: &DecodeOptions) -> Vec<MeshReport> {
	let mut meshes = Vec::with_capacity(doc.meshes.len());
	for (mesh_index, mesh) in doc.meshes.iter().enumerate() {
		let mut primitives = Vec::with_capacity(mesh.primitives.len());
		for (primitive_index, primitive) in mesh.primitives.iter().enumerate() {
			let mut attributes = BTreeMap::new();
			for (name, &accessor) in &primitive.attributes {
				let decoded = decode_logged(doc, accessor, bin, opt, mesh_index, primitive_index, name);
				attributes.insert(name.clone(), decoded);
			}

			let indices = primitive
				.indices
				.map(|accessor| decode_logged(doc, accessor, bin, opt, mesh_index, primitive_index, "indices"));

			primitives.push(PrimitiveReport {
				mode: primitive.mode,
				material: primitive.material,
				attributes,
				indices,
			});
		}

		meshes.push(MeshReport {
			index: mesh_index,
			name: mesh.name.clone(),
			primitives,
		});
	}
	meshes
}

fn decode_logged(
	doc: &Document,
	accessor: usize,
	bin: &[u8],
	opt: &DecodeOptions,
	mesh: usize,
	primitive: usize,
	slot: &str,
) -> DecodedAccessor {
	let decoded = decode_accessor_at(doc, accessor, bin, opt);
	if let Some(message) = decoded.error_message() {
		tracing::warn!(mesh, primitive, slot, accessor, "{message}");
	}
	decoded
}

fn material_report(index: usize, material: &Material) -> MaterialReport {
	let pbr = material.pbr_metallic_roughness.clone().unwrap_or_default();
	MaterialReport {
		index,
		name: material.name.clone(),
		double_sided: material.double_sided,
		alpha_mode: material.alpha_mode.clone(),
		alpha_cutoff: material.alpha_cutoff,
		base_color_factor: pbr.base_color_factor,
		metallic_factor: pbr.metallic_factor,
		roughness_factor: pbr.roughness_factor,
		emissive_factor: material.emissive_factor,
		base_color_texture: pbr.base_color_texture.map(|item| item.index),
		metallic_roughness_texture: pbr.metallic_roughness_texture.map(|item| item.index),
		normal_texture: material.normal_texture.map(|item| item.index),
		occlusion_texture: material.occlusion_texture.map(|item| item.index),
		emissive_texture: material.emissive_texture.map(|item| item.index),
	}
}
