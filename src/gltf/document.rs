use std::collections::BTreeMap;

use serde::Deserialize;

use crate::gltf::Result;

/// Subset of a glTF scene document needed for inspection.
///
/// Unknown keys are ignored and every list defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	/// Asset metadata block.
	#[serde(default)]
	pub asset: AssetInfo,
	/// Material definitions.
	#[serde(default)]
	pub materials: Vec<Material>,
	/// Mesh definitions.
	#[serde(default)]
	pub meshes: Vec<Mesh>,
	/// Accessor descriptors.
	#[serde(default)]
	pub accessors: Vec<Accessor>,
	/// Buffer view descriptors.
	#[serde(default)]
	pub buffer_views: Vec<BufferView>,
	/// Buffer descriptors.
	#[serde(default)]
	pub buffers: Vec<Buffer>,
}

impl Document {
	/// Parse a document from JSON bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	/// Number of primitives that reference at least one accessor.
	pub fn primitives_with_data(&self) -> usize {
		self.meshes
			.iter()
			.flat_map(|mesh| &mesh.primitives)
			.filter(|primitive| !primitive.attributes.is_empty() || primitive.indices.is_some())
			.count()
	}
}

/// The `asset` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
	/// Tool that produced the asset.
	pub generator: Option<String>,
	/// glTF version string.
	pub version: Option<String>,
	/// Optional copyright notice.
	pub copyright: Option<String>,
}

/// Material definition, kept for the report summary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
	/// Optional material name.
	pub name: Option<String>,
	/// Metallic-roughness block.
	pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
	/// Normal map slot.
	pub normal_texture: Option<TextureRef>,
	/// Occlusion map slot.
	pub occlusion_texture: Option<TextureRef>,
	/// Emissive map slot.
	pub emissive_texture: Option<TextureRef>,
	/// Linear emissive color.
	pub emissive_factor: Option<[f32; 3]>,
	/// `OPAQUE`, `MASK`, or `BLEND`.
	pub alpha_mode: Option<String>,
	/// Cutoff used by `MASK`.
	pub alpha_cutoff: Option<f32>,
	/// Disables back-face culling.
	#[serde(default)]
	pub double_sided: bool,
}

/// Metallic-roughness factors and textures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
	/// Linear RGBA base color.
	pub base_color_factor: Option<[f32; 4]>,
	/// Base color map slot.
	pub base_color_texture: Option<TextureRef>,
	/// Metalness, 0 to 1.
	pub metallic_factor: Option<f32>,
	/// Roughness, 0 to 1.
	pub roughness_factor: Option<f32>,
	/// Combined metallic-roughness map slot.
	pub metallic_roughness_texture: Option<TextureRef>,
}

/// Reference to a texture slot.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureRef {
	/// Texture index.
	pub index: usize,
}

/// A mesh and its primitives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
	/// Optional mesh name.
	pub name: Option<String>,
	/// Primitives in declaration order.
	#[serde(default)]
	pub primitives: Vec<Primitive>,
}

/// One drawable primitive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
	/// Attribute name to accessor index, for example `POSITION`.
	#[serde(default)]
	pub attributes: BTreeMap<String, usize>,
	/// Accessor index of the index list.
	pub indices: Option<usize>,
	/// Material index.
	pub material: Option<usize>,
	/// Topology mode code.
	pub mode: Option<u32>,
}

/// Accessor descriptor as declared in the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
	/// Owning buffer view index.
	pub buffer_view: Option<usize>,
	/// Offset relative to the buffer view.
	pub byte_offset: Option<u64>,
	/// Numeric component-type code.
	pub component_type: u32,
	/// Whether integer components are normalized.
	#[serde(default)]
	pub normalized: bool,
	/// Element count.
	pub count: usize,
	/// Shape tag such as `VEC3`.
	#[serde(rename = "type")]
	pub shape: String,
	/// Declared per-component minimum, echoed verbatim.
	pub min: Option<serde_json::Value>,
	/// Declared per-component maximum, echoed verbatim.
	pub max: Option<serde_json::Value>,
	/// Optional accessor name.
	pub name: Option<String>,
}

/// Byte range of a buffer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
	/// Owning buffer index; only buffer 0 is read.
	#[serde(default)]
	pub buffer: usize,
	/// Offset into the buffer.
	pub byte_offset: Option<u64>,
	/// Length of the view; accessor windows past it are logged.
	#[serde(default)]
	pub byte_length: u64,
	/// Declared stride; anything but the element size is refused as interleaved.
	pub byte_stride: Option<u32>,
}

/// Buffer descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
	/// External location; absent for the container's binary chunk.
	pub uri: Option<String>,
}
