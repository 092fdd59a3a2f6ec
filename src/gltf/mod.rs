mod accessor;
mod asset;
mod bytes;
mod chunk;
mod component;
mod container;
mod document;
mod error;
mod header;
mod report;
mod shape;
#[cfg(test)]
mod test_support;

/// Accessor decoding entry points and decoded value types.
pub use accessor::{DEFAULT_MAX_ELEMENTS, DecodeOptions, DecodedAccessor, DecodedValues, Element, accessor_error_at, decode_accessor, decode_accessor_at};
/// Asset loading from `.glb` and `.gltf` files.
pub use asset::{Asset, AssetFormat};
/// Byte helpers shared with the CLI.
pub use bytes::{Cursor, render_tag};
/// Chunk header and iterator types.
pub use chunk::{CHUNK_BIN, CHUNK_JSON, Chunk, ChunkHead, ChunkIter};
/// Component type table and decoded numbers.
pub use component::{ComponentType, Number};
/// Container splitting entry points.
pub use container::{GlbContainer, list_chunks, parse_container};
/// Scene document model.
pub use document::{Accessor, AssetInfo, Buffer, BufferView, Document, Material, Mesh, PbrMetallicRoughness, Primitive, TextureRef};
/// Error and result aliases.
pub use error::{GltfError, Result};
/// Container header representation.
pub use header::{GLB_MAGIC, GlbHeader};
/// Report builder and report types.
pub use report::{MaterialReport, MeshReport, PrimitiveReport, Report, ReportMetadata, build_report};
/// Accessor shape table.
pub use shape::AccessorShape;
