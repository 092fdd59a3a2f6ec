//! Public library API for inspecting glTF 2.0 `.glb` and `.gltf` assets.

/// Container parsing, accessor decoding, and report building.
pub mod gltf;
