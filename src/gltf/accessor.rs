use serde::Serialize;
use serde::ser::SerializeMap;

use crate::gltf::{Accessor, AccessorShape, BufferView, ComponentType, Document, Number};

/// Element count above which decoded values are truncated.
pub const DEFAULT_MAX_ELEMENTS: usize = 20;

/// Limits applied while decoding accessors.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum number of elements kept; more marks the result truncated.
	pub max_elements: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_elements: DEFAULT_MAX_ELEMENTS,
		}
	}
}

/// One decoded element: a bare number for `SCALAR`, otherwise a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
	/// `SCALAR` element.
	Scalar(Number),
	/// Vector or matrix element in raw component order.
	Group(Vec<Number>),
}

/// Successfully decoded accessor data.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedValues {
	/// Resolved shape.
	pub shape: AccessorShape,
	/// Resolved component type.
	pub component_type: ComponentType,
	/// Declared element count.
	pub count: usize,
	/// Whether integer components are declared normalized.
	pub normalized: bool,
	/// Accessor name, when declared.
	pub name: Option<String>,
	/// Declared minimum, verbatim.
	pub min: Option<serde_json::Value>,
	/// Declared maximum, verbatim.
	pub max: Option<serde_json::Value>,
	/// Decoded elements, at most the configured limit.
	pub elements: Vec<Element>,
	/// True when elements past the limit were dropped.
	pub truncated: bool,
}

/// Result of decoding a single accessor.
///
/// Serializes to an object carrying exactly one of `values` or
/// `truncatedValues`, or to `{"error": ...}` alone.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedAccessor {
	/// Decoded data.
	Ok(DecodedValues),
	/// Accessor could not be decoded; siblings are unaffected.
	Err {
		/// Human-readable reason.
		message: String,
	},
}

impl DecodedAccessor {
	fn error(message: impl Into<String>) -> Self {
		Self::Err { message: message.into() }
	}

	/// Decoded values, if decoding succeeded.
	pub fn values(&self) -> Option<&DecodedValues> {
		match self {
			Self::Ok(values) => Some(values),
			Self::Err { .. } => None,
		}
	}

	/// Error message, if decoding failed.
	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Ok(_) => None,
			Self::Err { message } => Some(message),
		}
	}
}

impl Serialize for DecodedAccessor {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Err { message } => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry("error", message)?;
				map.end()
			}
			Self::Ok(values) => {
				let mut map = serializer.serialize_map(None)?;
				if let Some(name) = &values.name {
					map.serialize_entry("name", name)?;
				}
				map.serialize_entry("type", values.shape.as_str())?;
				map.serialize_entry("componentType", values.component_type.as_str())?;
				map.serialize_entry("normalized", &values.normalized)?;
				map.serialize_entry("count", &values.count)?;
				map.serialize_entry("min", &values.min)?;
				map.serialize_entry("max", &values.max)?;
				let key = if values.truncated { "truncatedValues" } else { "values" };
				map.serialize_entry(key, &values.elements)?;
				map.end()
			}
		}
	}
}

/// Decode one accessor against its buffer view and the binary buffer.
///
/// The window `[view.byteOffset + accessor.byteOffset, +count * elementSize)`
/// is clamped to `bin`, so a window past the end yields fewer elements instead
/// of failing. Trailing bytes that do not form a whole element are ignored.
/// Interleaved views (a `byteStride` other than the element size) are refused.
pub fn decode_accessor(accessor: &Accessor, view: &BufferView, bin: &[u8], opt: &DecodeOptions) -> DecodedAccessor {
	let layout = match AccessorLayout::resolve(accessor, view) {
		Ok(layout) => layout,
		Err(message) => return DecodedAccessor::error(message),
	};
	let AccessorLayout {
		component_type,
		shape,
		start,
		len,
	} = layout;

	if view.byte_length > 0 && accessor.byte_offset.map_or(0, to_usize).saturating_add(len) > to_usize(view.byte_length) {
		tracing::warn!(
			byte_offset = accessor.byte_offset.unwrap_or(0),
			len,
			view_len = view.byte_length,
			"accessor window runs past its buffer view"
		);
	}

	let component_size = component_type.size();
	let element_size = layout.element_size();
	let window = bin.get(start..).map(|rest| &rest[..len.min(rest.len())]).unwrap_or(&[]);
	let available = window.len() / element_size;
	let kept = available.min(opt.max_elements);

	let elements = window[..kept * element_size]
		.chunks_exact(element_size)
		.filter_map(|raw| {
			if shape.is_scalar() {
				component_type.read_le(raw).map(Element::Scalar)
			} else {
				raw.chunks_exact(component_size)
					.map(|item| component_type.read_le(item))
					.collect::<Option<Vec<_>>>()
					.map(Element::Group)
			}
		})
		.collect();

	DecodedAccessor::Ok(DecodedValues {
		shape,
		component_type,
		count: accessor.count,
		normalized: accessor.normalized,
		name: accessor.name.clone(),
		min: accessor.min.clone(),
		max: accessor.max.clone(),
		elements,
		truncated: available > opt.max_elements,
	})
}

/// Resolve accessor `index` in `doc` and decode it.
///
/// Missing accessors or buffer views are reported as per-accessor errors.
pub fn decode_accessor_at(doc: &Document, index: usize, bin: &[u8], opt: &DecodeOptions) -> DecodedAccessor {
	match resolve_at(doc, index) {
		Ok((accessor, view)) => decode_accessor(accessor, view, bin, opt),
		Err(message) => DecodedAccessor::error(message),
	}
}

/// Per-accessor error for `index` that is known before any byte is read.
///
/// Returns `None` when decoding would go on to read the binary buffer.
pub fn accessor_error_at(doc: &Document, index: usize) -> Option<DecodedAccessor> {
	let result = resolve_at(doc, index).and_then(|(accessor, view)| AccessorLayout::resolve(accessor, view));
	result.err().map(DecodedAccessor::error)
}

/// Resolved types and byte window of one accessor.
#[derive(Debug, Clone, Copy)]
struct AccessorLayout {
	component_type: ComponentType,
	shape: AccessorShape,
	start: usize,
	len: usize,
}

impl AccessorLayout {
	fn resolve(accessor: &Accessor, view: &BufferView) -> Result<Self, String> {
		let component_type = ComponentType::from_code(accessor.component_type)
			.ok_or_else(|| format!("Unknown component type: {}", accessor.component_type))?;
		let shape = AccessorShape::from_tag(&accessor.shape).ok_or_else(|| format!("Unknown accessor type: {}", accessor.shape))?;

		let element_size = component_type.size() * shape.components();
		if let Some(stride) = view.byte_stride
			&& stride as usize != element_size
		{
			return Err(format!("Interleaved buffer view (byteStride {stride}) is not supported"));
		}

		Ok(Self {
			component_type,
			shape,
			start: to_usize(view.byte_offset.unwrap_or(0)).saturating_add(to_usize(accessor.byte_offset.unwrap_or(0))),
			len: accessor.count.saturating_mul(element_size),
		})
	}

	fn element_size(&self) -> usize {
		self.component_type.size() * self.shape.components()
	}
}

fn resolve_at(doc: &Document, index: usize) -> Result<(&Accessor, &BufferView), String> {
	let accessor = doc.accessors.get(index).ok_or_else(|| format!("Accessor {index} out of range"))?;
	let view_index = accessor.buffer_view.ok_or_else(|| format!("Accessor {index} has no buffer view"))?;
	let view = doc.buffer_views.get(view_index).ok_or_else(|| format!("Buffer view {view_index} out of range"))?;
	if view.buffer != 0 {
		return Err(format!("Buffer {} is not supported, only buffer 0 is read", view.buffer));
	}
	Ok((accessor, view))
}

fn to_usize(value: u64) -> usize {
	usize::try_from(value).unwrap_or(usize::MAX)
}
