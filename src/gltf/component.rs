use serde::Serialize;

/// Scalar encoding of accessor components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
	/// Signed 8-bit integer, code `5120`.
	Byte,
	/// Unsigned 8-bit integer, code `5121`.
	UnsignedByte,
	/// Signed 16-bit integer, code `5122`.
	Short,
	/// Unsigned 16-bit integer, code `5123`.
	UnsignedShort,
	/// Unsigned 32-bit integer, code `5125`.
	UnsignedInt,
	/// IEEE 754 32-bit float, code `5126`.
	Float,
}

impl ComponentType {
	/// Every supported component type in code order.
	pub const ALL: [Self; 6] = [
		Self::Byte,
		Self::UnsignedByte,
		Self::Short,
		Self::UnsignedShort,
		Self::UnsignedInt,
		Self::Float,
	];

	/// Resolve a numeric component-type code.
	pub fn from_code(code: u32) -> Option<Self> {
		match code {
			5120 => Some(Self::Byte),
			5121 => Some(Self::UnsignedByte),
			5122 => Some(Self::Short),
			5123 => Some(Self::UnsignedShort),
			5125 => Some(Self::UnsignedInt),
			5126 => Some(Self::Float),
			_ => None,
		}
	}

	/// Numeric code as written in documents.
	pub fn code(self) -> u32 {
		match self {
			Self::Byte => 5120,
			Self::UnsignedByte => 5121,
			Self::Short => 5122,
			Self::UnsignedShort => 5123,
			Self::UnsignedInt => 5125,
			Self::Float => 5126,
		}
	}

	/// Size of one component in bytes.
	pub fn size(self) -> usize {
		match self {
			Self::Byte | Self::UnsignedByte => 1,
			Self::Short | Self::UnsignedShort => 2,
			Self::UnsignedInt | Self::Float => 4,
		}
	}

	/// Stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Byte => "BYTE",
			Self::UnsignedByte => "UNSIGNED_BYTE",
			Self::Short => "SHORT",
			Self::UnsignedShort => "UNSIGNED_SHORT",
			Self::UnsignedInt => "UNSIGNED_INT",
			Self::Float => "FLOAT",
		}
	}

	/// Decode one little-endian component; `raw` must be exactly [`Self::size`] bytes.
	pub fn read_le(self, raw: &[u8]) -> Option<Number> {
		Some(match self {
			Self::Byte => Number::Int(i64::from(i8::from_le_bytes(raw.try_into().ok()?))),
			Self::UnsignedByte => Number::Int(i64::from(u8::from_le_bytes(raw.try_into().ok()?))),
			Self::Short => Number::Int(i64::from(i16::from_le_bytes(raw.try_into().ok()?))),
			Self::UnsignedShort => Number::Int(i64::from(u16::from_le_bytes(raw.try_into().ok()?))),
			Self::UnsignedInt => Number::Int(i64::from(u32::from_le_bytes(raw.try_into().ok()?))),
			Self::Float => Number::Float(f32::from_le_bytes(raw.try_into().ok()?)),
		})
	}
}

/// One decoded component value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
	/// Any integer component type, widened.
	Int(i64),
	/// `FLOAT` component.
	Float(f32),
}

impl Number {
	/// Widen to `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(value) => value as f64,
			Self::Float(value) => f64::from(value),
		}
	}
}
