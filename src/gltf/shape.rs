/// Grouping arity declared by an accessor's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorShape {
	/// One component per element.
	Scalar,
	/// Two-component vector.
	Vec2,
	/// Three-component vector.
	Vec3,
	/// Four-component vector.
	Vec4,
	/// 2x2 matrix.
	Mat2,
	/// 3x3 matrix.
	Mat3,
	/// 4x4 matrix.
	Mat4,
}

impl AccessorShape {
	/// Every supported shape.
	pub const ALL: [Self; 7] = [Self::Scalar, Self::Vec2, Self::Vec3, Self::Vec4, Self::Mat2, Self::Mat3, Self::Mat4];

	/// Resolve a shape tag such as `VEC3`. Tags are case-sensitive.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"SCALAR" => Some(Self::Scalar),
			"VEC2" => Some(Self::Vec2),
			"VEC3" => Some(Self::Vec3),
			"VEC4" => Some(Self::Vec4),
			"MAT2" => Some(Self::Mat2),
			"MAT3" => Some(Self::Mat3),
			"MAT4" => Some(Self::Mat4),
			_ => None,
		}
	}

	/// Tag as written in documents.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scalar => "SCALAR",
			Self::Vec2 => "VEC2",
			Self::Vec3 => "VEC3",
			Self::Vec4 => "VEC4",
			Self::Mat2 => "MAT2",
			Self::Mat3 => "MAT3",
			Self::Mat4 => "MAT4",
		}
	}

	/// Components per element.
	pub fn components(self) -> usize {
		match self {
			Self::Scalar => 1,
			Self::Vec2 => 2,
			Self::Vec3 => 3,
			Self::Vec4 | Self::Mat2 => 4,
			Self::Mat3 => 9,
			Self::Mat4 => 16,
		}
	}

	/// True when elements are emitted as bare numbers.
	pub fn is_scalar(self) -> bool {
		self == Self::Scalar
	}
}
