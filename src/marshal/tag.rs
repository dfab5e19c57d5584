/// Absence of a value.
pub const CODE_NONE: u8 = b'N';
/// 32-bit integer.
pub const CODE_INT: u8 = b'i';
/// 32-bit integer, alternate code with identical framing.
pub const CODE_INT2: u8 = b'c';
/// 64-bit float.
pub const CODE_FLOAT: u8 = b'g';
/// Length-prefixed string.
pub const CODE_STRING: u8 = b's';
/// Length-prefixed unicode string.
pub const CODE_UNICODE: u8 = b'u';
/// Length-prefixed interned string.
pub const CODE_INTERNED: u8 = b't';
/// Count-prefixed tuple.
pub const CODE_TUPLE: u8 = b'(';
/// Count-prefixed list.
pub const CODE_LIST: u8 = b'[';
/// Stop-terminated mapping.
pub const CODE_DICT: u8 = b'{';
/// Mapping terminator.
pub const CODE_STOP: u8 = b'0';

/// Decoder family selected by a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// `N`
	None,
	/// `i`, `c`
	Int,
	/// `g`
	Float,
	/// `s`, `u`, `t`
	Text,
	/// `(`, `[`
	Sequence,
	/// `{`
	Mapping,
	/// `0`; only meaningful inside a mapping.
	Stop,
}

impl Tag {
	/// Classify a tag byte, or `None` for codes outside the supported set.
	pub fn from_byte(code: u8) -> Option<Self> {
		match code {
			CODE_NONE => Some(Self::None),
			CODE_INT | CODE_INT2 => Some(Self::Int),
			CODE_FLOAT => Some(Self::Float),
			CODE_STRING | CODE_UNICODE | CODE_INTERNED => Some(Self::Text),
			CODE_TUPLE | CODE_LIST => Some(Self::Sequence),
			CODE_DICT => Some(Self::Mapping),
			CODE_STOP => Some(Self::Stop),
			_ => None,
		}
	}
}
