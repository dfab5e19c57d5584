use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::{Hash, Hasher};

/// One decoded value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Unit,
	Int32(i32),
	Float64(f64),
	/// Raw payload bytes; charset interpretation is left to the caller.
	Text(Vec<u8>),
	/// Tuples and lists both decode to this shape.
	Sequence(Vec<Value>),
	Mapping(Mapping),
}

impl Value {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Unit => "unit",
			Self::Int32(_) => "int",
			Self::Float64(_) => "float",
			Self::Text(_) => "text",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
		}
	}

	/// True for [`Value::Unit`].
	pub fn is_unit(&self) -> bool {
		matches!(self, Self::Unit)
	}

	/// Integer payload, if any.
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int32(value) => Some(*value),
			_ => None,
		}
	}

	/// Float payload, if any.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float64(value) => Some(*value),
			_ => None,
		}
	}

	/// Raw text bytes, if any.
	pub fn as_text(&self) -> Option<&[u8]> {
		match self {
			Self::Text(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Text payload as UTF-8, if it is text and valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		self.as_text().and_then(|bytes| std::str::from_utf8(bytes).ok())
	}

	/// Sequence items, if any.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Mapping payload, if any.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Mapping(mapping) => Some(mapping),
			_ => None,
		}
	}

	/// True when the value can serve as a mapping key (contains no mapping).
	pub fn is_hashable(&self) -> bool {
		match self {
			Self::Mapping(_) => false,
			Self::Sequence(items) => items.iter().all(Value::is_hashable),
			_ => true,
		}
	}

	/// Convert into a mapping key, or `None` if the value contains a mapping.
	pub fn into_key(self) -> Option<Key> {
		match self {
			Self::Unit => Some(Key::Unit),
			Self::Int32(value) => Some(Key::Int32(value)),
			Self::Float64(value) => Some(Key::Float64(value)),
			Self::Text(bytes) => Some(Key::Text(bytes)),
			Self::Sequence(items) => items.into_iter().map(Value::into_key).collect::<Option<Vec<_>>>().map(Key::Sequence),
			Self::Mapping(_) => None,
		}
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.as_bytes().to_vec())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Sequence(items)
	}
}

impl From<Mapping> for Value {
	fn from(mapping: Mapping) -> Self {
		Self::Mapping(mapping)
	}
}

impl From<Key> for Value {
	fn from(key: Key) -> Self {
		match key {
			Key::Unit => Self::Unit,
			Key::Int32(value) => Self::Int32(value),
			Key::Float64(value) => Self::Float64(value),
			Key::Text(bytes) => Self::Text(bytes),
			Key::Sequence(items) => Self::Sequence(items.into_iter().map(Value::from).collect()),
		}
	}
}

/// Hashable subset of [`Value`] usable as a mapping key.
///
/// Floats compare and hash by bit pattern, so `NaN` keys are stable and
/// `0.0` and `-0.0` are distinct keys.
#[derive(Debug, Clone)]
pub enum Key {
	Unit,
	Int32(i32),
	Float64(f64),
	Text(Vec<u8>),
	Sequence(Vec<Key>),
}

impl Key {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Unit => "unit",
			Self::Int32(_) => "int",
			Self::Float64(_) => "float",
			Self::Text(_) => "text",
			Self::Sequence(_) => "sequence",
		}
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Unit, Self::Unit) => true,
			(Self::Int32(left), Self::Int32(right)) => left == right,
			(Self::Float64(left), Self::Float64(right)) => left.to_bits() == right.to_bits(),
			(Self::Text(left), Self::Text(right)) => left == right,
			(Self::Sequence(left), Self::Sequence(right)) => left == right,
			_ => false,
		}
	}
}

impl Eq for Key {}

impl Hash for Key {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::mem::discriminant(self).hash(state);
		match self {
			Self::Unit => {}
			Self::Int32(value) => value.hash(state),
			Self::Float64(value) => value.to_bits().hash(state),
			Self::Text(bytes) => bytes.hash(state),
			Self::Sequence(items) => items.hash(state),
		}
	}
}

impl From<i32> for Key {
	fn from(value: i32) -> Self {
		Self::Int32(value)
	}
}

impl From<&str> for Key {
	fn from(value: &str) -> Self {
		Self::Text(value.as_bytes().to_vec())
	}
}

/// Unordered key/value association; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
	entries: HashMap<Key, Value>,
}

impl Mapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, key: &Key) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Insert a pair, returning the value it replaced.
	pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
		self.entries.insert(key, value)
	}

	/// Iterate pairs in unspecified order.
	pub fn iter(&self) -> hash_map::Iter<'_, Key, Value> {
		self.entries.iter()
	}

	pub fn into_inner(self) -> HashMap<Key, Value> {
		self.entries
	}
}

impl FromIterator<(Key, Value)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Mapping {
	type Item = (&'a Key, &'a Value);
	type IntoIter = hash_map::Iter<'a, Key, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
