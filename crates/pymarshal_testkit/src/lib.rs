//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Resolve a per-test scratch file path under `<target>/pymarshal-fixtures`.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("pymarshal-fixtures");
	fs::create_dir_all(&dir).expect("scratch dir is creatable");
	dir.join(name)
}

/// Write raw bytes to a scratch fixture and return its path.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let path = scratch_path(name);
	fs::write(&path, bytes).expect("fixture is writable");
	path
}

/// Write zstd-compressed bytes to a scratch fixture and return its path.
pub fn write_zstd_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let compressed = zstd::encode_all(bytes, 3).expect("zstd encodes fixture");
	write_fixture(name, &compressed)
}

/// Parse a successful command's stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Builder for wire encodings used as decoder test input.
///
/// Containers are written as headers only; callers append the element encodings
/// themselves, which also makes it easy to produce malformed input on purpose.
#[derive(Debug, Default, Clone)]
pub struct MarshalWriter {
	bytes: Vec<u8>,
}

impl MarshalWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one `N` value.
	pub fn none(&mut self) -> &mut Self {
		self.tag(b'N')
	}

	/// Append an `i` integer.
	pub fn int(&mut self, value: i32) -> &mut Self {
		self.tag(b'i').raw(&value.to_le_bytes())
	}

	/// Append an integer under an explicit integer tag (`i` or `c`).
	pub fn int_tagged(&mut self, tag: u8, value: i32) -> &mut Self {
		self.tag(tag).raw(&value.to_le_bytes())
	}

	/// Append a `g` float.
	pub fn float(&mut self, value: f64) -> &mut Self {
		self.tag(b'g').raw(&value.to_le_bytes())
	}

	/// Append a float from its raw bit pattern.
	pub fn float_bits(&mut self, bits: u64) -> &mut Self {
		self.tag(b'g').raw(&bits.to_le_bytes())
	}

	/// Append an `s` text payload.
	pub fn text(&mut self, value: impl AsRef<[u8]>) -> &mut Self {
		self.text_tagged(b's', value)
	}

	/// Append a text payload under an explicit text tag (`s`, `u` or `t`).
	pub fn text_tagged(&mut self, tag: u8, value: impl AsRef<[u8]>) -> &mut Self {
		let value = value.as_ref();
		let len = i32::try_from(value.len()).expect("fixture text fits in i32");
		self.tag(tag).length_field(len).raw(value)
	}

	/// Append a `[` header declaring `count` elements.
	pub fn list(&mut self, count: i32) -> &mut Self {
		self.tag(b'[').length_field(count)
	}

	/// Append a `(` header declaring `count` elements.
	pub fn tuple(&mut self, count: i32) -> &mut Self {
		self.tag(b'(').length_field(count)
	}

	/// Append a `{` mapping opener.
	pub fn dict(&mut self) -> &mut Self {
		self.tag(b'{')
	}

	/// Append the `0` stop sentinel.
	pub fn stop(&mut self) -> &mut Self {
		self.tag(b'0')
	}

	/// Append a bare little-endian length field.
	pub fn length_field(&mut self, value: i32) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append one tag byte.
	pub fn tag(&mut self, tag: u8) -> &mut Self {
		self.bytes.push(tag);
		self
	}

	/// Append raw bytes verbatim.
	pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Borrow the encoded bytes written so far.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Take the encoded bytes.
	pub fn finish(&mut self) -> Vec<u8> {
		std::mem::take(&mut self.bytes)
	}
}
