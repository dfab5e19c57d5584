use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while reading and decoding marshal data.
///
/// Offsets (`at`) count bytes from where the decoder started reading its stream.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Stream ended before the tag byte of a top-level value.
	#[error("end of input at offset {at}")]
	EndOfInput {
		/// Offset where a tag byte was expected.
		at: u64,
	},
	/// Stream ended inside a value.
	#[error("truncated input at offset {at}, need {need} bytes, got {got}")]
	Truncated {
		/// Offset where the short read started.
		at: u64,
		/// Bytes the field declared.
		need: u64,
		/// Bytes actually available.
		got: u64,
	},
	/// A length or count field was negative.
	#[error("invalid length {len} at offset {at}")]
	InvalidLength {
		/// Offset of the length field.
		at: u64,
		/// Parsed signed length.
		len: i32,
	},
	/// Tag byte is not part of the supported code set.
	#[error("unknown code 0x{code:02x} at offset {at}")]
	UnknownCode {
		/// Offset of the tag byte.
		at: u64,
		/// Offending tag byte.
		code: u8,
	},
	/// Mapping key contains a mapping and cannot be hashed.
	#[error("unhashable mapping key at offset {at}")]
	UnhashableKey {
		/// Offset of the key's tag byte.
		at: u64,
	},
	/// Underlying stream failure unrelated to end of input.
	#[error("read failure: {0}")]
	ReadFailure(#[from] std::io::Error),
	/// Container nesting exceeded the configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Requested top-level value index is past the end of the stream.
	#[error("value index {index} out of range ({count} values)")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Values actually present.
		count: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl DecodeError {
	/// True when the stream was cleanly exhausted between top-level values.
	pub fn is_end_of_input(&self) -> bool {
		matches!(self, Self::EndOfInput { .. })
	}
}
