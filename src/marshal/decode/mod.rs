use std::io::Read;

use tracing::{debug, trace};

use crate::marshal::bytes::ByteReader;
use crate::marshal::tag::{CODE_STOP, Tag};
use crate::marshal::{DecodeError, Mapping, Result, Value};

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Upper bound on capacity reserved from an untrusted count or length field.
	pub max_prealloc: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			max_prealloc: 4096,
		}
	}
}

/// Decode one top-level value from `reader` using default options.
///
/// Pass `&mut reader` to keep using the stream afterwards; it is left
/// positioned immediately after the decoded value.
pub fn decode<R: Read>(reader: R) -> Result<Value> {
	decode_with(reader, &DecodeOptions::default())
}

/// Decode one top-level value from `reader`.
pub fn decode_with<R: Read>(reader: R, opt: &DecodeOptions) -> Result<Value> {
	Decoder::with_options(reader, opt.clone()).decode_value()
}

/// Decode one value from the front of `bytes`, returning it with the number of bytes consumed.
pub fn decode_slice(bytes: &[u8]) -> Result<(Value, usize)> {
	let mut decoder = Decoder::new(bytes);
	let value = decoder.decode_value()?;
	Ok((value, decoder.position() as usize))
}

/// Recursive-descent decoder over one byte stream.
///
/// Holds no state between top-level values apart from the stream offset.
pub struct Decoder<R> {
	reader: ByteReader<R>,
	opt: DecodeOptions,
}

impl<R: Read> Decoder<R> {
	/// Create a decoder with default options.
	pub fn new(reader: R) -> Self {
		Self::with_options(reader, DecodeOptions::default())
	}

	/// Create a decoder with explicit options.
	pub fn with_options(reader: R, opt: DecodeOptions) -> Self {
		Self {
			reader: ByteReader::new(reader),
			opt,
		}
	}

	/// Bytes consumed from the stream so far.
	pub fn position(&self) -> u64 {
		self.reader.pos()
	}

	/// Unwrap the underlying stream.
	pub fn into_inner(self) -> R {
		self.reader.into_inner()
	}

	/// Decode one top-level value.
	///
	/// Fails with [`DecodeError::EndOfInput`] if the stream is exhausted before the tag byte.
	pub fn decode_value(&mut self) -> Result<Value> {
		let at = self.reader.pos();
		let Some(code) = self.reader.read_byte()? else {
			return Err(DecodeError::EndOfInput { at });
		};
		self.dispatch(code, at, 0)
			.inspect_err(|error| debug!(%error, at, "top-level decode failed"))
	}

	/// Decode one top-level value, or `None` on clean end of input.
	pub fn decode_next(&mut self) -> Result<Option<Value>> {
		match self.decode_value() {
			Ok(value) => Ok(Some(value)),
			Err(DecodeError::EndOfInput { .. }) => Ok(None),
			Err(err) => Err(err),
		}
	}

	/// Iterate back-to-back top-level values until end of input or the first error.
	pub fn into_values(self) -> Values<R> {
		Values { decoder: self, done: false }
	}

	fn dispatch(&mut self, code: u8, at: u64, depth: u32) -> Result<Value> {
		match Tag::from_byte(code) {
			Some(Tag::None) => Ok(Value::Unit),
			Some(Tag::Int) => Ok(Value::Int32(self.reader.read_i32_le()?)),
			Some(Tag::Float) => Ok(Value::Float64(self.reader.read_f64_le()?)),
			Some(Tag::Text) => {
				let len = self.read_length()?;
				Ok(Value::Text(self.reader.read_vec(len, self.opt.max_prealloc)?))
			}
			Some(Tag::Sequence) => self.read_sequence(code, depth),
			Some(Tag::Mapping) => self.read_mapping(depth),
			Some(Tag::Stop) | None => Err(DecodeError::UnknownCode { at, code }),
		}
	}

	/// Read a nested tag; end of input here is always truncation.
	fn read_tag(&mut self) -> Result<(u8, u64)> {
		let at = self.reader.pos();
		match self.reader.read_byte()? {
			Some(code) => Ok((code, at)),
			None => Err(DecodeError::Truncated { at, need: 1, got: 0 }),
		}
	}

	fn read_length(&mut self) -> Result<usize> {
		let at = self.reader.pos();
		let len = self.reader.read_i32_le()?;
		usize::try_from(len).map_err(|_| DecodeError::InvalidLength { at, len })
	}

	fn enter(&self, depth: u32) -> Result<u32> {
		if depth >= self.opt.max_depth {
			return Err(DecodeError::DepthExceeded { max_depth: self.opt.max_depth });
		}
		Ok(depth + 1)
	}

	fn read_sequence(&mut self, code: u8, depth: u32) -> Result<Value> {
		let inner = self.enter(depth)?;
		let count = self.read_length()?;
		trace!(tag = %char::from(code), count, depth, "sequence");

		let mut items = Vec::with_capacity(count.min(self.opt.max_prealloc));
		for _ in 0..count {
			let (code, at) = self.read_tag()?;
			items.push(self.dispatch(code, at, inner)?);
		}
		Ok(Value::Sequence(items))
	}

	fn read_mapping(&mut self, depth: u32) -> Result<Value> {
		let inner = self.enter(depth)?;
		trace!(depth, "mapping");

		let mut mapping = Mapping::new();
		loop {
			let (code, at) = self.read_tag()?;
			if code == CODE_STOP {
				break;
			}
			let key = self.dispatch(code, at, inner)?.into_key().ok_or(DecodeError::UnhashableKey { at })?;

			let (code, at) = self.read_tag()?;
			let value = self.dispatch(code, at, inner)?;
			mapping.insert(key, value);
		}
		Ok(Value::Mapping(mapping))
	}
}

/// Iterator over back-to-back top-level values.
///
/// Yields at most one error, after which it is exhausted.
pub struct Values<R> {
	decoder: Decoder<R>,
	done: bool,
}

impl<R: Read> Values<R> {
	/// Offset where the next value starts.
	pub fn position(&self) -> u64 {
		self.decoder.position()
	}
}

impl<R: Read> Iterator for Values<R> {
	type Item = Result<Value>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		match self.decoder.decode_next() {
			Ok(Some(value)) => Some(Ok(value)),
			Ok(None) => {
				self.done = true;
				None
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}
