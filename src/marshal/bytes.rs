use std::io::{ErrorKind, Read};

use crate::marshal::{DecodeError, Result};

/// Exact-count reader over a byte stream with running offset tracking.
///
/// Every multi-byte read either fills its buffer completely or fails with
/// [`DecodeError::Truncated`]; short reads are never padded.
pub struct ByteReader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> ByteReader<R> {
	/// Wrap a stream at offset 0.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return bytes consumed so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the underlying stream.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Read one byte, or `None` if the stream is exhausted.
	pub fn read_byte(&mut self) -> Result<Option<u8>> {
		let mut buf = [0_u8; 1];
		loop {
			match self.inner.read(&mut buf) {
				Ok(0) => return Ok(None),
				Ok(_) => {
					self.pos += 1;
					return Ok(Some(buf[0]));
				}
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(DecodeError::ReadFailure(err)),
			}
		}
	}

	/// Read exactly `N` bytes.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let at = self.pos;
		let mut buf = [0_u8; N];
		let got = self.fill(&mut buf)?;
		if got < N {
			return Err(DecodeError::Truncated {
				at,
				need: N as u64,
				got: got as u64,
			});
		}
		Ok(buf)
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 binary64, preserving the exact bit pattern.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_bits(u64::from_le_bytes(self.read_array()?)))
	}

	/// Read exactly `len` bytes into a new buffer.
	///
	/// At most `prealloc` bytes are reserved before data arrives; the rest grows as it is read.
	pub fn read_vec(&mut self, len: usize, prealloc: usize) -> Result<Vec<u8>> {
		let at = self.pos;
		let mut out = Vec::with_capacity(len.min(prealloc));
		let got = (&mut self.inner).take(len as u64).read_to_end(&mut out)?;
		self.pos += got as u64;
		if got < len {
			return Err(DecodeError::Truncated {
				at,
				need: len as u64,
				got: got as u64,
			});
		}
		Ok(out)
	}

	fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.inner.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(read) => filled += read,
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(DecodeError::ReadFailure(err)),
			}
		}
		self.pos += filled as u64;
		Ok(filled)
	}
}
