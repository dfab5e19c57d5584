use std::io::Read;

use tracing::debug;

use crate::marshal::{DecodeError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw marshal stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	decode_bytes_with_limit(raw, MAX_DECOMPRESSED_BYTES)
}

fn decode_bytes_with_limit(raw: Vec<u8>, limit: usize) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, limit)?;
		debug!(compressed = raw.len(), decompressed = out.len(), "decompressed zstd input");
		return Ok((Compression::Zstd, out));
	}
	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(DecodeError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes, decode_bytes_with_limit};
	use crate::marshal::DecodeError;

	#[test]
	fn raw_bytes_pass_through() {
		let (mode, bytes) = decode_bytes(b"i\x01\x00\x00\x00".to_vec()).expect("raw input accepted");
		assert_eq!(mode, Compression::None);
		assert_eq!(bytes, b"i\x01\x00\x00\x00");
	}

	#[test]
	fn zstd_frames_are_decompressed() {
		let payload = b"[\x01\x00\x00\x00N".to_vec();
		let compressed = zstd::encode_all(&payload[..], 3).expect("zstd encodes");
		let (mode, bytes) = decode_bytes(compressed).expect("zstd input accepted");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(bytes, payload);
	}

	#[test]
	fn decompression_is_bounded() {
		let compressed = zstd::encode_all(&vec![b'N'; 64 * 1024][..], 3).expect("zstd encodes");
		let err = decode_bytes_with_limit(compressed, 1024).expect_err("output exceeds limit");
		assert!(matches!(err, DecodeError::DecompressedTooLarge { limit: 1024 }));
	}
}
