use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::marshal::compression::decode_bytes;
use crate::marshal::{Compression, DecodeError, DecodeOptions, Decoder, Result, Values};

/// Whole-file marshal stream, decompressed if needed.
pub struct MarshalFile {
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl MarshalFile {
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		Ok(Self { compression, bytes })
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn values(&self, opt: &DecodeOptions) -> Values<&[u8]> {
		Decoder::with_options(self.bytes.as_slice(), opt.clone()).into_values()
	}

	/// Walk top-level values, stopping at the first error.
	pub fn scan_stats(&self, opt: &DecodeOptions) -> ValueStats {
		let mut stats = ValueStats {
			value_count: 0,
			bytes_consumed: 0,
			trailing_bytes: 0,
			kinds: BTreeMap::new(),
			error: None,
		};

		let mut values = self.values(opt);
		while let Some(item) = values.next() {
			match item {
				Ok(value) => {
					stats.value_count += 1;
					stats.bytes_consumed = values.position();
					*stats.kinds.entry(value.kind()).or_insert(0) += 1;
				}
				Err(err) => stats.error = Some(err),
			}
		}

		stats.trailing_bytes = self.bytes.len() as u64 - stats.bytes_consumed;
		stats
	}
}

pub struct ValueStats {
	pub value_count: u32,
	/// Offset just past the last value that decoded cleanly.
	pub bytes_consumed: u64,
	pub trailing_bytes: u64,
	pub kinds: BTreeMap<&'static str, u32>,
	pub error: Option<DecodeError>,
}

#[cfg(test)]
mod tests;
