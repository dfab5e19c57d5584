use std::path::PathBuf;

use pymarshal::marshal::{DecodeError, MarshalFile, Result, Value};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{decode_options, emit_json, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Zero-based index of the top-level value to decode.
	#[arg(long, default_value_t = 0, conflicts_with = "all")]
	pub index: usize,
	/// Decode every top-level value in the file.
	#[arg(long)]
	pub all: bool,
	#[arg(long)]
	pub json: bool,
	/// Override the container nesting limit.
	#[arg(long)]
	pub max_depth: Option<u32>,
}

/// Decode and print one or all top-level values.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		index,
		all,
		json,
		max_depth,
	} = args;

	let file = MarshalFile::open(&path)?;
	let opt = decode_options(max_depth);

	let mut decoded = Vec::new();
	let mut count = 0;
	let mut values = file.values(&opt);
	loop {
		let offset = values.position();
		let Some(item) = values.next() else {
			break;
		};
		let value = item?;
		if all || count == index {
			decoded.push(DecodedValue { index: count, offset, value });
		}
		count += 1;
		if !all && count > index {
			break;
		}
	}

	if !all && decoded.is_empty() {
		return Err(DecodeError::IndexOutOfRange { index, count });
	}

	if json {
		let payload = DecodeJson {
			path: path.display().to_string(),
			compression: file.compression.as_str().to_owned(),
			values: decoded
				.iter()
				.map(|item| ValueJson {
					index: item.index,
					offset: item.offset,
					kind: item.value.kind(),
					value: value_json(&item.value),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	for item in &decoded {
		println!("value[{}] offset={} kind={}:", item.index, item.offset, item.value.kind());
		print!("{}", render_value(&item.value, PrintOptions::default()));
	}

	Ok(())
}

struct DecodedValue {
	index: usize,
	offset: u64,
	value: Value,
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	compression: String,
	values: Vec<ValueJson>,
}

#[derive(serde::Serialize)]
struct ValueJson {
	index: usize,
	offset: u64,
	kind: &'static str,
	value: serde_json::Value,
}
