use std::path::PathBuf;

use pymarshal::marshal::{MarshalFile, Result};

use crate::cmd::util::{decode_options, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Override the container nesting limit.
	#[arg(long)]
	pub max_depth: Option<u32>,
}

/// Print stream-level statistics for a marshal file.
///
/// A decode error is reported in the output rather than failing the command.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, max_depth } = args;

	let file = MarshalFile::open(&path)?;
	let stats = file.scan_stats(&decode_options(max_depth));
	let error = stats.error.as_ref().map(ToString::to_string);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str().to_owned(),
			size: file.bytes().len(),
			value_count: stats.value_count,
			bytes_consumed: stats.bytes_consumed,
			trailing_bytes: stats.trailing_bytes,
			kinds: stats
				.kinds
				.iter()
				.map(|(kind, count)| KindCountJson { kind: *kind, count: *count })
				.collect(),
			error,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("size: {}", file.bytes().len());
	println!("value_count: {}", stats.value_count);
	println!("bytes_consumed: {}", stats.bytes_consumed);
	println!("trailing_bytes: {}", stats.trailing_bytes);
	println!("kinds:");
	for (kind, count) in &stats.kinds {
		println!("  {kind}: {count}");
	}
	if let Some(error) = error {
		println!("error: {error}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	size: usize,
	value_count: u32,
	bytes_consumed: u64,
	trailing_bytes: u64,
	kinds: Vec<KindCountJson>,
	error: Option<String>,
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: &'static str,
	count: u32,
}
