use std::fmt::Write;

use pymarshal::marshal::{Key, Value};

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single sequence or mapping.
	pub max_items: usize,
	/// Maximum number of characters printed for text payloads.
	pub max_text_len: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_items: 32,
			max_text_len: 200,
			max_print_depth: 8,
		}
	}
}

/// Render one decoded value tree as indented lines.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Sequence(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Mapping(mapping) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{... {} entries}}", mapping.len());
				return;
			}
			let mut entries: Vec<(String, &Value)> = mapping.iter().map(|(key, value)| (key_label(key, options), value)).collect();
			entries.sort_by(|left, right| left.0.cmp(&right.0));

			let _ = writeln!(out, "{pad}{{");
			for (key, item) in entries.iter().take(options.max_items) {
				let _ = write!(out, "{pad}  {key} = ");
				if matches!(item, Value::Sequence(_) | Value::Mapping(_)) {
					let _ = writeln!(out);
					write_value(out, item, indent + 4, depth + 1, options);
				} else {
					write_value(out, item, 0, depth + 1, options);
				}
			}
			if entries.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more", entries.len() - options.max_items);
			}
			let _ = writeln!(out, "{pad}}}");
		}
		scalar => {
			let _ = writeln!(out, "{pad}{}", scalar_label(scalar, options));
		}
	}
}

fn scalar_label(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Unit => "None".to_owned(),
		Value::Int32(v) => v.to_string(),
		Value::Float64(v) => format!("{v:?}"),
		Value::Text(bytes) => text_label(bytes, options.max_text_len),
		Value::Sequence(items) => format!("[{} items]", items.len()),
		Value::Mapping(mapping) => format!("{{{} entries}}", mapping.len()),
	}
}

/// Single-line rendering of a mapping key.
fn key_label(key: &Key, options: PrintOptions) -> String {
	match key {
		Key::Sequence(items) => {
			let inner: Vec<String> = items.iter().map(|item| key_label(item, options)).collect();
			format!("({})", inner.join(", "))
		}
		_ => scalar_label(&Value::from(key.clone()), options),
	}
}

/// Quote UTF-8 text; fall back to an escaped byte literal.
fn text_label(bytes: &[u8], max_len: usize) -> String {
	match std::str::from_utf8(bytes) {
		Ok(text) => format!("\"{}\"", truncate(&text.escape_debug().to_string(), max_len)),
		Err(_) => format!("b\"{}\"", truncate(&bytes.escape_ascii().to_string(), max_len)),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
