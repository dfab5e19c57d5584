use pymarshal::marshal::{DecodeOptions, Key, Value};
use serde_json::json;

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Build decode options from CLI overrides.
pub(crate) fn decode_options(max_depth: Option<u32>) -> DecodeOptions {
	let mut opt = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		opt.max_depth = max_depth;
	}
	opt
}

/// Render a decoded value as JSON.
///
/// Mappings become `{"key", "value"}` entry arrays sorted by the rendered key, since keys
/// need not be strings and pair order carries no meaning.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Unit => serde_json::Value::Null,
		Value::Int32(v) => json!(v),
		Value::Float64(v) => float_json(*v),
		Value::Text(bytes) => text_json(bytes),
		Value::Sequence(items) => serde_json::Value::Array(items.iter().map(value_json).collect()),
		Value::Mapping(mapping) => {
			let mut entries: Vec<(String, serde_json::Value, serde_json::Value)> = mapping
				.iter()
				.map(|(key, value)| {
					let key = key_json(key);
					(key.to_string(), key, value_json(value))
				})
				.collect();
			entries.sort_by(|left, right| left.0.cmp(&right.0));
			serde_json::Value::Array(entries.into_iter().map(|(_, key, value)| json!({ "key": key, "value": value })).collect())
		}
	}
}

fn key_json(key: &Key) -> serde_json::Value {
	value_json(&Value::from(key.clone()))
}

fn float_json(value: f64) -> serde_json::Value {
	serde_json::Number::from_f64(value)
		.map(serde_json::Value::Number)
		.unwrap_or_else(|| serde_json::Value::String(value.to_string()))
}

fn text_json(bytes: &[u8]) -> serde_json::Value {
	match std::str::from_utf8(bytes) {
		Ok(text) => serde_json::Value::String(text.to_owned()),
		Err(_) => json!({ "bytes": bytes }),
	}
}
