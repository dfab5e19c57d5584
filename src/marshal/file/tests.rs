use pymarshal_testkit::MarshalWriter;

use crate::marshal::{Compression, DecodeError, DecodeOptions, MarshalFile, Value};

#[test]
fn scans_back_to_back_values() {
	let bytes = MarshalWriter::new().int(1).dict().int(1).none().stop().list(0).int(2).finish();
	let file = MarshalFile::from_bytes(bytes.clone()).expect("raw input loads");
	let stats = file.scan_stats(&DecodeOptions::default());

	assert_eq!(file.compression, Compression::None);
	assert_eq!(stats.value_count, 4);
	assert_eq!(stats.bytes_consumed, bytes.len() as u64);
	assert_eq!(stats.trailing_bytes, 0);
	assert_eq!(stats.kinds.get("int"), Some(&2));
	assert_eq!(stats.kinds.get("mapping"), Some(&1));
	assert_eq!(stats.kinds.get("sequence"), Some(&1));
	assert!(stats.error.is_none());
}

#[test]
fn scan_reports_first_error_and_trailing_bytes() {
	let bytes = MarshalWriter::new().text("ok").tag(0xEE).int(9).finish();
	let file = MarshalFile::from_bytes(bytes).expect("raw input loads");
	let stats = file.scan_stats(&DecodeOptions::default());

	assert_eq!(stats.value_count, 1);
	assert_eq!(stats.bytes_consumed, 7);
	assert_eq!(stats.trailing_bytes, 6);
	assert!(matches!(stats.error, Some(DecodeError::UnknownCode { at: 7, code: 0xEE })));
}

#[test]
fn zstd_input_decodes_transparently() {
	let bytes = MarshalWriter::new().tuple(2).float(0.5).text_tagged(b'u', "x").finish();
	let compressed = zstd::encode_all(&bytes[..], 3).expect("zstd encodes");
	let file = MarshalFile::from_bytes(compressed).expect("zstd input loads");

	assert_eq!(file.compression, Compression::Zstd);
	assert_eq!(file.bytes(), &bytes[..]);
	let values: Vec<Value> = file.values(&DecodeOptions::default()).collect::<Result<_, _>>().expect("values decode");
	assert_eq!(values, vec![Value::Sequence(vec![Value::from(0.5), Value::from("x")])]);
}

#[test]
fn empty_file_has_no_values() {
	let file = MarshalFile::from_bytes(Vec::new()).expect("empty input loads");
	let stats = file.scan_stats(&DecodeOptions::default());
	assert_eq!(stats.value_count, 0);
	assert_eq!(stats.trailing_bytes, 0);
	assert!(stats.error.is_none());
}
