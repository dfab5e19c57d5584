mod bytes;
mod compression;
mod decode;
mod error;
mod file;
mod tag;
mod value;

/// Exact-count stream reader used by the decoder.
pub use bytes::ByteReader;
/// Compression detection result.
pub use compression::Compression;
/// Decoding entry points, options, and the streaming decoder.
pub use decode::{DecodeOptions, Decoder, Values, decode, decode_slice, decode_with};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// File abstraction and value statistics.
pub use file::{MarshalFile, ValueStats};
/// Wire tag codes and their decoder families.
pub use tag::{
	CODE_DICT, CODE_FLOAT, CODE_INT, CODE_INT2, CODE_INTERNED, CODE_LIST, CODE_NONE, CODE_STOP, CODE_STRING, CODE_TUPLE, CODE_UNICODE, Tag,
};
/// Decoded value types.
pub use value::{Key, Mapping, Value};
