//! Public library API for decoding Python marshal streams.

/// Tagged value decoding, value model, and file loading helpers.
pub mod marshal;
