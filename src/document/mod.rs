//! Decoding of upstream PUG View JSON into a [`Document`](crate::types::Document).
//!
//! Required structure (the record object, section labels, marked-up text)
//! is enforced; optional arrays that are absent or malformed are skipped.

mod decode;

pub use decode::{decode_record, DEFAULT_MAX_DEPTH};
