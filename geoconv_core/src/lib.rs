//! Shared parsing infrastructure for the geoconv crates: a byte-level
//! stream reader and a small JSON value tree.

pub mod json;
pub mod stream;

pub use stream::ByteStream;
