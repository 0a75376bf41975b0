//! Converting GeoJSON geometry fragments.
//!
//! [`geometry_from_json`] and [`wkt_from_json`] convert an already-parsed
//! geometry node; the `read_*` functions in this module do the same
//! directly from a byte stream, consuming exactly the geometry's sub-tree.

mod convert;
mod read;
mod walker;

pub use convert::*;
pub use read::*;

pub(crate) use walker::walk_coordinates;
