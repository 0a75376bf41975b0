//! Stream-level readers for geometry objects embedded in larger documents.
//!
//! These adapters read exactly one sub-tree from a [`ByteStream`] and leave
//! the cursor right after it, so an enclosing parser can keep going with
//! whatever follows the geometry.

use super::{geometry_from_json, wkt_from_json};
use crate::geo::Geometry;
use anyhow::Result;
use geoconv_core::ByteStream;
use geoconv_core::json::{JsonValue, each_object_entry, parse_json_stream};

/// Reads the single JSON value at the cursor as a geometry object and
/// builds a geometry value from it.
pub fn read_geometry(stream: &mut ByteStream) -> Result<Option<Geometry>> {
	let node = parse_json_stream(stream)?;
	geometry_from_json(&node)
}

/// Reads the single JSON value at the cursor as a geometry object and
/// renders it as WKT.
pub fn read_wkt(stream: &mut ByteStream) -> Result<String> {
	let node = parse_json_stream(stream)?;
	wkt_from_json(&node)
}

/// Reads one enclosing JSON object, converts its `"geometry"` member, and
/// skips every other member. The cursor ends right after the enclosing
/// object.
pub fn read_feature_geometry(stream: &mut ByteStream) -> Result<Option<Geometry>> {
	match read_geometry_member(stream)? {
		Some(node) => geometry_from_json(&node),
		None => Ok(None),
	}
}

/// Like [`read_feature_geometry`], but renders WKT. An object without a
/// `"geometry"` member yields the empty string.
pub fn read_feature_wkt(stream: &mut ByteStream) -> Result<String> {
	match read_geometry_member(stream)? {
		Some(node) => wkt_from_json(&node),
		None => Ok(String::new()),
	}
}

fn read_geometry_member(stream: &mut ByteStream) -> Result<Option<JsonValue>> {
	let mut geometry = None;
	each_object_entry(stream, |key, stream2| {
		// Every member is read as a complete JSON value, which is what moves
		// the cursor past members we do not care about.
		let value = parse_json_stream(stream2)?;
		if key == "geometry" {
			geometry = Some(value);
		}
		Ok(())
	})?;
	Ok(geometry)
}
