//! Conversion entry points for geometry nodes in a parsed JSON tree.
//!
//! Both output modes share the same dispatch: resolve the `"type"` label,
//! apply the empty-coordinates rule, then run the kind-specific build. The
//! two modes disagree on purpose about how they report the special cases:
//! text mode still names the kind of an empty geometry (`"POINT EMPTY"`),
//! structured mode reports nothing at all.

use super::walker::walk_coordinates;
use crate::geo::{
	Coordinates, FeatureKind, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry,
};
use crate::wkt::wkt_fragment;
use anyhow::{Result, bail};
use geoconv_core::json::{JsonObject, JsonValue, parse_json_str};

/// Converts a geometry node into a geometry value.
///
/// Returns `Ok(None)` for an unknown or missing `"type"`, for missing or
/// element-less `"coordinates"`, and for a coordinate tree that fails
/// structurally (logged at warn level). Returns `Err` only when the node
/// itself is not a JSON object, which is a contract violation of the
/// caller, not a property of the data.
pub fn geometry_from_json(geometry: &JsonValue) -> Result<Option<Geometry>> {
	let object = geometry.as_object()?;
	let Some(kind) = resolve_kind(object) else {
		return Ok(None);
	};
	let Some(coordinates) = coordinates_field(object) else {
		return Ok(None);
	};
	match build_geometry(kind, coordinates) {
		Ok(built) => Ok(Some(built)),
		Err(error) => {
			log::warn!("discarding malformed {kind} geometry: {error:#}");
			Ok(None)
		}
	}
}

/// Converts a geometry node into a WKT string.
///
/// Returns `""` for an unknown or missing `"type"` and for a structurally
/// failing coordinate tree (logged at warn level), and `"<KIND> EMPTY"`
/// for a known kind without coordinates. Returns `Err` only when the node
/// is not a JSON object.
pub fn wkt_from_json(geometry: &JsonValue) -> Result<String> {
	let object = geometry.as_object()?;
	let Some(kind) = resolve_kind(object) else {
		return Ok(String::new());
	};
	let Some(coordinates) = coordinates_field(object) else {
		return Ok(format!("{} EMPTY", kind.wkt_tag()));
	};
	match wkt_fragment(kind, coordinates) {
		Ok(fragment) => Ok(format!("{} {fragment}", kind.wkt_tag())),
		Err(error) => {
			log::warn!("discarding malformed {kind} geometry: {error:#}");
			Ok(String::new())
		}
	}
}

/// Parses a JSON string whose root is a geometry object and converts it.
pub fn geometry_from_str(json: &str) -> Result<Option<Geometry>> {
	geometry_from_json(&parse_json_str(json)?)
}

/// Parses a JSON string whose root is a geometry object and renders WKT.
pub fn wkt_from_str(json: &str) -> Result<String> {
	wkt_from_json(&parse_json_str(json)?)
}

fn resolve_kind(object: &JsonObject) -> Option<FeatureKind> {
	object
		.get("type")
		.and_then(|value| value.as_str().ok())
		.and_then(FeatureKind::parse)
}

/// Returns the `"coordinates"` value if it carries any child elements.
/// Scalars, `null`, and empty containers all count as "no coordinates".
fn coordinates_field(object: &JsonObject) -> Option<&JsonValue> {
	match object.get("coordinates") {
		Some(value @ JsonValue::Array(entries)) if !entries.is_empty() => Some(value),
		Some(value @ JsonValue::Object(entries)) if !entries.is_empty() => Some(value),
		_ => None,
	}
}

/// The structured builder's intermediate: coordinate pairs at the leaves,
/// ordered untransformed lists at every level above them.
enum CoordsTree {
	Pair(Coordinates),
	List(Vec<CoordsTree>),
}

impl CoordsTree {
	fn into_pair(self) -> Result<Coordinates> {
		match self {
			CoordsTree::Pair(pair) => Ok(pair),
			CoordsTree::List(_) => bail!("expected a coordinate pair, found a list"),
		}
	}

	fn into_list(self) -> Result<Vec<CoordsTree>> {
		match self {
			CoordsTree::List(items) => Ok(items),
			CoordsTree::Pair(_) => bail!("expected a coordinate list, found a pair"),
		}
	}

	fn into_pairs(self) -> Result<Vec<Coordinates>> {
		self.into_list()?.into_iter().map(Self::into_pair).collect()
	}

	fn into_line_strings(self) -> Result<Vec<LineStringGeometry>> {
		self
			.into_list()?
			.into_iter()
			.map(|item| item.into_pairs().map(LineStringGeometry))
			.collect()
	}

	fn into_polygons(self) -> Result<Vec<PolygonGeometry>> {
		self
			.into_list()?
			.into_iter()
			.map(|item| item.into_line_strings().map(PolygonGeometry))
			.collect()
	}
}

fn build_geometry(kind: FeatureKind, coordinates: &JsonValue) -> Result<Geometry> {
	let tree = walk_coordinates(
		coordinates,
		kind.coordinate_depth(),
		&CoordsTree::Pair,
		&CoordsTree::List,
	)?;

	// The walker already descended exactly `coordinate_depth` levels, so the
	// unwraps below cannot fail on its output.
	Ok(match kind {
		FeatureKind::Point => Geometry::Point(PointGeometry(tree.into_pair()?)),
		FeatureKind::LineString => Geometry::LineString(LineStringGeometry(tree.into_pairs()?)),
		FeatureKind::Polygon => Geometry::Polygon(PolygonGeometry(tree.into_line_strings()?)),
		FeatureKind::MultiPoint => {
			Geometry::MultiPoint(MultiPointGeometry(tree.into_pairs()?.into_iter().map(PointGeometry).collect()))
		}
		FeatureKind::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(tree.into_line_strings()?)),
		FeatureKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(tree.into_polygons()?)),
	})
}
