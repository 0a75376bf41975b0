//! WKT text building.
//!
//! The fragment builder walks the raw coordinate tree through the shared
//! walker; [`Geometry::to_wkt`] renders an already-built value through the
//! same formatting helpers, so both paths produce identical text.

use crate::geo::{Coordinates, FeatureKind, Geometry, LineStringGeometry, PointGeometry, PolygonGeometry};
use crate::geojson::walk_coordinates;
use anyhow::Result;
use geoconv_core::json::JsonValue;

/// Formats one coordinate value: the shortest decimal form that parses
/// back to the same `f64`. Locale invariant, no grouping, no exponent
/// notation for coordinate-sized magnitudes; whole numbers drop the
/// decimal point entirely (`30`, not `30.0`).
#[must_use]
pub fn format_number(value: f64) -> String {
	value.to_string()
}

fn pair_text(pair: &Coordinates) -> String {
	format!("{} {}", format_number(pair.x()), format_number(pair.y()))
}

fn wrap(parts: Vec<String>) -> String {
	format!("({})", parts.join(", "))
}

fn point_text(point: &PointGeometry) -> String {
	format!("({})", pair_text(&point.0))
}

fn line_text(line: &LineStringGeometry) -> String {
	wrap(line.0.iter().map(pair_text).collect())
}

fn polygon_text(polygon: &PolygonGeometry) -> String {
	wrap(polygon.0.iter().map(line_text).collect())
}

/// Builds the coordinate fragment of a WKT string (everything after the
/// keyword) from a raw coordinate tree.
///
/// Points are parenthesized on their own at the leaf, which is also what
/// gives MultiPoint its doubly-wrapped `((x y), ...)` list elements; every
/// other kind joins bare `x y` pairs and wraps once per nesting level.
pub(crate) fn wkt_fragment(kind: FeatureKind, coordinates: &JsonValue) -> Result<String> {
	let depth = kind.coordinate_depth();
	match kind {
		FeatureKind::Point | FeatureKind::MultiPoint => {
			walk_coordinates(coordinates, depth, &|pair| format!("({})", pair_text(&pair)), &wrap)
		}
		_ => walk_coordinates(coordinates, depth, &|pair| pair_text(&pair), &wrap),
	}
}

impl Geometry {
	/// Renders this value as a WKT string. Containers without elements
	/// render as `"<KIND> EMPTY"`, mirroring the text-mode dispatch.
	#[must_use]
	pub fn to_wkt(&self) -> String {
		let tag = self.kind().wkt_tag();
		let fragment = match self {
			Geometry::Point(point) => point_text(point),
			Geometry::LineString(line) if !line.0.is_empty() => line_text(line),
			Geometry::Polygon(polygon) if !polygon.0.is_empty() => polygon_text(polygon),
			Geometry::MultiPoint(multi) if !multi.0.is_empty() => wrap(multi.0.iter().map(point_text).collect()),
			Geometry::MultiLineString(multi) if !multi.0.is_empty() => wrap(multi.0.iter().map(line_text).collect()),
			Geometry::MultiPolygon(multi) if !multi.0.is_empty() => wrap(multi.0.iter().map(polygon_text).collect()),
			_ => return format!("{tag} EMPTY"),
		};
		format!("{tag} {fragment}")
	}
}
