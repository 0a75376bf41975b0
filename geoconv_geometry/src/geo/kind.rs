use std::fmt::Display;

/// The closed set of geometry types a GeoJSON fragment can carry.
///
/// Every consumer matches this enum exhaustively; a label that resolves to
/// none of the six variants is represented as `None` by [`FeatureKind::parse`]
/// rather than by a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
}

impl FeatureKind {
	/// Resolves a raw `"type"` label. Matching is exact and case-sensitive;
	/// anything else (including the empty string) is `None`, which is a
	/// normal outcome, not an error.
	#[must_use]
	pub fn parse(label: &str) -> Option<FeatureKind> {
		use FeatureKind::*;
		Some(match label {
			"Point" => Point,
			"LineString" => LineString,
			"Polygon" => Polygon,
			"MultiPoint" => MultiPoint,
			"MultiLineString" => MultiLineString,
			"MultiPolygon" => MultiPolygon,
			_ => return None,
		})
	}

	/// The GeoJSON literal name of this kind.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		use FeatureKind::*;
		match self {
			Point => "Point",
			LineString => "LineString",
			Polygon => "Polygon",
			MultiPoint => "MultiPoint",
			MultiLineString => "MultiLineString",
			MultiPolygon => "MultiPolygon",
		}
	}

	/// The upper-case WKT keyword of this kind.
	#[must_use]
	pub fn wkt_tag(self) -> &'static str {
		use FeatureKind::*;
		match self {
			Point => "POINT",
			LineString => "LINESTRING",
			Polygon => "POLYGON",
			MultiPoint => "MULTIPOINT",
			MultiLineString => "MULTILINESTRING",
			MultiPolygon => "MULTIPOLYGON",
		}
	}

	/// Levels of array nesting between the `"coordinates"` value and a raw
	/// coordinate pair. Fixed per kind; never inferred from the data, which
	/// is also what keeps `LineString` and `MultiPoint` apart from their
	/// identical array shape.
	#[must_use]
	pub fn coordinate_depth(self) -> usize {
		use FeatureKind::*;
		match self {
			Point => 0,
			LineString | MultiPoint => 1,
			Polygon | MultiLineString => 2,
			MultiPolygon => 3,
		}
	}
}

impl Display for FeatureKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
