use super::LineStringGeometry;
use std::fmt::Debug;

/// A polygon as an ordered list of rings. By convention the first ring is
/// the exterior boundary and the rest are holes; neither closure nor
/// winding is checked at this layer.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<LineStringGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn rings(&self) -> &[LineStringGeometry] {
		&self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, LineStringGeometry);
