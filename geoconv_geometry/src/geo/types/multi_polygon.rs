use super::PolygonGeometry;
use std::fmt::Debug;

/// A collection of polygons.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	#[must_use]
	pub fn polygons(&self) -> &[PolygonGeometry] {
		&self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nests_three_levels() {
		let multi = MultiPolygonGeometry::from(&[
			[[[30, 20], [45, 40], [10, 40], [30, 20]]],
			[[[15, 5], [40, 10], [10, 20], [15, 5]]],
		]);
		assert_eq!(multi.polygons().len(), 2);
		assert_eq!(multi.polygons()[0].rings().len(), 1);
		assert_eq!(multi.polygons()[0].rings()[0].len(), 4);
	}
}
