use super::PointGeometry;
use std::fmt::Debug;

/// A collection of points. Order carries no meaning but is preserved so
/// that output is stable.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl MultiPointGeometry {
	#[must_use]
	pub fn points(&self) -> &[PointGeometry] {
		&self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserves_order() {
		let multi = MultiPointGeometry::from(&[[10, 40], [40, 30], [20, 20]]);
		assert_eq!(multi.points().len(), 3);
		assert_eq!(multi.points()[0], PointGeometry::from(&[10, 40]));
		assert_eq!(multi.points()[2], PointGeometry::from(&[20, 20]));
	}
}
