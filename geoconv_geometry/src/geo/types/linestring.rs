use super::Coordinates;
use std::fmt::Debug;

/// An ordered sequence of coordinates forming a path. Also used for the
/// rings of a polygon; ring closure and winding are not interpreted here.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	#[must_use]
	pub fn coordinates(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserves_order() {
		let line = LineStringGeometry::from(&[[30, 10], [10, 30], [40, 40]]);
		assert_eq!(line.len(), 3);
		assert_eq!(line.coordinates()[0], Coordinates::new(30.0, 10.0));
		assert_eq!(line.coordinates()[2], Coordinates::new(40.0, 40.0));
	}

	#[test]
	fn empty() {
		let line = LineStringGeometry(Vec::new());
		assert!(line.is_empty());
		assert_eq!(line.len(), 0);
	}
}
