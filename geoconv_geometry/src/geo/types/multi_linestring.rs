use super::LineStringGeometry;
use std::fmt::Debug;

/// A collection of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	#[must_use]
	pub fn line_strings(&self) -> &[LineStringGeometry] {
		&self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
