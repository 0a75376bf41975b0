//! The recursive coordinate-tree walker shared by both output builders.
//!
//! The walker descends a fixed number of array-nesting levels, given by the
//! geometry kind, before it expects a raw coordinate pair. It never infers
//! the depth from the data, so a malformed tree fails instead of being
//! reinterpreted as a different kind.

use crate::geo::Coordinates;
use anyhow::{Context, Result, anyhow};
use geoconv_core::json::JsonValue;

/// Reads a coordinate-pair node: an array of exactly two numbers.
pub(crate) fn coordinate_pair(value: &JsonValue) -> Result<Coordinates> {
	let entries = value
		.as_array()
		.map_err(|_| anyhow!("expected a coordinate pair, found a {}", value.type_as_str()))?;
	let [x, y] = entries
		.as_number_array::<2>()
		.context("a coordinate pair must hold exactly an x and a y value")?;
	Ok(Coordinates::new(x, y))
}

/// Walks a coordinate tree of the given remaining `depth`.
///
/// At depth 0 the node is converted through `leaf`; at any other depth the
/// node must be an array whose children are walked in document order at
/// `depth - 1` and composed through `join`. Both builders plug their own
/// pair of callbacks into this one procedure, so they cannot drift apart
/// structurally.
pub(crate) fn walk_coordinates<T>(
	value: &JsonValue,
	depth: usize,
	leaf: &impl Fn(Coordinates) -> T,
	join: &impl Fn(Vec<T>) -> T,
) -> Result<T> {
	if depth == 0 {
		return Ok(leaf(coordinate_pair(value)?));
	}

	let children = value
		.as_array()
		.map_err(|_| anyhow!("expected nested coordinate arrays, found a {}", value.type_as_str()))?;
	let mut items = Vec::with_capacity(children.len());
	for child in children.iter() {
		items.push(walk_coordinates(child, depth - 1, leaf, join)?);
	}
	Ok(join(items))
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoconv_core::json::parse_json_str;
	use rstest::rstest;

	fn walk_flat(json: &str, depth: usize) -> Result<Vec<Vec<f64>>> {
		let value = parse_json_str(json).unwrap();
		walk_coordinates(
			&value,
			depth,
			&|pair: Coordinates| vec![vec![pair.x(), pair.y()]],
			&|items: Vec<Vec<Vec<f64>>>| items.into_iter().flatten().collect(),
		)
	}

	#[test]
	fn depth_zero_reads_one_pair() {
		assert_eq!(walk_flat("[30, 10]", 0).unwrap(), vec![vec![30.0, 10.0]]);
	}

	#[test]
	fn deeper_levels_preserve_document_order() {
		assert_eq!(
			walk_flat("[[3, 1], [2, 4], [1, 5]]", 1).unwrap(),
			vec![vec![3.0, 1.0], vec![2.0, 4.0], vec![1.0, 5.0]]
		);
		assert_eq!(
			walk_flat("[[[1, 2]], [[3, 4], [5, 6]]]", 2).unwrap(),
			vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
		);
	}

	#[rstest]
	#[case("[30]")]
	#[case("[30, 10, 5]")]
	#[case("[]")]
	#[case("[30, \"10\"]")]
	#[case("[[30, 10]]")]
	#[case("30")]
	#[case("\"30 10\"")]
	#[case("null")]
	#[case("{}")]
	fn rejects_malformed_pairs(#[case] json: &str) {
		assert!(walk_flat(json, 0).is_err());
	}

	#[rstest]
	#[case("[[30], [10, 20]]", 1)] // short pair below the surface
	#[case("[[10, 20], [30, 10, 5]]", 1)] // long pair below the surface
	#[case("[[[1, 2], [3]]]", 2)]
	#[case("[30, 10]", 1)] // numbers where an array level was expected
	#[case("{\"a\": [30, 10]}", 1)]
	fn rejects_malformed_trees(#[case] json: &str, #[case] depth: usize) {
		assert!(walk_flat(json, depth).is_err());
	}

	#[test]
	fn structural_error_names_the_problem() {
		let error = walk_flat("[[30], [10, 20]]", 1).unwrap_err();
		assert!(error.to_string().contains("coordinate pair"), "error was: {error:#}");
	}
}
