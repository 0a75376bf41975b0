use super::{
	JsonArray, JsonObject, JsonValue,
	lexer::{each_array_entry, each_object_entry, expect_tag, read_number, read_quoted_string},
};
use crate::stream::ByteStream;
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Cursor};

/// Parses a complete JSON document from a string.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut stream = ByteStream::from_reader(Cursor::new(json.as_bytes().to_vec()));
	parse_json_stream(&mut stream).with_context(|| format!("while parsing JSON '{json}'"))
}

/// Parses exactly one JSON value at the cursor position and leaves the
/// cursor at the first byte after it. Sibling content in an enclosing
/// document stays untouched for the caller.
pub fn parse_json_stream(stream: &mut ByteStream) -> Result<JsonValue> {
	stream.skip_whitespace();
	match stream.expect_peek()? {
		b'[' => {
			let mut items = Vec::new();
			each_array_entry(stream, |stream2| {
				items.push(parse_json_stream(stream2)?);
				Ok(())
			})?;
			Ok(JsonValue::Array(JsonArray(items)))
		}
		b'{' => {
			let mut entries: Vec<(String, JsonValue)> = Vec::new();
			each_object_entry(stream, |key, stream2| {
				entries.push((key, parse_json_stream(stream2)?));
				Ok(())
			})?;
			Ok(JsonValue::Object(JsonObject(BTreeMap::from_iter(entries))))
		}
		b'"' => read_quoted_string(stream).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => read_number::<f64>(stream).map(JsonValue::Number),
		b't' => expect_tag(stream, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => expect_tag(stream, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => expect_tag(stream, "null").map(|()| JsonValue::Null),
		c => Err(stream.error(&format!("unexpected character '{}'", c as char))),
	}
}
