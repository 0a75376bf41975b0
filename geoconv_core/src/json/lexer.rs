//! Token-level readers on top of [`ByteStream`].
//!
//! Each reader consumes exactly the extent of the token it reads and leaves
//! the cursor at the byte that follows, so sibling content in an enclosing
//! document stays readable for the caller.

use crate::stream::ByteStream;
use anyhow::{Error, Result, bail};
use std::str::FromStr;

/// Matches a fixed ASCII tag (e.g. `true`, `null`) at the cursor.
pub fn expect_tag(stream: &mut ByteStream, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if stream.expect_byte()? != expected {
			return Err(stream.error(&format!("unexpected character while reading '{tag}'")));
		}
	}
	Ok(())
}

/// Reads a quoted JSON string literal, including standard escapes and
/// `\uXXXX` (BMP only). Leaves the cursor after the closing quote.
pub fn read_quoted_string(stream: &mut ByteStream) -> Result<String> {
	stream.skip_whitespace();
	if stream.expect_byte()? != b'"' {
		bail!(stream.error("expected '\"' while reading a string"));
	}

	let mut bytes = Vec::with_capacity(16);
	loop {
		match stream.expect_byte()? {
			b'"' => break,
			b'\\' => match stream.expect_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(read_unicode_escape(stream)?.encode_utf8(&mut buffer).as_bytes());
				}
				other => bytes.push(other),
			},
			other => bytes.push(other),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

fn read_unicode_escape(stream: &mut ByteStream) -> Result<char> {
	let mut hex = [0u8; 4];
	for byte in &mut hex {
		*byte = stream.expect_byte()?;
	}
	let code_point = std::str::from_utf8(&hex)
		.ok()
		.and_then(|digits| u32::from_str_radix(digits, 16).ok())
		.ok_or_else(|| stream.error("invalid unicode escape"))?;
	char::from_u32(code_point).ok_or_else(|| stream.error("invalid unicode code point"))
}

/// Reads a JSON number and returns its textual form. Accepts an optional
/// sign, integer digits, an optional fraction and an optional exponent, and
/// stops at the first byte that cannot continue the number.
pub fn read_number_literal(stream: &mut ByteStream) -> Result<String> {
	let mut literal = String::with_capacity(16);

	if let Some(b'+' | b'-') = stream.peek() {
		literal.push(stream.expect_byte()? as char);
	}

	if !push_digits(stream, &mut literal) {
		return Err(stream.error("expected digits in number"));
	}

	if let Some(b'.') = stream.peek() {
		literal.push(stream.expect_byte()? as char);
		if !push_digits(stream, &mut literal) {
			return Err(stream.error("expected digits after decimal point"));
		}
		if let Some(b'.') = stream.peek() {
			return Err(stream.error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = stream.peek() {
		literal.push(stream.expect_byte()? as char);
		if let Some(b'+' | b'-') = stream.peek() {
			literal.push(stream.expect_byte()? as char);
		}
		if !push_digits(stream, &mut literal) {
			return Err(stream.error("expected digits in exponent"));
		}
	}

	Ok(literal)
}

fn push_digits(stream: &mut ByteStream, literal: &mut String) -> bool {
	let mut found = false;
	while let Some(digit @ b'0'..=b'9') = stream.peek() {
		literal.push(digit as char);
		stream.advance();
		found = true;
	}
	found
}

/// Reads a JSON number and converts it via `FromStr`.
pub fn read_number<R: FromStr>(stream: &mut ByteStream) -> Result<R> {
	read_number_literal(stream)?
		.parse::<R>()
		.map_err(|_| stream.error("invalid number"))
}

/// Walks the entries of a JSON object, handing each key and the stream
/// (positioned at the value) to `on_entry`. The callback must consume
/// exactly the value. Leaves the cursor after the closing `}`.
pub fn each_object_entry(
	stream: &mut ByteStream,
	mut on_entry: impl FnMut(String, &mut ByteStream) -> Result<()>,
) -> Result<()> {
	stream.skip_whitespace();
	if stream.expect_byte()? != b'{' {
		bail!(stream.error("expected '{' while reading an object"));
	}

	stream.skip_whitespace();
	if let Some(b'}') = stream.peek() {
		stream.advance();
		return Ok(());
	}

	loop {
		stream.skip_whitespace();
		if stream.expect_peek()? != b'"' {
			return Err(stream.error("expected '\"' while reading an object key"));
		}
		let key = read_quoted_string(stream)?;

		stream.skip_whitespace();
		if stream.expect_byte()? != b':' {
			return Err(stream.error("expected ':'"));
		}

		stream.skip_whitespace();
		on_entry(key, stream)?;

		stream.skip_whitespace();
		match stream.expect_byte()? {
			b',' => {}
			b'}' => break,
			_ => return Err(stream.error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Walks the entries of a JSON array, handing the stream (positioned at
/// each element) to `on_entry`. The callback must consume exactly the
/// element. Leaves the cursor after the closing `]`.
pub fn each_array_entry(
	stream: &mut ByteStream,
	mut on_entry: impl FnMut(&mut ByteStream) -> Result<()>,
) -> Result<()> {
	stream.skip_whitespace();
	if stream.expect_byte()? != b'[' {
		bail!(stream.error("expected '[' while reading an array"));
	}

	stream.skip_whitespace();
	if let Some(b']') = stream.peek() {
		stream.advance();
		return Ok(());
	}

	loop {
		stream.skip_whitespace();
		on_entry(stream)?;

		stream.skip_whitespace();
		match stream.expect_byte()? {
			b',' => {}
			b']' => break,
			_ => return Err(stream.error("expected ',' or ']'")),
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Cursor;

	fn stream(input: &str) -> ByteStream<'_> {
		ByteStream::from_reader(Cursor::new(input.as_bytes().to_vec()))
	}

	#[test]
	fn tag_matches() {
		assert!(expect_tag(&mut stream("null"), "null").is_ok());
		assert!(expect_tag(&mut stream("nothing"), "no").is_ok());
		assert!(expect_tag(&mut stream("nul"), "null").is_err());
		assert!(expect_tag(&mut stream("nuLl"), "null").is_err());
	}

	#[rstest]
	#[case(r#""hello""#, "hello")]
	#[case(r#"  "padded"  "#, "padded")]
	#[case(r#""a\nb""#, "a\nb")]
	#[case(r#""he\\b\/f""#, "he\\b/f")]
	#[case(r#""quote \" inside""#, "quote \" inside")]
	#[case(r#""Abc""#, "Abc")]
	#[case(r#""café""#, "café")]
	fn quoted_strings(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(read_quoted_string(&mut stream(input)).unwrap(), expected);
	}

	#[test]
	fn quoted_string_rejects_bad_input() {
		assert!(read_quoted_string(&mut stream("unquoted")).is_err());
		assert!(read_quoted_string(&mut stream("\"unterminated")).is_err());
		assert!(read_quoted_string(&mut stream(r#""\uZZZZ""#)).is_err());
		// lone surrogate half
		assert!(read_quoted_string(&mut stream(r#""\uD834""#)).is_err());
	}

	#[test]
	fn quoted_string_stops_after_closing_quote() {
		let mut s = stream(r#""key": 1"#);
		assert_eq!(read_quoted_string(&mut s).unwrap(), "key");
		assert_eq!(s.peek(), Some(b':'));
	}

	#[rstest]
	#[case("0", "0")]
	#[case("123", "123")]
	#[case("-123", "-123")]
	#[case("+8", "+8")]
	#[case("0.25", "0.25")]
	#[case("-0.5e10", "-0.5e10")]
	#[case("3E-2", "3E-2")]
	#[case("12,34", "12")]
	#[case("7.5]", "7.5")]
	fn number_literals(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(read_number_literal(&mut stream(input)).unwrap(), expected);
	}

	#[rstest]
	#[case("-")]
	#[case(".5x")] // digits must precede the decimal point
	#[case("1.")]
	#[case("1..2")]
	#[case("2e")]
	#[case("2e+")]
	#[case("abc")]
	fn invalid_number_literals(#[case] input: &str) {
		assert!(read_number_literal(&mut stream(input)).is_err());
	}

	#[test]
	fn numbers_convert() {
		assert_eq!(read_number::<i32>(&mut stream("-42")).unwrap(), -42);
		assert_eq!(read_number::<f64>(&mut stream("2.5e3")).unwrap(), 2500.0);
		assert!(read_number::<i32>(&mut stream("1.5")).is_err());
	}

	#[test]
	fn object_entries_visit_all_keys() {
		let mut s = stream(r#"{ "a" : 1 , "b" : 2 }"#);
		let mut seen = Vec::new();
		each_object_entry(&mut s, |key, s2| {
			seen.push((key, read_number::<i32>(s2)?));
			Ok(())
		})
		.unwrap();
		assert_eq!(seen, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
	}

	#[test]
	fn empty_object_and_array() {
		each_object_entry(&mut stream("{}"), |_, _| panic!("no entries expected")).unwrap();
		each_array_entry(&mut stream("[ ]"), |_| panic!("no entries expected")).unwrap();
	}

	#[test]
	fn object_entries_reject_malformed_input() {
		for input in [r#"{"a" 1}"#, r#"{"a":1"#, r#"{a:1}"#] {
			let result = each_object_entry(&mut stream(input), |_, s| read_number::<i32>(s).map(|_| ()));
			assert!(result.is_err(), "accepted malformed input {input}");
		}
	}

	#[test]
	fn array_entries_collect_in_order() {
		let mut s = stream("[3, 1, 2]");
		let mut items = Vec::new();
		each_array_entry(&mut s, |s2| {
			items.push(read_number::<i32>(s2)?);
			Ok(())
		})
		.unwrap();
		assert_eq!(items, vec![3, 1, 2]);
	}

	#[test]
	fn array_stops_exactly_after_closing_bracket() {
		let mut s = stream("[1,2],next");
		each_array_entry(&mut s, |s2| read_number::<i32>(s2).map(|_| ())).unwrap();
		assert_eq!(s.peek(), Some(b','));
		assert_eq!(s.into_string().unwrap(), ",next");
	}

	#[test]
	fn array_entries_reject_malformed_input() {
		for input in ["[1 2]", "[1,2"] {
			let result = each_array_entry(&mut stream(input), |s| read_number::<i32>(s).map(|_| ()));
			assert!(result.is_err(), "accepted malformed input {input}");
		}
	}
}
