//! A byte-level reader with single-byte lookahead.
//!
//! [`ByteStream`] wraps any [`Read`] source and exposes peek/consume
//! semantics plus the absolute position of the cursor. Errors produced via
//! [`ByteStream::error`] carry the position and a short window of recently
//! read bytes, which is usually enough to locate a problem in hand-written
//! JSON without re-reading the input.

use anyhow::{Error, Result, anyhow};
use std::collections::VecDeque;
use std::io::Read;

const CHUNK_SIZE: usize = 4096;
const CONTEXT_WINDOW: usize = 16;

pub struct ByteStream<'a> {
	source: Box<dyn Read + 'a>,
	chunk: [u8; CHUNK_SIZE],
	chunk_len: usize,
	chunk_pos: usize,
	peeked: Option<u8>,
	position: usize,
	window: VecDeque<u8>,
}

impl<'a> ByteStream<'a> {
	/// Creates a stream over a reader and loads the first byte.
	pub fn from_reader(reader: impl Read + 'a) -> Self {
		let mut stream = ByteStream {
			source: Box::new(reader),
			chunk: [0; CHUNK_SIZE],
			chunk_len: 0,
			chunk_pos: 0,
			peeked: None,
			position: 0,
			window: VecDeque::with_capacity(CONTEXT_WINDOW),
		};
		stream.peeked = stream.pull();
		if let Some(byte) = stream.peeked {
			stream.remember(byte);
		}
		stream
	}

	fn pull(&mut self) -> Option<u8> {
		if self.chunk_pos >= self.chunk_len {
			self.chunk_len = self.source.read(&mut self.chunk).unwrap_or(0);
			self.chunk_pos = 0;
			if self.chunk_len == 0 {
				return None;
			}
		}
		let byte = self.chunk[self.chunk_pos];
		self.chunk_pos += 1;
		Some(byte)
	}

	fn remember(&mut self, byte: u8) {
		if self.window.len() == CONTEXT_WINDOW {
			self.window.pop_front();
		}
		self.window.push_back(byte);
	}

	/// Returns the byte under the cursor without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked
	}

	/// Absolute position of the cursor, i.e. the index of the peeked byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Moves the cursor one byte forward. A no-op at the end of the stream.
	#[inline]
	pub fn advance(&mut self) {
		if self.peeked.is_none() {
			return;
		}
		self.peeked = self.pull();
		if let Some(byte) = self.peeked {
			self.remember(byte);
		}
		self.position += 1;
	}

	/// Consumes and returns the byte under the cursor.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peeked;
		self.advance();
		byte
	}

	/// Consumes the byte under the cursor, failing at the end of the stream.
	#[inline]
	pub fn expect_byte(&mut self) -> Result<u8> {
		self
			.consume()
			.ok_or_else(|| self.error("unexpected end of input"))
	}

	/// Returns the byte under the cursor, failing at the end of the stream.
	#[inline]
	pub fn expect_peek(&self) -> Result<u8> {
		self
			.peeked
			.ok_or_else(|| self.error("unexpected end of input"))
	}

	/// Moves the cursor past any ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peeked {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Builds an error carrying the cursor position and recent bytes.
	#[must_use]
	pub fn error(&self, message: &str) -> Error {
		let recent: Vec<u8> = self.window.iter().copied().collect();
		let mut context = String::from_utf8_lossy(&recent).into_owned();
		if self.peeked.is_none() {
			context.push_str("<EOF>");
		}
		anyhow!("{message} at position {}: {context}", self.position)
	}

	/// Consumes the rest of the stream into a UTF-8 string.
	pub fn into_string(mut self) -> Result<String> {
		let mut bytes = Vec::new();
		while let Some(byte) = self.consume() {
			bytes.push(byte);
		}
		String::from_utf8(bytes).map_err(Error::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn stream(input: &str) -> ByteStream<'_> {
		ByteStream::from_reader(Cursor::new(input.as_bytes().to_vec()))
	}

	#[test]
	fn peek_does_not_consume() {
		let mut s = stream("ab");
		assert_eq!(s.peek(), Some(b'a'));
		assert_eq!(s.peek(), Some(b'a'));
		assert_eq!(s.consume(), Some(b'a'));
		assert_eq!(s.peek(), Some(b'b'));
	}

	#[test]
	fn consume_to_end() {
		let mut s = stream("xyz");
		assert_eq!(s.consume(), Some(b'x'));
		assert_eq!(s.consume(), Some(b'y'));
		assert_eq!(s.consume(), Some(b'z'));
		assert_eq!(s.consume(), None);
		assert_eq!(s.consume(), None);
	}

	#[test]
	fn position_counts_consumed_bytes() {
		let mut s = stream("abcd");
		assert_eq!(s.position(), 0);
		s.advance();
		s.advance();
		assert_eq!(s.position(), 2);
		s.advance();
		s.advance();
		assert_eq!(s.position(), 4); // one past the last byte
		s.advance(); // no-op at the end
		assert_eq!(s.position(), 4);
	}

	#[test]
	fn expect_byte_fails_at_end() {
		let mut s = stream("a");
		assert_eq!(s.expect_byte().unwrap(), b'a');
		assert!(s.expect_byte().is_err());
	}

	#[test]
	fn expect_peek_fails_at_end() {
		let s = stream("");
		assert!(s.expect_peek().is_err());
	}

	#[test]
	fn skip_whitespace_stops_at_content() {
		let mut s = stream(" \t\r\n  7");
		s.skip_whitespace();
		assert_eq!(s.consume(), Some(b'7'));
	}

	#[test]
	fn error_includes_position_and_context() {
		let mut s = stream("abcdef");
		s.advance();
		s.advance();
		let message = s.error("boom").to_string();
		assert_eq!(message, "boom at position 2: abc");
	}

	#[test]
	fn error_marks_end_of_input() {
		let mut s = stream("hi");
		s.advance();
		s.advance();
		let message = s.error("boom").to_string();
		assert_eq!(message, "boom at position 2: hi<EOF>");
	}

	#[test]
	fn error_context_is_bounded() {
		let input = "x".repeat(100);
		let mut s = ByteStream::from_reader(Cursor::new(input.into_bytes()));
		for _ in 0..50 {
			s.advance();
		}
		let message = s.error("boom").to_string();
		assert_eq!(message, format!("boom at position 50: {}", "x".repeat(16)));
	}

	#[test]
	fn into_string_reads_remainder() {
		let mut s = stream("hello world");
		for _ in 0..6 {
			s.advance();
		}
		assert_eq!(s.into_string().unwrap(), "world");
	}

	#[test]
	fn reads_across_chunk_boundaries() {
		let input = "a".repeat(CHUNK_SIZE + 10);
		let mut s = ByteStream::from_reader(Cursor::new(input.into_bytes()));
		let mut count = 0;
		while s.consume().is_some() {
			count += 1;
		}
		assert_eq!(count, CHUNK_SIZE + 10);
	}
}
