//! Sources over `std::io` readers.

use std::io::{self, BufRead, BufReader, Read};

use tracing::{debug, trace};

use super::Source;
use crate::error::Error;


/// The read buffer size used when wrapping a plain reader.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;


/// Fill the reader's buffer, retrying interrupted reads.
fn fill_buf<R>(reader: &mut R) -> io::Result<&[u8]>
where
	R: BufRead,
{
	loop {
		match reader.fill_buf() {
			Ok(buf) if buf.is_empty() => return Ok(&[]),
			Ok(_) => break,

			Err(error) if error.kind() == io::ErrorKind::Interrupted => {
				trace!("read interrupted, retrying");
			}

			Err(error) => return Err(error),
		}
	}

	// The buffer is not empty, so this does not read again.
	reader.fill_buf()
}


/// The bytes of a reader, in order.
#[derive(Debug)]
pub struct Bytes<R> {
	reader: R,
}


impl<R> Bytes<R>
where
	R: BufRead,
{
	pub fn new(reader: R) -> Self {
		Self { reader }
	}


	pub fn into_inner(self) -> R {
		self.reader
	}
}


impl<R> Bytes<BufReader<R>>
where
	R: Read,
{
	pub fn from_read(read: R) -> Self {
		Self::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, read))
	}
}


impl<R> Source for Bytes<R>
where
	R: BufRead,
{
	type Item = u8;
	type Error = io::Error;

	fn pull(&mut self) -> Result<Option<u8>, io::Error> {
		let byte = fill_buf(&mut self.reader)?.first().copied();

		if byte.is_some() {
			self.reader.consume(1);
		}

		Ok(byte)
	}
}


/// How to treat malformed UTF-8 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoding {
	/// Fail with `ErrorKind::InvalidUtf8`.
	Strict,
	/// Replace the malformed sequence with U+FFFD.
	Lossy,
}


impl Default for Decoding {
	fn default() -> Self {
		Self::Strict
	}
}


/// The characters of a UTF-8 encoded reader, in order.
///
/// Multi-byte sequences may be split across buffer refills. A malformed sequence is
/// consumed before being reported, so pulling may continue after a strict decoding
/// failure.
#[derive(Debug)]
pub struct Utf8Chars<R> {
	reader: R,
	decoding: Decoding,
	/// Bytes of an incomplete sequence cut by the end of the reader's buffer.
	pending: Vec<u8>,
	/// Bytes decoded so far, excluding `pending`.
	offset: usize,
}


impl<R> Utf8Chars<R>
where
	R: BufRead,
{
	pub fn new(reader: R) -> Self {
		Self::with_decoding(reader, Decoding::default())
	}


	pub fn with_decoding(reader: R, decoding: Decoding) -> Self {
		Self {
			reader,
			decoding,
			pending: Vec::with_capacity(4), // The longest sequence.
			offset: 0,
		}
	}


	/// How many bytes were decoded so far.
	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn decoding(&self) -> Decoding {
		self.decoding
	}


	pub fn into_inner(self) -> R {
		self.reader
	}


	fn decoded(&mut self, ch: char, size: usize) -> Result<Option<char>, Error> {
		self.offset += size;
		Ok(Some(ch))
	}


	fn malformed(&mut self, sequence: &[u8]) -> Result<Option<char>, Error> {
		let offset = self.offset;
		self.offset += sequence.len();

		match self.decoding {
			Decoding::Strict => {
				debug!(offset, len = sequence.len(), "rejecting invalid utf-8 sequence");
				Err(Error::invalid_utf8(sequence, offset))
			}

			Decoding::Lossy => {
				debug!(offset, len = sequence.len(), "replacing invalid utf-8 sequence");
				Ok(Some(char::REPLACEMENT_CHARACTER))
			}
		}
	}
}


impl<R> Utf8Chars<BufReader<R>>
where
	R: Read,
{
	pub fn from_read(read: R) -> Self {
		Self::from_read_with_capacity(DEFAULT_BUFFER_SIZE, read)
	}


	pub fn from_read_with_capacity(capacity: usize, read: R) -> Self {
		Self::new(BufReader::with_capacity(capacity, read))
	}
}


impl<R> Source for Utf8Chars<R>
where
	R: BufRead,
{
	type Item = char;
	type Error = Error;

	fn pull(&mut self) -> Result<Option<char>, Error> {
		loop {
			let offset = self.offset;
			let available = fill_buf(&mut self.reader)
				.map_err(|error| Error::io(error, offset))?;

			if self.pending.is_empty() {
				if available.is_empty() {
					return Ok(None);
				}

				let (decoded, size) = bstr::decode_utf8(available);

				match decoded {
					Some(ch) => {
						self.reader.consume(size);
						return self.decoded(ch, size);
					}

					// The whole buffer is a prefix of a sequence: it may continue after the
					// next refill.
					None if size == available.len() => {
						self.pending.extend_from_slice(available);
						self.reader.consume(size);
					}

					None => {
						let sequence = available[..size].to_vec();
						self.reader.consume(size);
						return self.malformed(&sequence);
					}
				}
			} else {
				let byte = match available.first() {
					Some(&byte) => byte,
					None => {
						let sequence = std::mem::take(&mut self.pending);
						return self.malformed(&sequence);
					}
				};

				self.pending.push(byte);
				let (decoded, size) = bstr::decode_utf8(&self.pending);

				match decoded {
					Some(ch) => {
						self.reader.consume(1);
						self.pending.clear();
						return self.decoded(ch, size);
					}

					None if size == self.pending.len() => self.reader.consume(1),

					// The byte does not continue the sequence, so it is left in the reader.
					None => {
						self.pending.pop();
						let sequence = std::mem::take(&mut self.pending);
						return self.malformed(&sequence);
					}
				}
			}
		}
	}
}
