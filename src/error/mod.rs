mod fmt;

use std::io;


/// The kind of failure produced by the I/O sources.
#[derive(Debug)]
pub enum ErrorKind {
	/// The underlying reader failed.
	Io(io::Error),
	/// Malformed or truncated UTF-8 sequence.
	InvalidUtf8(Box<[u8]>),
}


/// A failure while pulling characters from a reader.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	/// Byte offset in the reader where the failure happened.
	pub offset: usize,
}


impl Error {
	pub fn io(error: io::Error, offset: usize) -> Self {
		Self { error: ErrorKind::Io(error), offset }
	}

	pub fn invalid_utf8(sequence: &[u8], offset: usize) -> Self {
		Self {
			error: ErrorKind::InvalidUtf8(sequence.into()),
			offset,
		}
	}
}


impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.error {
			ErrorKind::Io(error) => Some(error),
			ErrorKind::InvalidUtf8(_) => None,
		}
	}
}


impl From<Error> for io::Error {
	fn from(error: Error) -> Self {
		match error.error {
			ErrorKind::Io(error) => error,
			ErrorKind::InvalidUtf8(_) => io::Error::new(io::ErrorKind::InvalidData, error),
		}
	}
}
