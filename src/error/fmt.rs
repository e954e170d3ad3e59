use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Io(error) => write!(f, "read failed: {}", error)?,

			Self::InvalidUtf8(sequence) => {
				"invalid utf-8 sequence:".fmt(f)?;
				for byte in sequence.iter() {
					write!(f, " {:#04x}", byte)?;
				}
			}
		};

		Ok(())
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "byte {} - {}.", self.offset, self.error)
	}
}
