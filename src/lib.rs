//! Forward-only cursors with one element of lookahead, the building block of hand
//! written scanners.
//!
//! A [`Cursor`] wraps any [`Source`], a producer pulled one element at a time, and
//! allows peeking at the next element, consuming elements one by one or in bulk, and
//! extracting runs of elements up to a boundary. [`CharCursor`] does the same over
//! characters, producing strings, and knows about line breaks.
//!
//! ```
//! use lookahead::CharCursor;
//!
//! let mut cursor = CharCursor::from("key = value\r\nnext");
//! let key = cursor.up_to('=').unwrap();
//! assert_eq!(key.trim(), "key");
//! cursor.skip().unwrap();
//! assert_eq!(cursor.next_line().unwrap().trim(), "value");
//! assert_eq!(cursor.peek(), Some('n'));
//! ```

mod cursor;
mod error;
pub mod source;
mod text;

pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use source::{Infallibly, Iter, Source};
pub use text::{is_line_terminator, CharCursor, Lines};
