#[cfg(test)]
mod tests;

use std::{
	io::{BufReader, Read},
	str::Chars,
};

use crate::{
	cursor::Cursor,
	error::Error,
	source::{io::Utf8Chars, Iter, Source},
};


/// Whether the character starts a line break.
pub fn is_line_terminator(ch: char) -> bool {
	ch == '\n' || ch == '\r'
}


/// A cursor over characters, producing strings instead of element vectors.
#[derive(Debug, Clone)]
pub struct CharCursor<S>(Cursor<S>)
where
	S: Source<Item = char>;


impl<S> CharCursor<S>
where
	S: Source<Item = char>,
{
	/// Create a cursor, pulling the first character from the source.
	pub fn new(source: S) -> Result<Self, S::Error> {
		Cursor::new(source).map(Self)
	}


	pub fn position(&self) -> usize {
		self.0.position()
	}


	pub fn is_eof(&self) -> bool {
		self.0.is_eof()
	}


	pub fn peek(&self) -> Option<char> {
		self.0.peek().copied()
	}


	pub fn next(&mut self) -> Result<Option<char>, S::Error> {
		self.0.next()
	}


	pub fn skip(&mut self) -> Result<(), S::Error> {
		self.0.skip()
	}


	pub fn skip_n(&mut self, count: usize) -> Result<usize, S::Error> {
		self.0.skip_n(count)
	}


	/// Consume up to `count` characters.
	pub fn next_n(&mut self, count: usize) -> Result<String, S::Error> {
		let mut result = String::new();
		self.0.next_n_into(count, &mut result)?;
		Ok(result)
	}


	/// Consume characters until the first one that satisfies the predicate, which is left
	/// as the next character.
	pub fn up_to_where<P>(&mut self, mut predicate: P) -> Result<String, S::Error>
	where
		P: FnMut(char) -> bool,
	{
		let mut result = String::new();
		self.0.up_to_where_into(|&ch| predicate(ch), &mut result)?;
		Ok(result)
	}


	pub fn up_to(&mut self, target: char) -> Result<String, S::Error> {
		self.up_to_where(|ch| ch == target)
	}


	pub fn up_to_end(&mut self) -> Result<String, S::Error> {
		self.up_to_where(|_| false)
	}


	/// Consume a line, including its terminator, and return it without the terminator.
	/// `\n`, `\r` and `\r\n` are all a single line break. At end of input, yields the
	/// remaining characters, which may be none.
	pub fn next_line(&mut self) -> Result<String, S::Error> {
		let line = self.up_to_where(is_line_terminator)?;

		if self.next()? == Some('\r') && self.peek() == Some('\n') {
			self.skip()?;
		}

		Ok(line)
	}


	/// Iterate over the remaining lines.
	pub fn lines(&mut self) -> Lines<'_, S> {
		Lines(self)
	}


	pub fn as_cursor(&self) -> &Cursor<S> {
		&self.0
	}


	/// Release the cursor, giving back the source.
	pub fn into_source(self) -> S {
		self.0.into_source()
	}
}


impl<I> CharCursor<Iter<I>>
where
	I: Iterator<Item = char>,
{
	/// Create a cursor over any characters. Such cursors never fail.
	pub fn over<T>(chars: T) -> Self
	where
		T: IntoIterator<IntoIter = I>,
	{
		Self(Cursor::over(chars))
	}
}


impl<'a> From<&'a str> for CharCursor<Iter<Chars<'a>>> {
	fn from(text: &'a str) -> Self {
		Self::over(text.chars())
	}
}


impl<R> CharCursor<Utf8Chars<BufReader<R>>>
where
	R: Read,
{
	/// Create a cursor over a UTF-8 encoded reader, failing on malformed input.
	pub fn from_reader(reader: R) -> Result<Self, Error> {
		Self::new(Utf8Chars::from_read(reader))
	}
}


impl<S> From<Cursor<S>> for CharCursor<S>
where
	S: Source<Item = char>,
{
	fn from(cursor: Cursor<S>) -> Self {
		Self(cursor)
	}
}


/// The remaining lines of a `CharCursor`, without their terminators.
#[derive(Debug)]
pub struct Lines<'a, S>(&'a mut CharCursor<S>)
where
	S: Source<Item = char>;


impl<'a, S> Iterator for Lines<'a, S>
where
	S: Source<Item = char>,
{
	type Item = Result<String, S::Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.0.is_eof() {
			None
		} else {
			Some(self.0.next_line())
		}
	}
}
