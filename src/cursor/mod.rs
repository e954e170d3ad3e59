
use tracing::trace;

use crate::source::{Infallibly, Iter, Source};


/// A forward-only cursor with one element of lookahead.
///
/// The cursor sits between elements: `peek` shows the element after it, and every
/// consuming operation moves it forward. The end of the sequence is not an error, it
/// is reported as `None` or as a shorter result. The only failures are the source's own,
/// which are returned unchanged, and leave the cursor as it was before the call.
///
/// The source is owned by the cursor and released when the cursor is dropped.
#[derive(Debug, Clone)]
pub struct Cursor<S>
where
	S: Source,
{
	source: S,
	/// The next element. `None` once the source is exhausted, which is terminal.
	lookahead: Option<S::Item>,
	position: usize,
}


impl<S> Cursor<S>
where
	S: Source,
{
	/// Create a cursor, pulling the first element from the source.
	pub fn new(mut source: S) -> Result<Self, S::Error> {
		let lookahead = source.pull()?;

		if lookahead.is_none() {
			trace!("source is empty");
		}

		Ok(Self { source, lookahead, position: 0 })
	}


	/// How many elements were consumed so far.
	pub fn position(&self) -> usize {
		self.position
	}


	pub fn is_eof(&self) -> bool {
		self.lookahead.is_none()
	}


	/// The next element, without consuming it.
	pub fn peek(&self) -> Option<&S::Item> {
		self.lookahead.as_ref()
	}


	/// Consume the next element.
	pub fn next(&mut self) -> Result<Option<S::Item>, S::Error> {
		if self.is_eof() {
			return Ok(None);
		}

		// Pull before replacing, so that a failure doesn't lose the current element.
		let next = self.source.pull()?;

		if next.is_none() {
			trace!(position = self.position + 1, "source exhausted");
		}

		self.position += 1;

		Ok(std::mem::replace(&mut self.lookahead, next))
	}


	/// Consume the next element, discarding it.
	pub fn skip(&mut self) -> Result<(), S::Error> {
		self.next()?;
		Ok(())
	}


	/// Skip up to `count` elements, returning how many were actually skipped.
	pub fn skip_n(&mut self, count: usize) -> Result<usize, S::Error> {
		let start = self.position;

		for _ in 0 .. count {
			if self.is_eof() {
				break;
			}

			self.skip()?;
		}

		Ok(self.position - start)
	}


	/// Consume up to `count` elements.
	pub fn next_n(&mut self, count: usize) -> Result<Vec<S::Item>, S::Error> {
		let mut result = Vec::new();
		self.next_n_into(count, &mut result)?;
		Ok(result)
	}


	/// Consume elements until the first one that satisfies the predicate, which is left
	/// as the next element. Consumes everything if no element satisfies it.
	pub fn up_to_where<P>(&mut self, predicate: P) -> Result<Vec<S::Item>, S::Error>
	where
		P: FnMut(&S::Item) -> bool,
	{
		let mut result = Vec::new();
		self.up_to_where_into(predicate, &mut result)?;
		Ok(result)
	}


	/// Consume elements until the first occurrence of `target`, which is left as the next
	/// element.
	pub fn up_to(&mut self, target: &S::Item) -> Result<Vec<S::Item>, S::Error>
	where
		S::Item: PartialEq,
	{
		self.up_to_where(|item| item == target)
	}


	/// Consume all the remaining elements.
	pub fn up_to_end(&mut self) -> Result<Vec<S::Item>, S::Error> {
		self.up_to_where(|_| false)
	}


	/// Release the cursor, giving back the source.
	/// The source has already produced the buffered lookahead element, which is lost.
	pub fn into_source(self) -> S {
		self.source
	}


	pub(crate) fn next_n_into<E>(&mut self, count: usize, into: &mut E) -> Result<(), S::Error>
	where
		E: Extend<S::Item>,
	{
		for _ in 0 .. count {
			match self.next()? {
				Some(item) => into.extend(Some(item)),
				None => break,
			}
		}

		Ok(())
	}


	pub(crate) fn up_to_where_into<P, E>(
		&mut self,
		mut predicate: P,
		into: &mut E,
	) -> Result<(), S::Error>
	where
		P: FnMut(&S::Item) -> bool,
		E: Extend<S::Item>,
	{
		while self.peek().map_or(false, |item| !predicate(item)) {
			into.extend(self.next()?);
		}

		Ok(())
	}
}


impl<I> Cursor<Iter<I>>
where
	I: Iterator,
{
	/// Create a cursor over anything iterable. Such cursors never fail.
	pub fn over<T>(iter: T) -> Self
	where
		T: IntoIterator<IntoIter = I>,
	{
		Self::new(Iter::new(iter)).infallibly()
	}
}
