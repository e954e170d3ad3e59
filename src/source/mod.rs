pub mod io;

use std::convert::Infallible;


/// A producer of elements, pulled one at a time until exhaustion.
///
/// This is the only capability a cursor needs from whatever it traverses: in-memory
/// collections, generators and readers are all adapted through it.
pub trait Source {
	type Item;
	type Error;

	/// Produce the next element.
	/// `Ok(None)` signals exhaustion, while `Err` is a failure of the underlying resource.
	fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error>;
}


impl<S> Source for &mut S
where
	S: Source + ?Sized,
{
	type Item = S::Item;
	type Error = S::Error;

	fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
		(**self).pull()
	}
}


/// A source over any iterator. Never fails.
#[derive(Debug, Clone)]
pub struct Iter<I>(I);


impl<I> Iter<I>
where
	I: Iterator,
{
	pub fn new<T>(iter: T) -> Self
	where
		T: IntoIterator<IntoIter = I>,
	{
		Self(iter.into_iter())
	}


	pub fn into_inner(self) -> I {
		self.0
	}
}


impl<I> Source for Iter<I>
where
	I: Iterator,
{
	type Item = I::Item;
	type Error = Infallible;

	fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
		Ok(self.0.next())
	}
}


/// Unwraps results of infallible sources, like the ones of cursors over `Iter`.
pub trait Infallibly<T> {
	fn infallibly(self) -> T;
}


impl<T> Infallibly<T> for Result<T, Infallible> {
	fn infallibly(self) -> T {
		match self {
			Ok(value) => value,
			Err(never) => match never {},
		}
	}
}
