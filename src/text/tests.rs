use super::*;

use std::io;

use assert_matches::assert_matches;

use crate::{error::ErrorKind, source::Infallibly};


#[test]
fn test_up_to_yields_string() {
	let mut cursor = CharCursor::from("ABCDEFG");

	assert_eq!(cursor.up_to('D'), Ok("ABC".to_owned()));
	assert_eq!(cursor.peek(), Some('D'));
	assert_eq!(cursor.position(), 3);
}


#[test]
fn test_next_n_yields_string() {
	let mut cursor = CharCursor::from("ABCDEFG");

	assert_eq!(cursor.next_n(3), Ok("ABC".to_owned()));
	assert_eq!(cursor.next_n(0), Ok(String::new()));
	assert_eq!(cursor.next_n(10), Ok("DEFG".to_owned()));
	assert_eq!(cursor.next_n(10), Ok(String::new()));
	assert!(cursor.is_eof());
}


#[test]
fn test_up_to_end_yields_string() {
	let mut cursor = CharCursor::from("ABC");

	assert_eq!(cursor.up_to_end(), Ok("ABC".to_owned()));
	assert!(cursor.is_eof());
	assert_eq!(cursor.up_to_end(), Ok(String::new()));
}


#[test]
fn test_up_to_where_yields_string() {
	let mut cursor = CharCursor::from("foo123 bar");

	assert_eq!(cursor.up_to_where(|ch| ch.is_ascii_digit()), Ok("foo".to_owned()));
	assert_eq!(cursor.up_to_where(char::is_whitespace), Ok("123".to_owned()));
	assert_eq!(cursor.next(), Ok(Some(' ')));
	assert_eq!(cursor.up_to('!'), Ok("bar".to_owned()));
	assert!(cursor.is_eof());
}


#[test]
fn test_multibyte_characters_count_once() {
	let mut cursor = CharCursor::from("ñandú☃x");

	assert_eq!(cursor.next_n(5), Ok("ñandú".to_owned()));
	assert_eq!(cursor.position(), 5);
	assert_eq!(cursor.next(), Ok(Some('☃')));
	assert_eq!(cursor.peek(), Some('x'));
}


#[test]
fn test_line_terminators_are_plain_characters() {
	let mut cursor = CharCursor::from("ABC\nDEF\r\nGHI");

	cursor.skip_n(3).infallibly();
	assert_eq!(cursor.next(), Ok(Some('\n')));
	cursor.skip_n(3).infallibly();
	assert_eq!(cursor.next_n(2), Ok("\r\n".to_owned()));
	assert_eq!(cursor.up_to_end(), Ok("GHI".to_owned()));
}


#[test]
fn test_next_line_with_any_terminator() {
	let mut cursor = CharCursor::from("ABC\nDEF\r\nGHI");

	assert_eq!(cursor.next_line(), Ok("ABC".to_owned()));
	assert_eq!(cursor.next_line(), Ok("DEF".to_owned()));
	assert_eq!(cursor.next_line(), Ok("GHI".to_owned()));
	assert!(cursor.is_eof());
	assert_eq!(cursor.position(), 12);
}


#[test]
fn test_next_line_carriage_return() {
	let mut cursor = CharCursor::from("ABC\rDEF\r");

	assert_eq!(cursor.next_line(), Ok("ABC".to_owned()));
	assert_eq!(cursor.peek(), Some('D'));
	assert_eq!(cursor.next_line(), Ok("DEF".to_owned()));
	assert!(cursor.is_eof());
	assert_eq!(cursor.next_line(), Ok(String::new()));
}


#[test]
fn test_next_line_empty_lines() {
	let mut cursor = CharCursor::from("A\n\nB\r\rC\r\n\r\nD\n\rE");

	let lines: Vec<String> = cursor
		.lines()
		.collect::<Result<Vec<_>, _>>()
		.infallibly();

	assert_eq!(lines, ["A", "", "B", "", "C", "", "D", "", "E"]);
	assert!(cursor.is_eof());
}


#[test]
fn test_lines_without_trailing_empty_line() {
	let mut cursor = CharCursor::from("first\nsecond\n");

	let mut lines = cursor.lines();
	assert_eq!(lines.next(), Some(Ok("first".to_owned())));
	assert_eq!(lines.next(), Some(Ok("second".to_owned())));
	assert_eq!(lines.next(), None);

	assert_eq!(CharCursor::from("").lines().count(), 0);
}


#[test]
fn test_peek_at_eof() {
	let mut cursor = CharCursor::from("");

	assert!(cursor.is_eof());
	assert_eq!(cursor.peek(), None);
	assert_eq!(cursor.next(), Ok(None));
	assert_eq!(cursor.next_line(), Ok(String::new()));
	assert_eq!(cursor.position(), 0);
}


#[test]
fn test_over_any_chars() {
	let mut cursor = CharCursor::over("a-b-c".chars().filter(|&ch| ch != '-'));

	assert_eq!(cursor.up_to_end(), Ok("abc".to_owned()));
	assert_eq!(cursor.as_cursor().position(), 3);
}


#[test]
fn test_from_reader() {
	let reader = io::Cursor::new("ABC\r\nDEF".as_bytes());
	let mut cursor = CharCursor::from_reader(reader).unwrap();

	assert_eq!(cursor.next().unwrap(), Some('A'));
	assert_eq!(cursor.next_line().unwrap(), "BC");
	assert_eq!(cursor.up_to_end().unwrap(), "DEF");
	assert!(cursor.is_eof());

	let reader = cursor.into_source().into_inner().into_inner();
	assert_eq!(reader.position(), 8);
}


#[test]
fn test_from_reader_invalid_utf8() {
	let reader = io::Cursor::new(b"ok\xFFmore".to_vec());
	let mut cursor = CharCursor::from_reader(reader).unwrap();

	assert_eq!(cursor.next().unwrap(), Some('o'));

	// Consuming 'k' pulls the malformed byte.
	assert_matches!(
		cursor.next(),
		Err(Error { error: ErrorKind::InvalidUtf8(sequence), offset: 2 }) => {
			assert_eq!(&*sequence, b"\xFF");
		}
	);
	assert_eq!(cursor.position(), 1);
	assert_eq!(cursor.peek(), Some('k'));

	// The reader already moved past the malformed byte.
	assert_eq!(cursor.up_to_end().unwrap(), "kmore");
}
