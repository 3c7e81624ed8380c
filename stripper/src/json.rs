//! Entry points: clean a record, then hand it to `serde_json`.
//!
//! Every function resolves its [`Target`] first, so an invalid handle fails
//! before any field is touched. Cleaning always completes before encoding
//! starts. Encoder errors are returned as [`Error::Encoding`](crate::Error::Encoding)
//! unchanged.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::{error::Error, record::Record, target::Target, Result};

/// Cleans the record behind `target` in place and returns it.
///
/// ```rust
/// use stripper::Clean;
///
/// #[derive(Clean, Debug)]
/// struct User {
///     username: String,
///     #[clean = "true"]
///     password: String,
/// }
///
/// let mut user = User { username: "hawry".into(), password: "abadpassword".into() };
/// let cleaned = stripper::clean(&mut user).unwrap();
/// assert_eq!(format!("{cleaned:?}"), r#"User { username: "hawry", password: "" }"#);
/// ```
pub fn clean<'a, T: Target<'a>>(target: T) -> Result<&'a mut T::Record> {
    let record = target.into_record()?;
    Ok(record.clean_fields())
}

/// Cleans the record and encodes it as compact JSON.
///
/// ```rust
/// use serde::Serialize;
/// use stripper::Clean;
///
/// #[derive(Clean, Serialize)]
/// struct User {
///     #[serde(rename = "username")]
///     username: String,
///     #[serde(rename = "password")]
///     #[clean = "true"]
///     password: String,
/// }
///
/// let mut user = User { username: "hawry".into(), password: "abadpassword".into() };
/// let json = stripper::marshal(&mut user).unwrap();
/// assert_eq!(json, br#"{"username":"hawry","password":""}"#);
/// ```
pub fn marshal<'a, T>(target: T) -> Result<Vec<u8>>
where
    T: Target<'a>,
    T::Record: Serialize,
{
    let record = clean(target)?;
    Ok(serde_json::to_vec(&*record)?)
}

/// Cleans the record and encodes it as indented JSON.
///
/// Each element after the first line starts on a new line beginning with
/// `prefix`, followed by one copy of `indent` per nesting level. Empty
/// objects and arrays stay on one line.
pub fn marshal_indent<'a, T>(target: T, prefix: &str, indent: &str) -> Result<Vec<u8>>
where
    T: Target<'a>,
    T::Record: Serialize,
{
    let record = clean(target)?;
    let mut serializer = serde_json::Serializer::with_formatter(
        Vec::with_capacity(128),
        IndentFormatter::new(prefix.as_bytes(), indent.as_bytes()),
    );
    record.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// [`marshal`], returning a `String`.
pub fn marshal_string<'a, T>(target: T) -> Result<String>
where
    T: Target<'a>,
    T::Record: Serialize,
{
    let record = clean(target)?;
    Ok(serde_json::to_string(&*record)?)
}

/// [`marshal_indent`], returning a `String`.
pub fn marshal_indent_string<'a, T>(target: T, prefix: &str, indent: &str) -> Result<String>
where
    T: Target<'a>,
    T::Record: Serialize,
{
    let bytes = marshal_indent(target, prefix, indent)?;
    String::from_utf8(bytes).map_err(|err| Error::Encoding(serde::ser::Error::custom(err)))
}

/// Cleans the record and converts it into a `serde_json::Value` tree.
pub fn to_value<'a, T>(target: T) -> Result<serde_json::Value>
where
    T: Target<'a>,
    T::Record: Serialize,
{
    let record = clean(target)?;
    Ok(serde_json::to_value(&*record)?)
}

/// Pretty formatter with a per-line prefix.
///
/// Mirrors `serde_json::ser::PrettyFormatter`, writing `prefix` after every
/// line break.
struct IndentFormatter<'a> {
    current_indent: usize,
    has_value: bool,
    prefix: &'a [u8],
    indent: &'a [u8],
}

impl<'a> IndentFormatter<'a> {
    fn new(prefix: &'a [u8], indent: &'a [u8]) -> Self {
        Self {
            current_indent: 0,
            has_value: false,
            prefix,
            indent,
        }
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")?;
        writer.write_all(self.prefix)?;
        for _ in 0..self.current_indent {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }
}

impl Formatter for IndentFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}
