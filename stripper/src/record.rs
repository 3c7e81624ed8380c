//! Records and their static field descriptor tables.
//!
//! A [`Record`] publishes one [`Field`] per declared field, in declaration
//! order. The table is the only thing the walker reads: it never inspects
//! types at runtime.

use std::{any::type_name, fmt};

use tracing::trace;

use crate::field::FieldKind;

/// The reserved annotation key, as written in `#[clean = "true"]`.
pub const CLEAN_TAG: &str = "clean";

/// The single annotation value that marks a field for cleaning.
///
/// Matching is exact: `"TRUE"`, `"1"` or `" true"` leave the field untouched.
pub const CLEAN_SENTINEL: &str = "true";

/// Descriptor for one field of record type `R`.
///
/// Descriptors are built in `const` context by `#[derive(Clean)]`. Hand-written
/// [`Record`] impls can build them with the same constructors.
pub struct Field<R> {
    name: &'static str,
    tag: Option<&'static str>,
    kind: Option<FieldKind>,
    scrub: Option<fn(&mut R)>,
}

impl<R> Field<R> {
    /// A field without a `clean` annotation.
    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            kind: None,
            scrub: None,
        }
    }

    /// A field annotated with a value other than the sentinel.
    ///
    /// The value is kept for introspection only; the field is never cleaned.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is [`CLEAN_SENTINEL`]. A flagged field needs a
    /// scrubber, so build it with [`Field::flagged`]. In a `const` table the
    /// panic is a compile error.
    #[must_use]
    pub const fn tagged(name: &'static str, tag: &'static str) -> Self {
        assert!(
            !matches!(tag.as_bytes(), b"true"),
            "a `clean = \"true\"` field must be built with `Field::flagged`"
        );
        Self {
            name,
            tag: Some(tag),
            kind: None,
            scrub: None,
        }
    }

    /// A field annotated `clean = "true"`.
    ///
    /// `scrub` must clean exactly this field of the record it is given.
    #[must_use]
    pub const fn flagged(name: &'static str, kind: FieldKind, scrub: fn(&mut R)) -> Self {
        Self {
            name,
            tag: Some(CLEAN_SENTINEL),
            kind: Some(kind),
            scrub: Some(scrub),
        }
    }

    /// The declared field name (tuple fields use their index).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw `clean` annotation value, if any.
    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// How the field is cleaned. `None` for fields that are never cleaned.
    pub fn kind(&self) -> Option<FieldKind> {
        self.kind
    }

    /// Whether the annotation is exactly [`CLEAN_SENTINEL`].
    ///
    /// Only [`Field::flagged`] sets the sentinel, and it always carries a
    /// scrubber.
    pub fn is_flagged(&self) -> bool {
        self.scrub.is_some()
    }

    fn scrub(&self, record: &mut R) -> bool {
        match self.scrub {
            Some(scrub) => {
                scrub(record);
                true
            }
            None => false,
        }
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A struct whose fields can be cleaned in place.
///
/// Usually derived with `#[derive(Clean)]`:
///
/// ```rust
/// use stripper::{Clean, Record};
///
/// #[derive(Clean)]
/// struct User {
///     username: String,
///     #[clean = "true"]
///     password: String,
/// }
///
/// let mut user = User {
///     username: "hawry".into(),
///     password: "abadpassword".into(),
/// };
/// user.clean_fields();
/// assert_eq!(user.username, "hawry");
/// assert_eq!(user.password, "");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Record`",
    label = "this type has no field table to clean",
    note = "add `#[derive(Clean)]` to the struct definition"
)]
pub trait Record: Sized + 'static {
    /// Every field of the record, in declaration order.
    const FIELDS: &'static [Field<Self>];

    /// Cleans every flagged field in place and returns the same record.
    ///
    /// Leaf fields reset to their zero value. Nested records are walked with
    /// the same rule instead of being blanked. Unflagged fields are never
    /// touched, and a second call changes nothing.
    fn clean_fields(&mut self) -> &mut Self {
        for field in Self::FIELDS {
            if field.scrub(self) {
                trace!(
                    record = type_name::<Self>(),
                    field = field.name(),
                    kind = ?field.kind(),
                    "cleaned field"
                );
            }
        }
        self
    }

    /// Looks up a field descriptor by its declared name.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}
