//! What cleaning does to a single field value.
//!
//! | Type | `KIND` | `clean_value` |
//! |------|--------|---------------|
//! | Numbers, `bool`, `char`, `String`, ... | `Leaf` | reset to `Default` |
//! | `Option<T>` | `Leaf` | `None`, whatever `T` is |
//! | `Vec`, maps, sets, `VecDeque` | `Leaf` | emptied |
//! | `[T; N]` | `Leaf` | every element reset to `T::default()` |
//! | `Box<T>`, `Rc<T>`, `Arc<T>` | `Leaf` | replaced by a default allocation (`T: Default`) |
//! | `Option<Box<T>>` | `Leaf` | `None`, for any `T` (the nil-able pointer) |
//! | `serde_json::Value` | `Leaf` | `Null` |
//! | `#[derive(Clean)]` structs | `Record` | walked with `Record::clean_fields` |
//!
//! Pointer-like fields are leaves even when they point at a record, so a
//! `Box<Self>` or `Option<Box<Self>>` field is reset rather than followed and
//! the walk can never loop.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    ffi::OsString,
    hash::BuildHasher,
    marker::PhantomData,
    path::PathBuf,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

/// Whether a flagged field is zeroed or walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Reset to the type's zero value.
    Leaf,
    /// A nested record, cleaned field by field.
    Record,
}

/// A type that can sit behind a `#[clean = "true"]` field.
///
/// Derived records implement this by walking themselves. Leaf types reset to
/// their zero value. To use your own type as a leaf, implement it with
/// [`impl_leaf!`](crate::impl_leaf) when its zero value is `Default::default()`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be cleaned",
    label = "this field is marked `#[clean = \"true\"]`",
    note = "derive `Clean` on `{Self}` to clean its fields recursively",
    note = "or use `stripper::impl_leaf!({Self})` to reset it to `Default::default()`"
)]
pub trait FieldValue {
    /// How a flagged field of this type is handled.
    const KIND: FieldKind;

    /// Cleans the value in place.
    fn clean_value(&mut self);
}

/// Implements [`FieldValue`] as a leaf for types whose zero value is
/// `Default::default()`.
///
/// ```rust
/// use stripper::{impl_leaf, Clean, Record};
///
/// #[derive(Default)]
/// struct Email(String);
/// impl_leaf!(Email);
///
/// #[derive(Clean)]
/// struct Contact {
///     #[clean = "true"]
///     email: Email,
/// }
///
/// let mut contact = Contact { email: Email("a@b.c".into()) };
/// contact.clean_fields();
/// assert!(contact.email.0.is_empty());
/// ```
#[macro_export]
macro_rules! impl_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FieldValue for $ty {
                const KIND: $crate::FieldKind = $crate::FieldKind::Leaf;

                fn clean_value(&mut self) {
                    *self = <$ty as ::core::default::Default>::default();
                }
            }
        )+
    };
}

impl_leaf!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    PathBuf,
    OsString,
    Duration,
    serde_json::Value,
);

macro_rules! impl_generic_leaf {
    ($(impl<$($param:ident $(: $bound:path)?),*> for $ty:ty;)+) => {
        $(
            impl<$($param $(: $bound)?),*> FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Leaf;

                fn clean_value(&mut self) {
                    *self = Default::default();
                }
            }
        )+
    };
}

impl_generic_leaf! {
    impl<T> for Option<T>;
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for LinkedList<T>;
    impl<T> for BTreeSet<T>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T: Default> for Box<T>;
    impl<T: Default> for Rc<T>;
    impl<T: Default> for Arc<T>;
}

impl<T: ?Sized> FieldValue for PhantomData<T> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {}
}

impl<K, V, S: BuildHasher + Default> FieldValue for HashMap<K, V, S> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        *self = HashMap::default();
    }
}

impl<T, S: BuildHasher + Default> FieldValue for HashSet<T, S> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        *self = HashSet::default();
    }
}

impl FieldValue for Box<str> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        *self = Box::default();
    }
}

impl<T> FieldValue for Box<[T]> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        *self = Box::default();
    }
}

impl FieldValue for Cow<'_, str> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        *self = Cow::Borrowed("");
    }
}

impl<T: Default, const N: usize> FieldValue for [T; N] {
    const KIND: FieldKind = FieldKind::Leaf;

    fn clean_value(&mut self) {
        self.fill_with(T::default);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        collections::{BTreeMap, HashMap, HashSet},
        sync::Arc,
    };

    use serde_json::json;

    use super::{FieldKind, FieldValue};

    fn cleaned<T: FieldValue>(mut value: T) -> T {
        value.clean_value();
        value
    }

    #[test]
    fn scalars_reset_to_zero() {
        assert_eq!(cleaned(42_i32), 0);
        assert_eq!(cleaned(u64::MAX), 0);
        assert!(!cleaned(true));
        assert_eq!(cleaned('x'), '\0');
        assert!(cleaned(1.5_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn strings_become_empty() {
        assert_eq!(cleaned("abadpassword".to_string()), "");
        assert_eq!(cleaned(Cow::Borrowed("secret")), "");
        assert_eq!(&*cleaned(Box::<str>::from("secret")), "");
    }

    #[test]
    fn collections_are_emptied() {
        assert!(cleaned(vec![1, 2, 3]).is_empty());
        assert!(cleaned(HashMap::from([("k", "v")])).is_empty());
        assert!(cleaned(HashSet::from([1])).is_empty());
        assert!(cleaned(BTreeMap::from([(1, 2)])).is_empty());
    }

    #[test]
    fn option_becomes_none_regardless_of_payload() {
        assert_eq!(cleaned(Some("secret".to_string())), None);
        assert_eq!(cleaned(Some(vec![Some(1)])), None);
    }

    #[test]
    fn arrays_and_pointers_reset_contents() {
        assert_eq!(cleaned([7_u8; 4]), [0; 4]);
        assert_eq!(*cleaned(Box::new(9_i64)), 0);
        assert_eq!(*cleaned(Arc::new("token".to_string())), "");
    }

    #[test]
    fn json_value_becomes_null() {
        assert!(cleaned(json!({ "api_key": "abc" })).is_null());
    }

    #[test]
    fn std_types_are_leaves() {
        assert_eq!(<String as FieldValue>::KIND, FieldKind::Leaf);
        assert_eq!(<Option<String> as FieldValue>::KIND, FieldKind::Leaf);
        assert_eq!(<[u8; 16] as FieldValue>::KIND, FieldKind::Leaf);
    }
}
