//! Zero out sensitive fields of a record before it is serialized.
//!
//! Fields annotated `#[clean = "true"]` are reset to their zero value, so they
//! never reach an API response or a log line, while every other field is left
//! exactly as it was. Cleaning happens in place on the caller's record: no copy
//! is made, and the original values are gone once a cleaning entry point
//! returns.
//!
//! ```rust
//! use serde::Serialize;
//! use stripper::Clean;
//!
//! #[derive(Clean, Serialize)]
//! struct User {
//!     username: String,
//!     #[clean = "true"]
//!     password: String,
//! }
//!
//! let mut user = User { username: "hawry".into(), password: "abadpassword".into() };
//! let json = stripper::marshal_string(&mut user).unwrap();
//! assert_eq!(json, r#"{"username":"hawry","password":""}"#);
//! assert!(user.password.is_empty());
//! ```
//!
//! Key rules:
//! - Only the exact string `"true"` cleans. `"TRUE"`, `"1"` or `"false"` are
//!   recorded on the field descriptor and otherwise ignored.
//! - Flagged leaf fields (numbers, strings, collections, `Option`, ...) reset to
//!   `Default::default()`.
//! - Flagged fields whose type derives `Clean` are walked with the same rule
//!   instead of being blanked.
//! - Serialized names come from `serde` attributes; this crate never reads them.
//!
//! What this crate does:
//! - defines the [`Record`] field table and the in-place walk
//! - defines [`FieldValue`], the zero-or-recurse behavior of each field type
//! - wraps the walk with `serde_json` encoding ([`marshal`], [`marshal_indent`])
//! - provides a `slog` integration behind the `slog` feature
//!
//! What it does not do:
//! - define a serialization format
//! - follow pointers or collections to clean records inside them
//! - restore cleaned values
//!
//! The `Clean` derive macro lives in `stripper-derive` and is re-exported here.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use stripper_derive::Clean;

#[allow(unused_extern_crates)]
extern crate self as stripper;

// Module declarations
mod error;
mod field;
mod json;
mod record;
#[cfg(feature = "slog")]
pub mod slog;
mod target;

// Re-exports
pub use error::{Error, Result};
pub use field::{FieldKind, FieldValue};
pub use json::{clean, marshal, marshal_indent, marshal_indent_string, marshal_string, to_value};
pub use record::{Field, Record, CLEAN_SENTINEL, CLEAN_TAG};
pub use target::Target;
