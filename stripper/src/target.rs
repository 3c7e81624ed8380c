//! Handles accepted by the public entry points.
//!
//! Only exclusive references resolve to a record. Passing a record by value,
//! or a primitive, does not compile; an empty `Option<&mut R>` is the one
//! runtime failure and is reported before anything is touched.

use tracing::debug;

use crate::{error::Error, record::Record, Result};

pub(crate) const NOT_A_POINTER: &str = "must provide a pointer";

/// Something that may resolve to exclusive access to a record.
pub trait Target<'a> {
    /// The record behind the handle.
    type Record: Record;

    /// Resolves the handle, failing with [`Error::InvalidArgument`] when there
    /// is no record behind it.
    fn into_record(self) -> Result<&'a mut Self::Record>;
}

impl<'a, R: Record> Target<'a> for &'a mut R {
    type Record = R;

    fn into_record(self) -> Result<&'a mut R> {
        Ok(self)
    }
}

impl<'a, R: Record> Target<'a> for Option<&'a mut R> {
    type Record = R;

    fn into_record(self) -> Result<&'a mut R> {
        self.ok_or_else(|| {
            debug!(
                record = std::any::type_name::<R>(),
                "rejected empty record handle"
            );
            Error::InvalidArgument(NOT_A_POINTER)
        })
    }
}
