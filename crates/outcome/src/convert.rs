//! Side selection for building a [`Result`] from a bare value.
//!
//! `IntoResult<T, E, Side>` has one blanket impl per side. The `Side`
//! parameter is inferred from whichever of `V: Into<T>` / `V: Into<E>`
//! holds; when both hold the call is ambiguous and fails to compile, and
//! the caller has to pick a side with `Ok(..)` / `Err(..)`.

use thiserror::Error;

use crate::result::Result;

/// Marker: the value becomes the success payload.
pub enum OkSide {}

/// Marker: the value becomes the failure payload.
pub enum ErrSide {}

pub trait IntoResult<T, E, Side> {
    fn into_result(self) -> Result<T, E>;
}

impl<T, E, U> IntoResult<T, E, OkSide> for U
where
    U: Into<T>,
{
    fn into_result(self) -> Result<T, E> {
        Result::Ok(self.into())
    }
}

impl<T, E, G> IntoResult<T, E, ErrSide> for G
where
    G: Into<E>,
{
    fn into_result(self) -> Result<T, E> {
        Result::Err(self.into())
    }
}

/// A fallible `Result<U, G> -> Result<T, E>` conversion failed on the side
/// that was active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError<A, B> {
    #[error("cannot convert success payload: {0}")]
    Success(A),
    #[error("cannot convert failure payload: {0}")]
    Failure(B),
}
