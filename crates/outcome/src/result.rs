//! `Result<T, E>`: the outcome of a fallible computation.
//!
//! Exactly one of `Ok(T)` / `Err(E)` is active; there is no empty state.
//! Values enter through the [`Ok`] / [`Err`] tag wrappers, through
//! [`Result::from_value`] (side chosen by type), or by converting another
//! instantiation with [`Result::convert_from`].

use core::hint;
use core::ops::BitOr;
use core::result::Result as StdResult;

use crate::convert::{ConvertError, IntoResult};
use crate::error::ResultError;
use crate::family::{InstanceOf, ResultFamily};
use crate::option::Option;
use crate::panic::result_access_failed;
use crate::tag::{Err, Ok};

const UNWRAP_ERR: &str = "unwrap on a result holding an err value";
const UNWRAP_ERR_OK: &str = "unwrap_err on a result holding an ok value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

impl<T: Default, E> Default for Result<T, E> {
    fn default() -> Self {
        Self::Ok(T::default())
    }
}

impl<T, E> Result<T, E> {
    /// Builds `Ok` or `Err` depending on which payload type `value`
    /// converts into.
    pub fn from_value<V, S>(value: V) -> Self
    where
        V: IntoResult<T, E, S>,
    {
        value.into_result()
    }

    /// Builds `Ok` from a lossless conversion of `value`.
    pub fn ok_from<U: Into<T>>(value: U) -> Self {
        Self::Ok(value.into())
    }

    /// Builds `Err` from a lossless conversion of `value`.
    pub fn err_from<G: Into<E>>(value: G) -> Self {
        Self::Err(value.into())
    }

    /// Converts another instantiation, keeping the active side.
    pub fn convert_from<U, G>(other: Result<U, G>) -> Self
    where
        U: Into<T>,
        G: Into<E>,
    {
        match other {
            Result::Ok(value) => Self::Ok(value.into()),
            Result::Err(err) => Self::Err(err.into()),
        }
    }

    /// Fallible form of [`Result::convert_from`].
    pub fn try_convert_from<U, G>(
        other: Result<U, G>,
    ) -> StdResult<Self, ConvertError<T::Error, E::Error>>
    where
        T: TryFrom<U>,
        E: TryFrom<G>,
    {
        match other {
            Result::Ok(value) => T::try_from(value)
                .map(Self::Ok)
                .map_err(ConvertError::Success),
            Result::Err(err) => E::try_from(err)
                .map(Self::Err)
                .map_err(ConvertError::Failure),
        }
    }

    /// Replaces the whole value; the side is chosen as in
    /// [`Result::from_value`].
    pub fn assign<V, S>(&mut self, value: V) -> &mut Self
    where
        V: IntoResult<T, E, S>,
    {
        *self = value.into_result();
        self
    }

    /// Returns true if the success side is active.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Ok(_))
    }

    /// Returns true if the failure side is active.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `Ok` and `f` holds for the success payload.
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// `Err` and `f` holds for the failure payload.
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(err) => f(err),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match *self {
            Self::Ok(ref value) => Result::Ok(value),
            Self::Err(ref err) => Result::Err(err),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match *self {
            Self::Ok(ref mut value) => Result::Ok(value),
            Self::Err(ref mut err) => Result::Err(err),
        }
    }

    /// The success payload as an [`Option`], dropping any failure.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// The failure payload as an [`Option`], dropping any success.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(err) => Option::Some(err),
        }
    }

    /// `f(payload)` on `Ok`; an `Err` is passed through without calling `f`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Returns `self` if `Ok`, otherwise `other`.
    pub fn or<G>(self, other: Result<T, G>) -> Result<T, G> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns `self` if `Ok`, otherwise `f` applied to the failure payload.
    pub fn or_else<G>(self, f: impl FnOnce(E) -> Result<T, G>) -> Result<T, G> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    /// Runs `f` on the success payload if present and hands `self` back.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Runs `f` on the failure payload if present and hands `self` back.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Err(ref err) = self {
            f(err);
        }
        self
    }

    /// Returns the success payload, raising a [`ResultError`] carrying `msg` on `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => result_access_failed(msg),
        }
    }

    /// Returns the failure payload, raising a [`ResultError`] carrying `msg` on `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(_) => result_access_failed(msg),
            Self::Err(err) => err,
        }
    }

    /// Returns the success payload, raising a [`ResultError`] on `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => result_access_failed(UNWRAP_ERR),
        }
    }

    /// Returns the failure payload, raising a [`ResultError`] on `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => result_access_failed(UNWRAP_ERR_OK),
            Self::Err(err) => err,
        }
    }

    /// Checked extraction of the success payload without unwinding.
    pub fn try_unwrap(self) -> StdResult<T, ResultError> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(_) => StdResult::Err(ResultError::new(UNWRAP_ERR)),
        }
    }

    /// Checked extraction of the failure payload without unwinding.
    pub fn try_unwrap_err(self) -> StdResult<E, ResultError> {
        match self {
            Self::Ok(_) => StdResult::Err(ResultError::new(UNWRAP_ERR_OK)),
            Self::Err(err) => StdResult::Ok(err),
        }
    }

    /// Returns the success payload without checking the active side.
    ///
    /// # Safety
    /// `self` must be `Ok`. Calling this on `Err` is undefined behavior.
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_ok(), "unwrap_unchecked on an err result");
        match self {
            Self::Ok(value) => value,
            // SAFETY: the caller guarantees `Ok`.
            Self::Err(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Returns the failure payload without checking the active side.
    ///
    /// # Safety
    /// `self` must be `Err`. Calling this on `Ok` is undefined behavior.
    #[track_caller]
    pub unsafe fn unwrap_err_unchecked(self) -> E {
        debug_assert!(self.is_err(), "unwrap_err_unchecked on an ok result");
        match self {
            // SAFETY: the caller guarantees `Err`.
            Self::Ok(_) => unsafe { hint::unreachable_unchecked() },
            Self::Err(err) => err,
        }
    }

    /// Returns the success payload, or a conversion of `default` on `Err`.
    pub fn unwrap_or<U: Into<T>>(self, default: U) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default.into(),
        }
    }

    /// Returns the success payload, or `T::default()` on `Err`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// The success payload, or `f` applied to the failure payload.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => f(err),
        }
    }

    /// Maps the success payload with `f`, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Maps the failure payload with `f`, leaving a success untouched.
    pub fn map_err<G>(self, f: impl FnOnce(E) -> G) -> Result<T, G> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(f(err)),
        }
    }

    /// `f(payload)` on `Ok`, `default` on `Err`.
    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, default: U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// `f(payload)` on `Ok`, `default(err)` on `Err`.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => default(err),
        }
    }

    /// Converts into `core::result::Result`.
    pub fn into_std(self) -> StdResult<T, E> {
        self.into()
    }
}

impl<C, E> Result<C, E>
where
    C: InstanceOf<ResultFamily> + From<Err<E>>,
{
    /// Removes one level of nesting: `Ok(inner)` yields `inner`, an outer
    /// `Err` becomes an `Err` of the inner result.
    pub fn flatten(self) -> C {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(err) => C::from(Err(err)),
        }
    }
}

/// And-composition: `other` if `self` is `Ok`, otherwise `self`'s failure
/// carried over to the new success type.
impl<T, U, E> BitOr<Result<U, E>> for Result<T, E> {
    type Output = Result<U, E>;

    fn bitor(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Result::Err(err),
        }
    }
}

impl<T, U, E: Clone> BitOr<Result<U, E>> for &Result<T, E> {
    type Output = Result<U, E>;

    fn bitor(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => other,
            Result::Err(err) => Result::Err(err.clone()),
        }
    }
}

impl<T, E, U: Into<T>> From<Ok<U>> for Result<T, E> {
    fn from(value: Ok<U>) -> Self {
        Self::Ok(value.0.into())
    }
}

impl<T, E, G: Into<E>> From<Err<G>> for Result<T, E> {
    fn from(err: Err<G>) -> Self {
        Self::Err(err.0.into())
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            StdResult::Ok(value) => Self::Ok(value),
            StdResult::Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => StdResult::Ok(value),
            Result::Err(err) => StdResult::Err(err),
        }
    }
}
