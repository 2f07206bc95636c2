//! `Option<T>`: a value or nothing.

use core::hint;
use core::ops::BitOr;
use core::option::Option as StdOption;
use core::result::Result as StdResult;

use crate::error::OptionError;
use crate::family::{InstanceOf, OptionFamily};
use crate::panic::option_access_failed;
use crate::result::Result;

use self::Option::{None, Some};

const UNWRAP_NONE: &str = "unwrap on an absent option";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Option<T> {
    Some(T),
    None,
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> Option<T> {
    /// Builds `Some` from a lossless conversion of `value`.
    pub fn some_from<U: Into<T>>(value: U) -> Self {
        Some(value.into())
    }

    /// Builds `Some` from a conversion of `value` that may fail.
    pub fn try_some_from<U>(value: U) -> StdResult<Self, T::Error>
    where
        T: TryFrom<U>,
    {
        T::try_from(value).map(Some)
    }

    /// Builds `Some` from the payload produced by `make`.
    pub fn some_with(make: impl FnOnce() -> T) -> Self {
        Some(make())
    }

    /// Builds `Some` by collecting `items` into the payload.
    pub fn some_from_iter<A, I>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
        T: FromIterator<A>,
    {
        Some(items.into_iter().collect())
    }

    /// Converts another instantiation; absence stays absence.
    pub fn convert_from<U: Into<T>>(other: Option<U>) -> Self {
        other.map(Into::into)
    }

    /// Fallible form of [`Option::convert_from`].
    pub fn try_convert_from<U>(other: Option<U>) -> StdResult<Self, T::Error>
    where
        T: TryFrom<U>,
    {
        match other {
            Some(value) => T::try_from(value).map(Some),
            None => Ok(None),
        }
    }

    /// Returns true if a value is present.
    pub const fn is_some(&self) -> bool {
        matches!(*self, Some(_))
    }

    /// Returns true if no value is present.
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// `false` when absent.
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(value) => f(value),
            None => false,
        }
    }

    /// `true` when absent.
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(value) => f(value),
            None => true,
        }
    }

    /// True if either side holds a value.
    pub fn any_some<U>(&self, rhs: &Option<U>) -> bool {
        self.is_some() || rhs.is_some()
    }

    /// True if both sides hold a value.
    pub fn all_some<U>(&self, rhs: &Option<U>) -> bool {
        self.is_some() && rhs.is_some()
    }

    /// Equality across payload types: both absent, or both present with
    /// equal payloads.
    pub fn eq_with<U>(&self, other: &Option<U>) -> bool
    where
        T: PartialEq<U>,
    {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    pub const fn as_ref(&self) -> Option<&T> {
        match *self {
            Some(ref value) => Some(value),
            None => None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match *self {
            Some(ref mut value) => Some(value),
            None => None,
        }
    }

    /// Stores `value`, dropping any previous payload.
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Some(value);
        // SAFETY: a value was stored on the line above.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Like [`Option::insert`], with the payload built by `make`. If `make`
    /// panics the previous state is left untouched.
    pub fn insert_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        let value = make();
        self.insert(value)
    }

    /// Same as [`Option::insert`]: always rebuilds the payload.
    pub fn replace(&mut self, value: T) -> &mut T {
        self.insert(value)
    }

    /// Stores `value` only if currently absent.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `make` only if currently absent.
    pub fn get_or_insert_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        if self.is_none() {
            *self = Some(make());
        }
        // SAFETY: either already present or just stored.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Stores `T::default()` only if currently absent.
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Moves the payload out, leaving `None`.
    pub fn take(&mut self) -> Option<T> {
        core::mem::take(self)
    }

    /// Runs `f` on the payload if present and hands `self` back.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Some(ref value) = self {
            f(value);
        }
        self
    }

    /// Returns the payload, raising an [`OptionError`] if absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(value) => value,
            None => option_access_failed(UNWRAP_NONE),
        }
    }

    /// Returns the payload, raising an [`OptionError`] carrying `msg` if absent.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(value) => value,
            None => option_access_failed(msg),
        }
    }

    /// Checked extraction without unwinding.
    pub fn try_unwrap(self) -> StdResult<T, OptionError> {
        match self {
            Some(value) => Ok(value),
            None => Err(OptionError::new(UNWRAP_NONE)),
        }
    }

    /// Returns the payload, or a conversion of `default` if absent.
    pub fn unwrap_or<U: Into<T>>(self, default: U) -> T {
        match self {
            Some(value) => value,
            None => default.into(),
        }
    }

    /// Returns the payload, or `T::default()` if absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Some(value) => value,
            None => T::default(),
        }
    }

    /// Returns the payload, or the result of `f` if absent.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Some(value) => value,
            None => f(),
        }
    }

    /// Returns the payload without checking the active side.
    ///
    /// # Safety
    /// `self` must be `Some`. Calling this on `None` is undefined behavior.
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_some(), "unwrap_unchecked on an absent option");
        match self {
            Some(value) => value,
            // SAFETY: the caller guarantees `Some`.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Maps `Option<T>` to `Option<U>` by applying `f` to the payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Some(value) => Some(f(value)),
            None => None,
        }
    }

    /// `f(payload)` if present, else `default`.
    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, default: U) -> U {
        match self {
            Some(value) => f(value),
            None => default,
        }
    }

    /// `f(payload)` if present, else `default()`.
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Some(value) => f(value),
            None => default(),
        }
    }

    /// `f(payload)` if present; `None` is passed through without calling `f`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Some(value) = self {
            if predicate(&value) {
                return Some(value);
            }
        }
        None
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Some(_) => self,
            None => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            Some(_) => self,
            None => f(),
        }
    }

    /// Maps `Some(v)` to `Ok(v)` and `None` to `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(value) => Result::Ok(value),
            None => Result::Err(err),
        }
    }

    /// Maps `Some(v)` to `Ok(v)` and `None` to `Err(err())`.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Some(value) => Result::Ok(value),
            None => Result::Err(err()),
        }
    }

    /// Converts into `core::option::Option`.
    pub fn into_std(self) -> StdOption<T> {
        self.into()
    }
}

impl<C> Option<C>
where
    C: InstanceOf<OptionFamily> + Default,
{
    /// Removes one level of nesting: `Some(inner)` yields `inner`, `None`
    /// yields an absent inner option.
    pub fn flatten(self) -> C {
        match self {
            Some(inner) => inner,
            None => C::default(),
        }
    }
}

/// And-composition: `rhs` if `self` holds a value, otherwise `None`.
/// `self`'s payload is never looked at.
impl<T, U> BitOr<Option<U>> for Option<T> {
    type Output = Option<U>;

    fn bitor(self, rhs: Option<U>) -> Option<U> {
        if self.is_some() { rhs } else { None }
    }
}

impl<T, U> BitOr<Option<U>> for &Option<T> {
    type Output = Option<U>;

    fn bitor(self, rhs: Option<U>) -> Option<U> {
        if self.is_some() { rhs } else { None }
    }
}

impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Some(value)
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(value) => Some(value),
            StdOption::None => None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => StdOption::Some(value),
            None => StdOption::None,
        }
    }
}
