//! Single-field wrappers marking which side of a [`Result`](crate::Result)
//! a value belongs to.
//!
//! `Ok(x).into()` and `Err(x).into()` stay unambiguous even when the success
//! and failure types are the same.

use core::result::Result as StdResult;

macro_rules! tag_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<T>(pub T);

        impl<T> $name<T> {
            pub const fn new(value: T) -> Self {
                $name(value)
            }

            pub fn into_inner(self) -> T {
                self.0
            }

            pub const fn get(&self) -> &T {
                &self.0
            }

            pub fn get_mut(&mut self) -> &mut T {
                &mut self.0
            }

            /// Rewraps a lossless conversion of `other`'s payload.
            pub fn convert<U: Into<T>>(other: $name<U>) -> Self {
                $name(other.0.into())
            }

            /// Rewraps a conversion of `other`'s payload that may fail.
            pub fn try_convert<U>(other: $name<U>) -> StdResult<Self, T::Error>
            where
                T: TryFrom<U>,
            {
                T::try_from(other.0).map($name)
            }

            /// Overwrites the payload with a lossless conversion of `value`.
            pub fn assign<U: Into<T>>(&mut self, value: U) {
                self.0 = value.into();
            }

            pub fn map<U>(self, f: impl FnOnce(T) -> U) -> $name<U> {
                $name(f(self.0))
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                $name(value)
            }
        }
    };
}

tag_wrapper!(
    /// The success side.
    Ok
);

tag_wrapper!(
    /// The failure side.
    Err
);
