use crate::option::Option;
use crate::result::Result;

mod sealed {
    pub trait Sealed {}
}

/// A generic container family, i.e. the "template" half of
/// "is `X` an instantiation of `Family`".
pub trait Family: sealed::Sealed {
    /// Short name used when reporting invalid accesses.
    const NAME: &'static str;
}

/// The family of every `Option<T>`.
pub enum OptionFamily {}

/// The family of every `Result<T, E>`.
pub enum ResultFamily {}

impl sealed::Sealed for OptionFamily {}
impl sealed::Sealed for ResultFamily {}

impl Family for OptionFamily {
    const NAME: &'static str = "option";
}

impl Family for ResultFamily {
    const NAME: &'static str = "result";
}

/// Holds exactly when `Self` is an instantiation of the family `F`.
///
/// Sealed: only this crate's containers implement it, so a bound like
/// `C: InstanceOf<OptionFamily>` can never be satisfied by a plain payload.
pub trait InstanceOf<F: Family>: sealed::Sealed {}

impl<T> sealed::Sealed for Option<T> {}
impl<T, E> sealed::Sealed for Result<T, E> {}

impl<T> InstanceOf<OptionFamily> for Option<T> {}
impl<T, E> InstanceOf<ResultFamily> for Result<T, E> {}

/// Name of the family `value` belongs to.
pub fn family_name<X, F>(_value: &X) -> &'static str
where
    X: InstanceOf<F>,
    F: Family,
{
    F::NAME
}
