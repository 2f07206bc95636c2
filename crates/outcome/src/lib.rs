//! Value-semantic `Option` and `Result` containers with a combinator API
//! and a typed, diagnosable panic path.
//!
//! ```
//! use outcome::{Err, Option, Result, Some};
//!
//! let parsed: Result<f64, String> = Result::from_value(20.0_f64);
//! let failed: Result<f64, String> = Err("Error").into();
//! assert_eq!((parsed | failed).unwrap_err(), "Error");
//!
//! let opt: Option<i32> = Some(5);
//! assert_eq!(opt.map(|v| v * 2).unwrap(), 10);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod family;
pub mod option;
pub mod panic;
pub mod result;
pub mod tag;

pub use config::{BacktraceMode, DiagnosticConfig};
pub use convert::{ConvertError, ErrSide, IntoResult, OkSide};
pub use error::{AccessError, ConfigError, OptionError, ResultError};
pub use family::{Family, InstanceOf, OptionFamily, ResultFamily, family_name};
pub use option::Option;
pub use option::Option::{None, Some};
pub use panic::{Diagnostic, DiagnosticSink, SinkGuard, TracingSink, catch, set_sink};
pub use result::Result;
pub use tag::{Err, Ok};
