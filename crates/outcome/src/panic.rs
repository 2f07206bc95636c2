//! Raise path for invalid container accesses.
//!
//! Every checked accessor that finds the wrong alternative first hands a
//! [`Diagnostic`] to the current thread's [`DiagnosticSink`], then unwinds
//! with a typed payload ([`OptionError`] or [`ResultError`]). [`catch`]
//! turns such an unwind back into a value.

use std::cell::RefCell;
use std::panic::{Location, UnwindSafe};
use std::rc::Rc;

use crate::config::DiagnosticConfig;
use crate::error::{AccessError, OptionError, ResultError};
use crate::family::{Family, OptionFamily, ResultFamily};

/// What the sink is told about an invalid access.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    /// `"option"` or `"result"`.
    pub family: &'static str,
    pub message: &'a str,
    /// Call site of the failing accessor.
    pub location: &'static Location<'static>,
}

/// Receives a [`Diagnostic`] right before the typed error is raised.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic<'_>),
{
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Default sink: logs through `tracing` and attaches a stack trace
/// according to its [`DiagnosticConfig`]. With no subscriber listening the
/// report goes to stderr instead.
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    config: DiagnosticConfig,
}

impl TracingSink {
    pub fn new(config: DiagnosticConfig) -> Self {
        Self { config }
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        let trace = self.config.backtrace().capture();

        if tracing::enabled!(tracing::Level::ERROR) {
            tracing::error!(
                family = diagnostic.family,
                location = %diagnostic.location,
                "invalid {} access: {}",
                diagnostic.family,
                diagnostic.message
            );
            if let Some(trace) = trace {
                tracing::error!(family = diagnostic.family, "stack backtrace:\n{trace}");
            }
            return;
        }

        let mut report = format!(
            "invalid {} access at {}: {}\n",
            diagnostic.family, diagnostic.location, diagnostic.message
        );
        if let Some(trace) = trace {
            report.push_str(&format!("stack backtrace:\n{trace}\n"));
        }
        eprint!("{report}");
    }
}

thread_local! {
    static SINK: RefCell<Rc<dyn DiagnosticSink>> =
        RefCell::new(Rc::new(TracingSink::new(DiagnosticConfig::from_env())));
}

/// Restores the previously installed sink when dropped.
#[must_use = "the previous sink is restored as soon as the guard is dropped"]
pub struct SinkGuard {
    previous: Option<Rc<dyn DiagnosticSink>>,
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let _ = SINK.try_with(|slot| slot.replace(previous));
        }
    }
}

/// Installs `sink` for the current thread.
pub fn set_sink(sink: impl DiagnosticSink + 'static) -> SinkGuard {
    let sink: Rc<dyn DiagnosticSink> = Rc::new(sink);
    let previous = SINK.with(|slot| slot.replace(sink));
    SinkGuard { previous: Some(previous) }
}

/// Runs `f`, converting an invalid-access unwind into an [`AccessError`].
/// Any other panic keeps unwinding.
pub fn catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, AccessError> {
    match std::panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match AccessError::from_payload(payload) {
            Ok(err) => Err(err),
            Err(payload) => std::panic::resume_unwind(payload),
        },
    }
}

#[track_caller]
fn report(family: &'static str, message: &str) {
    let diagnostic = Diagnostic {
        family,
        message,
        location: Location::caller(),
    };
    // Cloned out so a sink may itself install another sink.
    if let Ok(sink) = SINK.try_with(|slot| Rc::clone(&slot.borrow())) {
        sink.report(&diagnostic);
    }
}

#[track_caller]
pub(crate) fn option_access_failed(message: &str) -> ! {
    report(OptionFamily::NAME, message);
    std::panic::panic_any(OptionError::new(message))
}

#[track_caller]
pub(crate) fn result_access_failed(message: &str) -> ! {
    report(ResultFamily::NAME, message);
    std::panic::panic_any(ResultError::new(message))
}
