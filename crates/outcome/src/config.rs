use std::backtrace::{Backtrace, BacktraceStatus};
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable read by [`DiagnosticConfig::from_env`].
pub const BACKTRACE_ENV: &str = "OUTCOME_BACKTRACE";

/// When the default sink captures a stack trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktraceMode {
    /// Never capture.
    Off,
    /// Capture only if `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` ask for it.
    Env,
    /// Always capture.
    Force,
}

impl BacktraceMode {
    pub fn capture(self) -> Option<Backtrace> {
        match self {
            Self::Off => None,
            Self::Env => {
                let trace = Backtrace::capture();
                (trace.status() == BacktraceStatus::Captured).then_some(trace)
            }
            Self::Force => Some(Backtrace::force_capture()),
        }
    }
}

impl Default for BacktraceMode {
    fn default() -> Self {
        if cfg!(feature = "backtrace") {
            Self::Force
        } else {
            Self::Env
        }
    }
}

impl FromStr for BacktraceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(Self::Off),
            "env" => Ok(Self::Env),
            "force" | "full" | "1" => Ok(Self::Force),
            _ => Err(ConfigError(s.to_string())),
        }
    }
}

/// Settings for the default diagnostic sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticConfig {
    backtrace: BacktraceMode,
}

impl DiagnosticConfig {
    /// Reads [`BACKTRACE_ENV`]; unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        let backtrace = match std::env::var(BACKTRACE_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(%err, "ignoring {}", BACKTRACE_ENV);
                BacktraceMode::default()
            }),
            Err(_) => BacktraceMode::default(),
        };
        Self { backtrace }
    }

    pub fn with_backtrace(mut self, backtrace: BacktraceMode) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn backtrace(&self) -> BacktraceMode {
        self.backtrace
    }
}
