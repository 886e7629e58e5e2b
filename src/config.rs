use mockall::automock;
use std::env;
use thiserror::Error;

/// Environment variable holding the deployed application version string.
pub const VERSION_VAR: &str = "HELPDESK_VERSION";

/// Placeholder reported when no version has been configured.
///
/// An absent version is a valid state (e.g. local development builds),
/// not a failure.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Errors raised while reading process-wide configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing configuration store could not be reached or read.
    #[error("{0}")]
    Unavailable(String),

    /// The configured value exists but is not valid unicode.
    #[error("value of {0} is not valid unicode")]
    NotUnicode(String),
}

/// # Version Source
///
/// Accessor for the process-wide application version string.
///
/// Injected into [`StatusReporter`] at construction time instead of being
/// read as ambient global state, so that reporter tests can substitute a
/// mock and simulate configuration failures.
///
/// ## Contract
/// - `Ok(Some(v))`: a version is configured.
/// - `Ok(None)`: no version is configured; callers substitute
///   [`UNKNOWN_VERSION`]. This is not an error.
/// - `Err(_)`: the configuration subsystem itself failed.
///
/// [`StatusReporter`]: crate::reporter::StatusReporter
#[automock]
pub trait VersionSource: Send + Sync {
    fn version(&self) -> Result<Option<String>, ConfigError>;
}

/// Version source backed by a process environment variable.
///
/// Reads [`VERSION_VAR`] by default; the variable name can be overridden
/// for tests via [`EnvVersionSource::with_var`].
pub struct EnvVersionSource {
    var: String,
}

impl EnvVersionSource {
    pub fn new() -> Self {
        Self::with_var(VERSION_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvVersionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for EnvVersionSource {
    fn version(&self) -> Result<Option<String>, ConfigError> {
        match env::var(&self.var) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(self.var.clone())),
        }
    }
}
