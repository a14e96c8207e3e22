use std::borrow::Cow;
use std::error::Error;
use std::sync::OnceLock;

use crate::ConfigError;
use crate::search::{Capability, find};

/// Generic user message for errors that carry none
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Maps a status code to its standard text
pub type StatusTexter = fn(u16) -> Cow<'static, str>;

static INSTALLED: OnceLock<Config> = OnceLock::new();
static BUILTIN: Config = Config::DEFAULT;

/// Defaults used when an error chain does not answer for itself
///
/// One value may be installed process-wide with [`Config::install`] before
/// errors are inspected concurrently. Boundary layers that prefer an
/// explicit value can call the accessor methods on their own `Config`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Status code reported for no error at all
    pub no_error_code: u16,
    /// Status code reported for an error with no code in its chain
    pub error_code: u16,
    /// Status code of a user message with no code beneath it
    pub message_code: u16,
    /// User message for an error with no message in its chain
    pub default_message: Cow<'static, str>,
    /// Standard text for a status code
    pub status_text: StatusTexter,
}

impl Config {
    /// Built-in defaults: 200, 500, 400 and the HTTP reason phrases
    pub const DEFAULT: Self = Self {
        no_error_code: 200,
        error_code: 500,
        message_code: 400,
        default_message: Cow::Borrowed(DEFAULT_ERROR_MESSAGE),
        status_text: http_status_text,
    };

    /// The installed configuration, or the built-in defaults
    pub fn global() -> &'static Self {
        INSTALLED.get().unwrap_or(&BUILTIN)
    }

    /// Make this the process-wide configuration
    ///
    /// Call once during startup, before errors are inspected from other
    /// threads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInstalled`] if a configuration was
    /// installed earlier; the earlier one stays in effect.
    pub fn install(self) -> Result<(), ConfigError> {
        let (no_error_code, error_code, message_code) = (self.no_error_code, self.error_code, self.message_code);

        INSTALLED.set(self).map_err(|_| {
            tracing::warn!("ignoring resperr configuration, one is already installed");
            ConfigError::AlreadyInstalled
        })?;

        tracing::debug!(no_error_code, error_code, message_code, "installed resperr configuration");
        Ok(())
    }

    /// Status code associated with `err`
    pub fn status_code(&self, err: Option<&(dyn Error + 'static)>) -> u16 {
        let Some(err) = err else {
            return self.no_error_code;
        };

        find(err, Capability::StatusCode)
            .and_then(|node| node.status_code(self))
            .unwrap_or(self.error_code)
    }

    /// User-facing message associated with `err`
    pub fn user_message(&self, err: Option<&(dyn Error + 'static)>) -> String {
        let Some(err) = err else {
            return String::new();
        };

        find_message(err).map_or_else(|| self.default_message.to_string(), str::to_owned)
    }

    /// User-facing message, falling back to the text of the status code
    pub fn user_message_status(&self, err: Option<&(dyn Error + 'static)>) -> String {
        let Some(err) = err else {
            return String::new();
        };

        find_message(err).map_or_else(
            || (self.status_text)(self.status_code(Some(err))).into_owned(),
            str::to_owned,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn find_message<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a str> {
    find(err, Capability::UserMessage).and_then(crate::Node::user_message)
}

/// HTTP reason phrase for `code`, or `""` when there is none
pub fn http_status_text(code: u16) -> Cow<'static, str> {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or(Cow::Borrowed(""), Cow::Borrowed)
}
