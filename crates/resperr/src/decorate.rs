use std::error::Error;
use std::fmt;

use crate::Config;
use crate::cause::into_cause;
use crate::search::{Capability, find};

/// Boxed cause held by every decorator
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Error carrying a status code
///
/// Displays exactly like its cause.
#[derive(Debug)]
pub struct StatusCodeError {
    source: BoxError,
    code: u16,
}

impl StatusCodeError {
    /// Status-coded error with nothing underneath
    ///
    /// The synthesized cause reads as the configured text for `code`, so
    /// `StatusCodeError::new(404)` displays as `Not Found`.
    pub fn new(code: u16) -> Self {
        let text = (Config::global().status_text)(code);
        Self::wrap(PlainError::new(text), code)
    }

    /// Attach `code` to `source`
    pub fn wrap(source: impl Into<BoxError> + 'static, code: u16) -> Self {
        Self {
            source: into_cause(source),
            code,
        }
    }

    /// The stored status code
    pub const fn code(&self) -> u16 {
        self.code
    }
}

impl fmt::Display for StatusCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl Error for StatusCodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Error carrying a message safe to show an end user
///
/// Displays exactly like its cause; the user message is only reachable
/// through [`UserMessageError::message`] and the crate's accessors.
#[derive(Debug)]
pub struct UserMessageError {
    source: BoxError,
    message: String,
}

impl UserMessageError {
    /// User message with nothing underneath
    ///
    /// The synthesized cause reads `UserMessage<{message}>`.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let sentinel = PlainError::new(format!("UserMessage<{message}>"));
        Self {
            source: Box::new(sentinel),
            message,
        }
    }

    /// Attach `message` to `source`
    pub fn wrap(source: impl Into<BoxError> + 'static, message: impl Into<String>) -> Self {
        Self {
            source: into_cause(source),
            message: message.into(),
        }
    }

    /// The stored user message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status code under the global configuration
    ///
    /// See [`UserMessageError::status_code_with`].
    pub fn status_code(&self) -> u16 {
        self.status_code_with(Config::global())
    }

    /// Status code of the nearest status carrier below this message
    ///
    /// Only the cause is searched, never `self`. Falls back to
    /// `config.message_code` (400 by default) when nothing below carries a
    /// code.
    pub fn status_code_with(&self, config: &Config) -> u16 {
        find(&*self.source, Capability::StatusCode)
            .and_then(|node| node.status_code(config))
            .unwrap_or(config.message_code)
    }
}

impl fmt::Display for UserMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl Error for UserMessageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Error with a message and an optional cause
///
/// Answers no capability itself. Used as the synthesized root of
/// decorators built without a cause, and as the formatted error behind
/// [`new!`](crate::new).
#[derive(Debug)]
pub struct PlainError {
    message: String,
    source: Option<BoxError>,
}

impl PlainError {
    /// Error with no cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Error reporting `source` as its cause
    pub fn with_cause(message: impl Into<String>, source: impl Into<BoxError> + 'static) -> Self {
        Self {
            message: message.into(),
            source: Some(into_cause(source)),
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for PlainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

/// Attach a status code to `err`
///
/// `None` is wrapped too: the result then displays as the configured text
/// for `code`.
pub fn with_status_code<E>(err: Option<E>, code: u16) -> StatusCodeError
where
    E: Into<BoxError> + 'static,
{
    match err {
        Some(err) => StatusCodeError::wrap(err, code),
        None => StatusCodeError::new(code),
    }
}

/// Attach a user-facing message to `err`
///
/// Unless a status code is already in `err`'s chain, the result reports the
/// configured message code (400 by default). `None` is wrapped too: the
/// result then displays as `UserMessage<{message}>`.
pub fn with_user_message<E>(err: Option<E>, message: impl Into<String>) -> UserMessageError
where
    E: Into<BoxError> + 'static,
{
    match err {
        Some(err) => UserMessageError::wrap(err, message),
        None => UserMessageError::new(message),
    }
}

/// [`with_user_message`] with a message built from `format_args!`
pub fn with_user_messagef<E>(err: Option<E>, args: fmt::Arguments<'_>) -> UserMessageError
where
    E: Into<BoxError> + 'static,
{
    with_user_message(err, fmt::format(args))
}

/// Attach both a status code and a user-facing message to `err`
///
/// The status code sits outside the message, so it wins over any code
/// deeper in the chain.
pub fn with_code_and_message<E>(err: Option<E>, code: u16, message: impl Into<String>) -> StatusCodeError
where
    E: Into<BoxError> + 'static,
{
    with_status_code(Some(with_user_message(err, message)), code)
}
