use crate::{BoxError, StatusCodeError, UserMessageError, with_code_and_message, with_status_code, with_user_message};

/// Decorate the error side of a `Result` in place
///
/// ```
/// use resperr::{ResultExt, status_code};
///
/// let err = "x".parse::<u32>().with_status_code(422).unwrap_err();
/// assert_eq!(status_code(Some(&err)), 422);
/// ```
pub trait ResultExt<T> {
    /// Attach a status code to the error
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`StatusCodeError`]
    fn with_status_code(self, code: u16) -> Result<T, StatusCodeError>;

    /// Attach a user-facing message to the error
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`UserMessageError`]
    fn with_user_message(self, message: impl Into<String>) -> Result<T, UserMessageError>;

    /// Attach both a status code and a user-facing message to the error
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a message and then a code
    fn with_code_and_message(self, code: u16, message: impl Into<String>) -> Result<T, StatusCodeError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError> + 'static,
{
    fn with_status_code(self, code: u16) -> Result<T, StatusCodeError> {
        self.map_err(|e| with_status_code(Some(e), code))
    }

    fn with_user_message(self, message: impl Into<String>) -> Result<T, UserMessageError> {
        self.map_err(|e| with_user_message(Some(e), message))
    }

    fn with_code_and_message(self, code: u16, message: impl Into<String>) -> Result<T, StatusCodeError> {
        self.map_err(|e| with_code_and_message(Some(e), code, message))
    }
}
