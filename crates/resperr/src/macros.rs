/// Build a formatted error carrying a status code
///
/// The text is produced by [`format!`]. To chain another error, pass it as
/// the named argument `cause`: it is formatted wherever `{cause}` appears
/// and stays reachable as the formatted error's `source()`, so its status
/// code and user message can still be found beneath the new code.
///
/// ```
/// use resperr::{BoxError, new, status_code, user_message, with_user_message};
///
/// let inner = with_user_message(None::<BoxError>, "msg1");
/// let w1 = new!(5, "w1: {cause}", cause = inner);
/// let w2 = new!(6, "w2: {cause}", cause = w1);
///
/// assert_eq!(w2.to_string(), "w2: w1: UserMessage<msg1>");
/// assert_eq!(status_code(Some(&w2)), 6);
/// assert_eq!(user_message(Some(&w2)), "msg1");
/// ```
#[macro_export]
macro_rules! new {
    ($code:expr, $fmt:literal, cause = $cause:expr $(, $arg:expr)* $(,)?) => {{
        let cause = $cause;
        let text = ::std::format!($fmt, $($arg,)* cause = cause);
        $crate::with_status_code(::std::option::Option::Some($crate::PlainError::with_cause(text, cause)), $code)
    }};
    ($code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::with_status_code(
            ::std::option::Option::Some($crate::PlainError::new(::std::format!($fmt $(, $arg)*))),
            $code,
        )
    };
}
