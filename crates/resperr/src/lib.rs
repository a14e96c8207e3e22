//! Status codes and user-facing messages for error chains
//!
//! Errors are decorated as they propagate with two independent facets: a
//! numeric status code for the transport response, and a message that is
//! safe to show an end user. Decoration never changes an error's `Display`
//! text, so diagnostics stay intact.
//!
//! A boundary layer recovers both facets from whatever chain reaches it:
//!
//! ```
//! use resperr::{status_code, user_message, with_code_and_message, BoxError};
//!
//! let err = with_code_and_message(None::<BoxError>, 404, "no such widget");
//! assert_eq!(status_code(Some(&err)), 404);
//! assert_eq!(user_message(Some(&err)), "no such widget");
//! ```
//!
//! Lookups walk `std::error::Error::source` from the outside in and the
//! outer-most decorator wins. Foreign wrappers (`thiserror` sources,
//! `anyhow` context) are transparent to the search.

#![allow(clippy::must_use_candidate)]

mod boundary;
mod cause;
mod config;
mod decorate;
mod error;
mod ext;
mod macros;
mod search;

use std::error::Error;

pub use boundary::{HttpError, decorate, http_status};
pub use config::{Config, DEFAULT_ERROR_MESSAGE, StatusTexter, http_status_text};
pub use decorate::{
    BoxError, PlainError, StatusCodeError, UserMessageError, with_code_and_message, with_status_code,
    with_user_message, with_user_messagef,
};
pub use error::ConfigError;
pub use ext::ResultExt;
pub use search::{Capability, Chain, Node, chain, find};

/// Status code associated with an error
///
/// Returns the no-error default (200) for `None`, the code of the
/// outer-most decorator carrying one, or the bare-error default (500) when
/// the chain has none. Defaults come from [`Config::global`].
pub fn status_code(err: Option<&(dyn Error + 'static)>) -> u16 {
    Config::global().status_code(err)
}

/// User-facing message associated with an error
///
/// Returns `""` for `None` and the configured generic message when no
/// [`UserMessageError`] is in the chain.
pub fn user_message(err: Option<&(dyn Error + 'static)>) -> String {
    Config::global().user_message(err)
}

/// User-facing message, falling back to the text of the status code
///
/// Same as [`user_message`] except that a chain without a message yields
/// the standard text for whatever [`status_code`] reports.
pub fn user_message_status(err: Option<&(dyn Error + 'static)>) -> String {
    Config::global().user_message_status(err)
}
