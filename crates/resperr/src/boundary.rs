use std::error::Error;

use http::StatusCode;

use crate::{Config, StatusCodeError, with_code_and_message};

/// Domain error that already knows how it maps to an HTTP response
///
/// Typed error enums implement this next to their `thiserror` derive.
/// [`decorate`] turns such a value into a chain the accessors understand,
/// so it can travel through layers that only see `dyn Error`.
pub trait HttpError: Error + Send + Sync + 'static {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found_error`)
    ///
    /// Not carried into the decorated chain; boundary layers that hold the
    /// typed error put it in their response body.
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Lift a typed domain error into a decorated chain
///
/// The result carries the error's status code and client message and
/// keeps the error itself as the cause.
pub fn decorate<E: HttpError>(err: E) -> StatusCodeError {
    let code = err.status_code().as_u16();
    let message = err.client_message();
    with_code_and_message(Some(err), code, message)
}

/// [`crate::status_code`] as an [`http::StatusCode`]
pub fn http_status(err: Option<&(dyn Error + 'static)>) -> StatusCode {
    Config::global().http_status(err)
}

impl Config {
    /// Status code of `err` as an [`http::StatusCode`]
    ///
    /// Codes outside `100..=999` cannot be represented; those fall back to
    /// `error_code`, then to 500.
    pub fn http_status(&self, err: Option<&(dyn Error + 'static)>) -> StatusCode {
        StatusCode::from_u16(self.status_code(err))
            .or_else(|_| StatusCode::from_u16(self.error_code))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;
    use crate::{BoxError, Node, chain, status_code, user_message, with_status_code};

    #[derive(Debug, Error)]
    enum WidgetError {
        #[error("widget {id} not found")]
        NotFound { id: u32 },
        #[error("database unavailable: {0}")]
        Database(String),
    }

    impl HttpError for WidgetError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::NotFound { .. } => StatusCode::NOT_FOUND,
                Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            }
        }

        fn error_type(&self) -> &str {
            match self {
                Self::NotFound { .. } => "not_found_error",
                Self::Database(_) => "unavailable_error",
            }
        }

        fn client_message(&self) -> String {
            match self {
                Self::NotFound { id } => format!("no widget with id {id}"),
                Self::Database(_) => "try again later".to_owned(),
            }
        }
    }

    #[test]
    fn decorate_carries_status_and_message() {
        let err = decorate(WidgetError::NotFound { id: 7 });
        assert_eq!(status_code(Some(&err)), 404);
        assert_eq!(user_message(Some(&err)), "no widget with id 7");
        assert_eq!(err.to_string(), "widget 7 not found");
    }

    #[test]
    fn error_type_survives_on_the_root() {
        let err = decorate(WidgetError::NotFound { id: 7 });
        let error_type = chain(&err)
            .find_map(|link| link.downcast_ref::<WidgetError>())
            .map(HttpError::error_type);
        assert_eq!(error_type, Some("not_found_error"));
    }

    #[test]
    fn decorate_keeps_domain_error_as_root() {
        let err = decorate(WidgetError::Database("connection refused".to_owned()));
        let root = chain(&err).last().unwrap();
        assert!(matches!(Node::of(root), Node::Plain(_)));
        assert!(matches!(
            root.downcast_ref::<WidgetError>(),
            Some(WidgetError::Database(_))
        ));
    }

    #[test]
    fn http_status_converts_known_codes() {
        let err = with_status_code(None::<BoxError>, 429);
        assert_eq!(http_status(Some(&err)), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(http_status(None), StatusCode::OK);
    }

    #[test]
    fn http_status_falls_back_for_unrepresentable_codes() {
        let err = with_status_code(None::<BoxError>, 5);
        assert_eq!(http_status(Some(&err)), StatusCode::INTERNAL_SERVER_ERROR);

        let config = Config {
            error_code: 502,
            ..Config::default()
        };
        assert_eq!(config.http_status(Some(&err)), StatusCode::BAD_GATEWAY);
    }
}
