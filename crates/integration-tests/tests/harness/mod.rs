#![allow(dead_code)]

use std::error::Error;

use resperr::{BoxError, Node, chain};

/// Wrapper that knows nothing about status codes or messages
#[derive(Debug, thiserror::Error)]
#[error("repository: {source}")]
pub struct RepoError {
    #[source]
    pub source: BoxError,
}

impl RepoError {
    pub fn wrap(source: impl Into<BoxError>) -> Self {
        Self { source: source.into() }
    }
}

/// Error that is neither wrapped nor decorated
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Leaf(pub &'static str);

/// One line per link: node kind, then display text
pub fn render_chain(err: &(dyn Error + 'static)) -> String {
    chain(err)
        .map(|link| {
            let kind = match Node::of(link) {
                Node::StatusCoder(coder) => format!("status({})", coder.code()),
                Node::UserMessenger(messenger) => format!("message({})", messenger.message()),
                Node::Plain(_) => "plain".to_owned(),
            };
            format!("{kind}: {link}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
