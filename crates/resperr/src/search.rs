use std::error::Error;

use crate::{Config, StatusCodeError, UserMessageError};

/// Queryable property an error in a chain may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Carries a status code, stored or computed
    StatusCode,
    /// Carries a user-facing message
    UserMessage,
}

/// One link of an error chain, classified by what it can answer
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Stores a status code
    StatusCoder(&'a StatusCodeError),
    /// Stores a user message and computes a status code from its cause
    UserMessenger(&'a UserMessageError),
    /// Any other error; answers nothing
    Plain(&'a (dyn Error + 'static)),
}

impl<'a> Node<'a> {
    /// Classify a single error without looking at its causes
    pub fn of(err: &'a (dyn Error + 'static)) -> Self {
        if let Some(coder) = err.downcast_ref::<StatusCodeError>() {
            Self::StatusCoder(coder)
        } else if let Some(messenger) = err.downcast_ref::<UserMessageError>() {
            Self::UserMessenger(messenger)
        } else {
            Self::Plain(err)
        }
    }

    /// Whether this node can answer for `capability`
    pub const fn satisfies(self, capability: Capability) -> bool {
        match (self, capability) {
            (Self::StatusCoder(_), Capability::StatusCode) | (Self::UserMessenger(_), _) => true,
            (Self::StatusCoder(_), Capability::UserMessage) | (Self::Plain(_), _) => false,
        }
    }

    /// Status code this node reports, if it has one
    ///
    /// A messenger computes its code from its own cause using `config`.
    pub fn status_code(self, config: &Config) -> Option<u16> {
        match self {
            Self::StatusCoder(coder) => Some(coder.code()),
            Self::UserMessenger(messenger) => Some(messenger.status_code_with(config)),
            Self::Plain(_) => None,
        }
    }

    /// User message this node stores, if any
    pub fn user_message(self) -> Option<&'a str> {
        match self {
            Self::UserMessenger(messenger) => Some(messenger.message()),
            Self::StatusCoder(_) | Self::Plain(_) => None,
        }
    }

    /// The underlying error
    pub fn error(self) -> &'a (dyn Error + 'static) {
        match self {
            Self::StatusCoder(coder) => coder,
            Self::UserMessenger(messenger) => messenger,
            Self::Plain(err) => err,
        }
    }
}

/// First node in `err`'s chain that satisfies `capability`
///
/// Walks `err`, `err.source()`, and so on, stopping at the first match.
/// Deeper matches are never consulted.
pub fn find<'a>(err: &'a (dyn Error + 'static), capability: Capability) -> Option<Node<'a>> {
    chain(err).map(Node::of).find(|node| node.satisfies(capability))
}

/// Iterate over `err` and each of its causes, outer-most first
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`]
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl std::iter::FusedIterator for Chain<'_> {}
