//! Domain error types for body tagging and envelope construction.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while tagging a message body.
///
/// Every variant is a hard failure: the tagger never guesses a counter value
/// or a masked phone number. Callers decide whether to abort the send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The counter of an existing tag could not be parsed as an integer.
    #[error("tag counter '{counter}' is not a valid integer: {source}")]
    InvalidCounter {
        /// The raw counter digits found in the body.
        counter: String,
        /// The underlying parse failure.
        source: ParseIntError,
    },

    /// The counter of an existing tag cannot be incremented further.
    #[error("tag counter {0} cannot be incremented without overflow")]
    CounterOverflow(u64),

    /// The self phone number is too short to mask.
    #[error("self phone number has {actual} characters, at least {required} are required")]
    PhoneNumberTooShort {
        /// Number of characters the phone number holds.
        actual: usize,
        /// Number of characters the mask removes.
        required: usize,
    },

    /// The tag pattern failed to compile.
    #[error("tag pattern is invalid: {0}")]
    Pattern(String),
}

impl TagError {
    /// Creates an invalid counter error.
    #[must_use]
    pub fn invalid_counter(counter: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidCounter {
            counter: counter.into(),
            source,
        }
    }

    /// Returns `true` if the failure came from an existing tag's counter.
    #[must_use]
    pub const fn is_counter_error(&self) -> bool {
        matches!(self, Self::InvalidCounter { .. } | Self::CounterOverflow(_))
    }
}

/// Errors that can occur when building an outgoing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBuilderError {
    /// The body could not be tagged.
    #[error("failed to tag message body: {0}")]
    Tagging(#[from] TagError),
}
