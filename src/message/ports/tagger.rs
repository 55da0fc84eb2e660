//! Tagger port for outgoing message bodies.
//!
//! Defines the abstract interface both envelope families use to rewrite a
//! body before it leaves the client.

use crate::message::error::TagError;
use serde::{Deserialize, Serialize};

/// Result type for tagging operations.
pub type TagResult<T> = Result<T, TagError>;

/// Port for body tagging.
///
/// A tag is the leading `+<digits>XXX (<counter>) :` marker of a body.
/// Implementations either increment the counter of an existing tag or
/// prepend a fresh tag derived from the sender's phone number.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Leave every byte outside the counter digits untouched when re-tagging
/// - Return the body unchanged when there is no tag and no phone number
/// - Be stateless and thread-safe
pub trait BodyTagger: Send + Sync {
    /// Tags `body` on behalf of the sender owning `self_phone_number`.
    ///
    /// # Errors
    ///
    /// Returns [`TagError`] if an existing counter cannot be incremented or
    /// the phone number is too short to mask.
    fn tag(&self, body: &str, self_phone_number: Option<&str>) -> TagResult<String>;
}

/// Configuration for body tagging.
///
/// # Examples
///
/// ```
/// use courier::message::ports::tagger::TaggingConfig;
///
/// let config = TaggingConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.masked_chars, 3);
///
/// assert!(!TaggingConfig::disabled().enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggingConfig {
    /// Whether bodies are tagged at all.
    pub enabled: bool,
    /// Number of trailing phone-number characters replaced by the mask.
    pub masked_chars: usize,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            masked_chars: 3,
        }
    }
}

impl TaggingConfig {
    /// Creates a configuration that leaves every body untouched.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}
