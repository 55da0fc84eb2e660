//! Tagging service implementation.
//!
//! Provides the default implementation of the `BodyTagger` port on top of
//! the tag grammar in [`super::pattern`].

use super::pattern;
use crate::message::ports::tagger::{BodyTagger, TagResult, TaggingConfig};
use tracing::{debug, trace, warn};

/// Default body tagger.
///
/// Increments the counter of an anchored tag, or prepends a fresh tag with
/// counter `1` when the sender's phone number is known.
///
/// # Examples
///
/// ```
/// use courier::message::ports::tagger::BodyTagger;
/// use courier::message::tagging::service::CounterTagger;
///
/// let tagger = CounterTagger::new();
///
/// let fresh = tagger.tag("hello", Some("+15551234567")).expect("taggable");
/// assert_eq!(fresh, "+15551234XXX (1) :\nhello");
///
/// let again = tagger.tag(&fresh, Some("+15551234567")).expect("taggable");
/// assert_eq!(again, "+15551234XXX (2) :\nhello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CounterTagger {
    config: TaggingConfig,
}

impl CounterTagger {
    /// Creates a tagger with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TaggingConfig::default(),
        }
    }

    /// Creates a tagger with custom configuration.
    #[must_use]
    pub const fn with_config(config: TaggingConfig) -> Self {
        Self { config }
    }

    /// Returns the current tagging configuration.
    #[must_use]
    pub const fn config(&self) -> &TaggingConfig {
        &self.config
    }
}

impl BodyTagger for CounterTagger {
    fn tag(&self, body: &str, self_phone_number: Option<&str>) -> TagResult<String> {
        if !self.config.enabled {
            trace!("body tagging disabled");
            return Ok(body.to_owned());
        }

        let existing = pattern::find_tag(body).inspect_err(|err| {
            warn!(error = %err, "existing tag has an unusable counter");
        })?;

        if let Some(tag) = existing {
            let tagged = pattern::increment_counter(body, &tag).inspect_err(|err| {
                warn!(error = %err, "existing tag counter cannot be incremented");
            })?;
            debug!(
                previous = tag.counter(),
                next = tag.counter().saturating_add(1),
                "incremented tag counter"
            );
            return Ok(tagged);
        }

        match self_phone_number {
            Some(phone_number) => {
                let tagged = pattern::prepend_tag(body, phone_number, self.config.masked_chars)?;
                debug!(counter = pattern::INITIAL_COUNTER, "prepended fresh tag");
                Ok(tagged)
            }
            None => {
                trace!("no self phone number, body left untagged");
                Ok(body.to_owned())
            }
        }
    }
}
