//! Body tagging for outgoing messages.
//!
//! Every outgoing body is passed through a [`BodyTagger`] exactly once per
//! construction. The default [`CounterTagger`](service::CounterTagger)
//! implements the wire format
//!
//! ```text
//! +<masked-phone>XXX (<n>) :
//! <original body>
//! ```
//!
//! where `<masked-phone>` is the sender's number without its last three
//! characters and `<n>` counts how often the body has been re-tagged.

pub mod pattern;
pub mod service;

use crate::message::ports::tagger::{BodyTagger, TagResult};

/// Tags `body` with the default tagger configuration.
///
/// # Errors
///
/// Returns [`TagError`](crate::message::error::TagError) when an existing
/// counter cannot be incremented or the phone number cannot be masked.
///
/// # Examples
///
/// ```
/// use courier::message::tagging::transform;
///
/// let body = transform("+15551XXX (3) :\nhello", None).expect("taggable");
/// assert_eq!(body, "+15551XXX (4) :\nhello");
///
/// assert_eq!(transform("hello", None).expect("taggable"), "hello");
/// ```
pub fn transform(body: &str, self_phone_number: Option<&str>) -> TagResult<String> {
    service::CounterTagger::new().tag(body, self_phone_number)
}
