//! Outgoing message envelopes and body tagging.
//!
//! This module implements the immutable value objects describing a message
//! about to be sent, and the tagging transform applied to their bodies.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::OutgoingTextMessage`], [`domain::OutgoingMediaMessage`], [`domain::Recipient`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::tagger::BodyTagger`], [`ports::identity::LocalIdentity`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::StaticLocalIdentity`])
//! - **Tagging**: The default tagger and the tag grammar
//!
//! # Example
//!
//! ```
//! use courier::message::adapters::memory::StaticLocalIdentity;
//! use courier::message::domain::{OutgoingTextMessage, Recipient, SubscriptionId};
//! use courier::message::tagging::service::CounterTagger;
//!
//! let tagger = CounterTagger::new();
//! let identity = StaticLocalIdentity::registered("+15551234567");
//!
//! let message = OutgoingTextMessage::new(
//!     Recipient::with_e164("+15557654321"),
//!     "Hello!",
//!     SubscriptionId::UNSPECIFIED,
//!     &tagger,
//!     &identity,
//! )
//! .expect("taggable body");
//!
//! let resent = message
//!     .with_body(message.body(), &tagger, &identity)
//!     .expect("taggable body");
//! assert_eq!(resent.body(), "+15551234XXX (2) :\nHello!");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod tagging;

#[cfg(test)]
mod tests;
