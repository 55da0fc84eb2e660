//! Domain types for outgoing message envelopes.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod ids;
mod media;
mod recipient;
mod references;
mod text;

pub use ids::{AttachmentId, MessageId, RecipientId, SubscriptionId};
pub use media::{AttachmentBundle, MediaMessageBuilder, OutgoingMediaMessage, merge_caption};
pub use recipient::Recipient;
pub use references::{
    Attachment, IdentityKeyMismatch, LinkPreview, Mention, NetworkFailure, QuoteReference,
    SharedContact,
};
pub use text::{OutgoingTextMessage, TextMessageBuilder, TextMessageKind, TextMessageRecord};
