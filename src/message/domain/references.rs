//! Reference types carried by outgoing media messages.
//!
//! Envelopes never interpret these values. They are copied through to the
//! transport, which owns their meaning.

use super::{AttachmentId, MessageId, RecipientId};
use serde::{Deserialize, Serialize};

/// An attachment already held by the attachment store.
///
/// # Examples
///
/// ```
/// use courier::message::domain::{Attachment, AttachmentId};
///
/// let attachment = Attachment::new(AttachmentId::new(), "image/jpeg")
///     .with_file_name("cat.jpg")
///     .with_size(2048);
/// assert_eq!(attachment.content_type, "image/jpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Store identifier of the attachment.
    pub id: AttachmentId,
    /// The MIME type of the attachment.
    pub content_type: String,
    /// Original file name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size in bytes, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl Attachment {
    /// Creates a new attachment reference.
    #[must_use]
    pub fn new(id: AttachmentId, content_type: impl Into<String>) -> Self {
        Self {
            id,
            content_type: content_type.into(),
            file_name: None,
            size_bytes: None,
        }
    }

    /// Sets the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the size in bytes.
    #[must_use]
    pub const fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }
}

/// A reference to a prior message being quoted in a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteReference {
    /// The quoted message.
    pub id: MessageId,
    /// Author of the quoted message.
    pub author: RecipientId,
    /// Quoted text snippet.
    pub text: String,
    /// Whether the quoted message is no longer available locally.
    #[serde(default)]
    pub missing: bool,
}

impl QuoteReference {
    /// Creates a quote reference.
    #[must_use]
    pub fn new(id: MessageId, author: RecipientId, text: impl Into<String>) -> Self {
        Self {
            id,
            author,
            text: text.into(),
            missing: false,
        }
    }
}

/// A contact card shared in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedContact {
    /// Display name of the contact.
    pub display_name: String,
    /// Phone numbers listed on the card.
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    /// Avatar attachment, if the card carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AttachmentId>,
}

/// Metadata for a link preview attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    /// The previewed URL.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Thumbnail attachment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<AttachmentId>,
}

/// A mention of another recipient inside the body text.
///
/// Offsets and lengths are in UTF-16 code units as produced by the
/// composing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// The mentioned recipient.
    pub recipient_id: RecipientId,
    /// Start offset of the mention.
    pub start: u32,
    /// Length of the mention.
    pub length: u32,
}

impl Mention {
    /// Creates a mention record.
    #[must_use]
    pub const fn new(recipient_id: RecipientId, start: u32, length: u32) -> Self {
        Self {
            recipient_id,
            start,
            length,
        }
    }
}

/// A delivery failure recorded against one recipient of a prior attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFailure {
    /// Recipient the delivery failed for.
    pub recipient_id: RecipientId,
}

/// An identity-key mismatch recorded against one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityKeyMismatch {
    /// Recipient whose identity key changed.
    pub recipient_id: RecipientId,
    /// The newly observed identity key, base64 encoded.
    pub identity_key: String,
}
