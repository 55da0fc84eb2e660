//! Outgoing media message envelopes.
//!
//! Media envelopes carry attachments and the reference lists the transport
//! needs alongside a body assembled from an attachment caption and the
//! user's text.

use super::{
    Attachment, IdentityKeyMismatch, LinkPreview, Mention, NetworkFailure, QuoteReference,
    Recipient, SharedContact, SubscriptionId,
};
use crate::message::{
    error::MessageBuilderError,
    ports::{identity::LocalIdentity, tagger::BodyTagger},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Joins an attachment caption and the user's text into one body.
///
/// # Examples
///
/// ```
/// use courier::message::domain::merge_caption;
///
/// assert_eq!(merge_caption("cap", "msg"), "cap\n\nmsg");
/// assert_eq!(merge_caption("", "msg"), "msg");
/// assert_eq!(merge_caption("cap", ""), "cap");
/// assert_eq!(merge_caption("", ""), "");
/// ```
#[must_use]
pub fn merge_caption(caption: &str, user_text: &str) -> String {
    match (caption.is_empty(), user_text.is_empty()) {
        (false, false) => format!("{caption}\n\n{user_text}"),
        (false, true) => caption.to_owned(),
        (true, _) => user_text.to_owned(),
    }
}

/// A group of attachments composed together, with an optional caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentBundle {
    caption: String,
    attachments: Vec<Attachment>,
}

impl AttachmentBundle {
    /// Creates a bundle from its attachments and caption.
    #[must_use]
    pub fn new(attachments: Vec<Attachment>, caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            attachments,
        }
    }

    /// Returns the caption, empty when none was given.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Returns the attachments in composition order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Consumes the bundle, yielding its attachments.
    #[must_use]
    pub fn into_attachments(self) -> Vec<Attachment> {
        self.attachments
    }
}

/// A media message about to be sent.
///
/// # Invariants
///
/// - The body was tagged exactly once, when it was first assembled; copies
///   and bodies supplied through [`MediaMessageBuilder::tagged_body`] are
///   kept verbatim
/// - Every sequence is owned by the message; callers keep no live handle
/// - Messages cannot be modified after creation
///
/// # Examples
///
/// ```
/// use courier::message::adapters::memory::StaticLocalIdentity;
/// use courier::message::domain::{
///     Attachment, AttachmentBundle, AttachmentId, OutgoingMediaMessage, Recipient,
/// };
/// use courier::message::tagging::service::CounterTagger;
/// use mockable::DefaultClock;
///
/// let bundle = AttachmentBundle::new(
///     vec![Attachment::new(AttachmentId::new(), "image/png")],
///     "sunset",
/// );
///
/// let message = OutgoingMediaMessage::builder(Recipient::with_e164("+15550000000"))
///     .bundle(bundle)
///     .text("look at this")
///     .build(&DefaultClock, &CounterTagger::new(), &StaticLocalIdentity::unregistered())
///     .expect("taggable body");
///
/// assert_eq!(message.body(), "sunset\n\nlook at this");
/// assert_eq!(message.attachments().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMediaMessage {
    recipient: Recipient,
    body: String,
    attachments: Vec<Attachment>,
    sent_at: DateTime<Utc>,
    distribution_type: i32,
    subscription_id: SubscriptionId,
    expires_in: Duration,
    view_once: bool,
    outgoing_quote: Option<QuoteReference>,
    shared_contacts: Vec<SharedContact>,
    link_previews: Vec<LinkPreview>,
    mentions: Vec<Mention>,
    network_failures: Vec<NetworkFailure>,
    identity_key_mismatches: Vec<IdentityKeyMismatch>,
    secure: bool,
    group: bool,
    expiration_update: bool,
}

impl OutgoingMediaMessage {
    /// Returns a builder for constructing media messages.
    #[must_use]
    pub fn builder(recipient: Recipient) -> MediaMessageBuilder {
        MediaMessageBuilder::new(recipient)
    }

    /// Returns a copy with a different expiry. The body is neither
    /// re-merged nor re-tagged.
    #[must_use]
    pub fn with_expires_in(&self, expires_in: Duration) -> Self {
        Self {
            expires_in,
            ..self.clone()
        }
    }

    /// Returns a copy marked as a secure variant. The body is kept verbatim.
    #[must_use]
    pub fn with_secure(&self, secure: bool) -> Self {
        Self {
            secure,
            ..self.clone()
        }
    }

    /// Returns a copy marked as a group variant. The body is kept verbatim.
    #[must_use]
    pub fn with_group(&self, group: bool) -> Self {
        Self {
            group,
            ..self.clone()
        }
    }

    /// Returns a copy marked as an expiration timer update. The body is kept
    /// verbatim.
    #[must_use]
    pub fn with_expiration_update(&self, expiration_update: bool) -> Self {
        Self {
            expiration_update,
            ..self.clone()
        }
    }

    /// Returns the recipient.
    #[must_use]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the tagged body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the attachments in composition order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the time the message was stamped as sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Returns the sent timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub fn sent_time_millis(&self) -> i64 {
        self.sent_at.timestamp_millis()
    }

    /// Returns the fan-out tag chosen by the conversation.
    #[must_use]
    pub const fn distribution_type(&self) -> i32 {
        self.distribution_type
    }

    /// Returns the subscription selector.
    #[must_use]
    pub const fn subscription_id(&self) -> SubscriptionId {
        self.subscription_id
    }

    /// Returns the disappearing-message timer. Zero disables expiry.
    #[must_use]
    pub const fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Returns `true` if the attachments may only be viewed once.
    #[must_use]
    pub const fn is_view_once(&self) -> bool {
        self.view_once
    }

    /// Returns the quoted message, if this is a reply.
    #[must_use]
    pub const fn outgoing_quote(&self) -> Option<&QuoteReference> {
        self.outgoing_quote.as_ref()
    }

    /// Returns the shared contact cards.
    #[must_use]
    pub fn shared_contacts(&self) -> &[SharedContact] {
        &self.shared_contacts
    }

    /// Returns the link previews.
    #[must_use]
    pub fn link_previews(&self) -> &[LinkPreview] {
        &self.link_previews
    }

    /// Returns the mentions.
    #[must_use]
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    /// Returns delivery failures recorded by earlier attempts.
    #[must_use]
    pub fn network_failures(&self) -> &[NetworkFailure] {
        &self.network_failures
    }

    /// Returns identity-key mismatches recorded by earlier attempts.
    #[must_use]
    pub fn identity_key_mismatches(&self) -> &[IdentityKeyMismatch] {
        &self.identity_key_mismatches
    }

    /// Returns `true` for secure media variants.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns `true` for group media variants.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.group
    }

    /// Returns `true` for expiration timer updates.
    #[must_use]
    pub const fn is_expiration_update(&self) -> bool {
        self.expiration_update
    }
}

/// Where a media body comes from.
#[derive(Debug)]
enum BodySource {
    Caption,
    Raw(String),
    Tagged(String),
}

/// Builder for outgoing media messages.
///
/// The body is assembled from the bundle caption and the user text with
/// [`merge_caption`], or taken from [`MediaMessageBuilder::body`] when set,
/// and tagged once by [`MediaMessageBuilder::build`]. A body supplied with
/// [`MediaMessageBuilder::tagged_body`] skips the tagger.
#[derive(Debug)]
pub struct MediaMessageBuilder {
    recipient: Recipient,
    body: BodySource,
    caption: String,
    text: String,
    attachments: Vec<Attachment>,
    sent_at: Option<DateTime<Utc>>,
    distribution_type: i32,
    subscription_id: SubscriptionId,
    expires_in: Duration,
    view_once: bool,
    outgoing_quote: Option<QuoteReference>,
    shared_contacts: Vec<SharedContact>,
    link_previews: Vec<LinkPreview>,
    mentions: Vec<Mention>,
    network_failures: Vec<NetworkFailure>,
    identity_key_mismatches: Vec<IdentityKeyMismatch>,
    secure: bool,
    group: bool,
    expiration_update: bool,
}

impl MediaMessageBuilder {
    /// Creates a builder for an empty, non-expiring media message.
    #[must_use]
    pub fn new(recipient: Recipient) -> Self {
        Self {
            recipient,
            body: BodySource::Caption,
            caption: String::new(),
            text: String::new(),
            attachments: Vec::new(),
            sent_at: None,
            distribution_type: 0,
            subscription_id: SubscriptionId::UNSPECIFIED,
            expires_in: Duration::ZERO,
            view_once: false,
            outgoing_quote: None,
            shared_contacts: Vec::new(),
            link_previews: Vec::new(),
            mentions: Vec::new(),
            network_failures: Vec::new(),
            identity_key_mismatches: Vec::new(),
            secure: false,
            group: false,
            expiration_update: false,
        }
    }

    /// Takes the caption and attachments of a composed bundle.
    #[must_use]
    pub fn bundle(mut self, bundle: AttachmentBundle) -> Self {
        self.caption = bundle.caption;
        self.attachments = bundle.attachments;
        self
    }

    /// Sets the text typed by the user.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets an already assembled body, bypassing caption merging.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = BodySource::Raw(body.into());
        self
    }

    /// Sets a body that has already been tagged, such as the body of an
    /// existing message. It bypasses caption merging and is not tagged
    /// again.
    #[must_use]
    pub fn tagged_body(mut self, body: impl Into<String>) -> Self {
        self.body = BodySource::Tagged(body.into());
        self
    }

    /// Sets the attachments.
    #[must_use]
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Sets an explicit sent timestamp instead of reading the clock.
    #[must_use]
    pub const fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    /// Sets the fan-out tag.
    #[must_use]
    pub const fn distribution_type(mut self, distribution_type: i32) -> Self {
        self.distribution_type = distribution_type;
        self
    }

    /// Sets the subscription selector.
    #[must_use]
    pub const fn subscription_id(mut self, subscription_id: SubscriptionId) -> Self {
        self.subscription_id = subscription_id;
        self
    }

    /// Sets the disappearing-message timer.
    #[must_use]
    pub const fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Marks the attachments as view-once.
    #[must_use]
    pub const fn view_once(mut self, view_once: bool) -> Self {
        self.view_once = view_once;
        self
    }

    /// Sets the quoted message.
    #[must_use]
    pub fn quote(mut self, quote: QuoteReference) -> Self {
        self.outgoing_quote = Some(quote);
        self
    }

    /// Sets the shared contact cards.
    #[must_use]
    pub fn shared_contacts(mut self, contacts: impl IntoIterator<Item = SharedContact>) -> Self {
        self.shared_contacts = contacts.into_iter().collect();
        self
    }

    /// Sets the link previews.
    #[must_use]
    pub fn link_previews(mut self, previews: impl IntoIterator<Item = LinkPreview>) -> Self {
        self.link_previews = previews.into_iter().collect();
        self
    }

    /// Sets the mentions.
    #[must_use]
    pub fn mentions(mut self, mentions: impl IntoIterator<Item = Mention>) -> Self {
        self.mentions = mentions.into_iter().collect();
        self
    }

    /// Sets the delivery failures of earlier attempts.
    #[must_use]
    pub fn network_failures(mut self, failures: impl IntoIterator<Item = NetworkFailure>) -> Self {
        self.network_failures = failures.into_iter().collect();
        self
    }

    /// Sets the identity-key mismatches of earlier attempts.
    #[must_use]
    pub fn identity_key_mismatches(
        mut self,
        mismatches: impl IntoIterator<Item = IdentityKeyMismatch>,
    ) -> Self {
        self.identity_key_mismatches = mismatches.into_iter().collect();
        self
    }

    /// Marks the message as a secure variant.
    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Marks the message as a group variant.
    #[must_use]
    pub const fn group(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    /// Marks the message as an expiration timer update.
    #[must_use]
    pub const fn expiration_update(mut self, expiration_update: bool) -> Self {
        self.expiration_update = expiration_update;
        self
    }

    /// Assembles and tags the body, stamps the sent time and builds the
    /// message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::Tagging`] if the body cannot be tagged.
    pub fn build(
        self,
        clock: &impl Clock,
        tagger: &impl BodyTagger,
        identity: &impl LocalIdentity,
    ) -> Result<OutgoingMediaMessage, MessageBuilderError> {
        let body = match self.body {
            BodySource::Tagged(body) => body,
            BodySource::Raw(raw_body) => {
                tagger.tag(&raw_body, identity.phone_number().as_deref())?
            }
            BodySource::Caption => {
                let raw_body = merge_caption(&self.caption, &self.text);
                tagger.tag(&raw_body, identity.phone_number().as_deref())?
            }
        };

        Ok(OutgoingMediaMessage {
            recipient: self.recipient,
            body,
            attachments: self.attachments,
            sent_at: self.sent_at.unwrap_or_else(|| clock.utc()),
            distribution_type: self.distribution_type,
            subscription_id: self.subscription_id,
            expires_in: self.expires_in,
            view_once: self.view_once,
            outgoing_quote: self.outgoing_quote,
            shared_contacts: self.shared_contacts,
            link_previews: self.link_previews,
            mentions: self.mentions,
            network_failures: self.network_failures,
            identity_key_mismatches: self.identity_key_mismatches,
            secure: self.secure,
            group: self.group,
            expiration_update: self.expiration_update,
        })
    }
}
