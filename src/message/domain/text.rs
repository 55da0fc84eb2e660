//! Outgoing text message envelopes.
//!
//! A text envelope is one of a closed set of kinds sharing recipient, body,
//! expiry and subscription fields. The body is tagged whenever it is
//! supplied as raw text and reused verbatim otherwise.

use super::{Recipient, SubscriptionId};
use crate::message::{
    error::MessageBuilderError,
    ports::{identity::LocalIdentity, tagger::BodyTagger},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The behaviour an outgoing text message represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMessageKind {
    /// Unencrypted text.
    #[default]
    Plain,
    /// End-to-end encrypted text.
    Encrypted,
    /// A key exchange message.
    KeyExchange,
    /// Terminates the current secure session.
    EndSession,
    /// Carries a pre-key bundle for session setup.
    PreKeyBundle,
}

impl TextMessageKind {
    /// Returns `true` for encrypted messages.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Encrypted)
    }

    /// Returns `true` for key exchange messages.
    #[must_use]
    pub const fn is_key_exchange(self) -> bool {
        matches!(self, Self::KeyExchange)
    }

    /// Returns `true` for end-session messages.
    #[must_use]
    pub const fn is_end_session(self) -> bool {
        matches!(self, Self::EndSession)
    }

    /// Returns `true` for pre-key bundle messages.
    #[must_use]
    pub const fn is_pre_key_bundle(self) -> bool {
        matches!(self, Self::PreKeyBundle)
    }
}

/// A text message about to be sent.
///
/// # Invariants
///
/// - `kind` is fixed at construction and determines the capability flags
/// - `body` has been through the tagger exactly once since it was last
///   supplied as raw text
/// - Messages cannot be modified after creation; `with_*` methods return
///   new values
///
/// # Examples
///
/// ```
/// use courier::message::adapters::memory::StaticLocalIdentity;
/// use courier::message::domain::{OutgoingTextMessage, Recipient, SubscriptionId};
/// use courier::message::tagging::service::CounterTagger;
///
/// let tagger = CounterTagger::new();
/// let identity = StaticLocalIdentity::registered("+15551234567");
///
/// let message = OutgoingTextMessage::new(
///     Recipient::with_e164("+15550000000"),
///     "hello",
///     SubscriptionId::UNSPECIFIED,
///     &tagger,
///     &identity,
/// )
/// .expect("taggable body");
///
/// assert_eq!(message.body(), "+15551234XXX (1) :\nhello");
/// assert!(!message.is_secure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    recipient: Recipient,
    body: String,
    subscription_id: SubscriptionId,
    expires_in: Duration,
    kind: TextMessageKind,
}

impl OutgoingTextMessage {
    /// Creates a plain message that never expires.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::Tagging`] if the body cannot be tagged.
    pub fn new(
        recipient: Recipient,
        body: impl Into<String>,
        subscription_id: SubscriptionId,
        tagger: &impl BodyTagger,
        identity: &impl LocalIdentity,
    ) -> Result<Self, MessageBuilderError> {
        Self::builder(recipient)
            .body(body)
            .subscription_id(subscription_id)
            .build(tagger, identity)
    }

    /// Returns a builder for constructing messages of any kind.
    #[must_use]
    pub fn builder(recipient: Recipient) -> TextMessageBuilder {
        TextMessageBuilder::new(recipient)
    }

    /// Rebuilds a message from a stored record.
    ///
    /// Flags are checked in priority order: secure, key exchange, end
    /// session, then plain. The first set flag wins. Only plain messages
    /// keep the record's subscription; key exchange and end-session
    /// messages never expire.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::Tagging`] if the body cannot be tagged.
    pub fn from_record(
        record: &TextMessageRecord,
        tagger: &impl BodyTagger,
        identity: &impl LocalIdentity,
    ) -> Result<Self, MessageBuilderError> {
        let base = Self::builder(record.recipient.clone()).body(record.body.clone());

        let builder = if record.secure {
            base.kind(TextMessageKind::Encrypted)
                .expires_in(record.expires_in)
        } else if record.key_exchange {
            base.kind(TextMessageKind::KeyExchange)
        } else if record.end_session {
            base.kind(TextMessageKind::EndSession)
        } else {
            base.expires_in(record.expires_in)
                .subscription_id(record.subscription_id)
        };

        builder.build(tagger, identity)
    }

    /// Returns a message of the same kind, recipient, subscription and
    /// expiry carrying `body`, tagged afresh.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::Tagging`] if the body cannot be tagged.
    pub fn with_body(
        &self,
        body: impl Into<String>,
        tagger: &impl BodyTagger,
        identity: &impl LocalIdentity,
    ) -> Result<Self, MessageBuilderError> {
        Self::builder(self.recipient.clone())
            .kind(self.kind)
            .body(body)
            .expires_in(self.expires_in)
            .subscription_id(self.subscription_id)
            .build(tagger, identity)
    }

    /// Returns a copy with a different expiry. The body is not re-tagged.
    #[must_use]
    pub fn with_expires_in(&self, expires_in: Duration) -> Self {
        Self {
            expires_in,
            ..self.clone()
        }
    }

    /// Rewraps this message as another kind. The body is not re-tagged.
    #[must_use]
    pub fn into_kind(self, kind: TextMessageKind) -> Self {
        Self { kind, ..self }
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

    /// Returns the message kind.
    #[must_use]
    pub const fn kind(&self) -> TextMessageKind {
        self.kind
    }

    /// Returns `true` for encrypted messages.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.kind.is_secure()
    }

    /// Returns `true` for key exchange messages.
    #[must_use]
    pub const fn is_key_exchange(&self) -> bool {
        self.kind.is_key_exchange()
    }

    /// Returns `true` for end-session messages.
    #[must_use]
    pub const fn is_end_session(&self) -> bool {
        self.kind.is_end_session()
    }

    /// Returns `true` for pre-key bundle messages.
    #[must_use]
    pub const fn is_pre_key_bundle(&self) -> bool {
        self.kind.is_pre_key_bundle()
    }

    /// Always `false`; identity verification notices are not text envelopes.
    #[must_use]
    pub const fn is_identity_verified(&self) -> bool {
        false
    }

    /// Always `false`; identity reset notices are not text envelopes.
    #[must_use]
    pub const fn is_identity_default(&self) -> bool {
        false
    }
}

/// Builder for outgoing text messages.
#[derive(Debug)]
pub struct TextMessageBuilder {
    recipient: Recipient,
    body: String,
    subscription_id: SubscriptionId,
    expires_in: Duration,
    kind: TextMessageKind,
}

impl TextMessageBuilder {
    /// Creates a builder for a plain, non-expiring, empty message.
    #[must_use]
    pub fn new(recipient: Recipient) -> Self {
        Self {
            recipient,
            body: String::new(),
            subscription_id: SubscriptionId::UNSPECIFIED,
            expires_in: Duration::ZERO,
            kind: TextMessageKind::Plain,
        }
    }

    /// Sets the raw body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the message kind.
    #[must_use]
    pub const fn kind(mut self, kind: TextMessageKind) -> Self {
        self.kind = kind;
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

    /// Tags the body and builds the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::Tagging`] if the body cannot be tagged.
    pub fn build(
        self,
        tagger: &impl BodyTagger,
        identity: &impl LocalIdentity,
    ) -> Result<OutgoingTextMessage, MessageBuilderError> {
        let self_phone_number = identity.phone_number();
        let body = tagger.tag(&self.body, self_phone_number.as_deref())?;

        Ok(OutgoingTextMessage {
            recipient: self.recipient,
            body,
            subscription_id: self.subscription_id,
            expires_in: self.expires_in,
            kind: self.kind,
        })
    }
}

/// A stored SMS-style record an outgoing text message can be rebuilt from.
///
/// The flags are expected to be mutually exclusive; this type does not
/// enforce it.
///
/// # Examples
///
/// ```
/// use courier::message::domain::{Recipient, TextMessageRecord};
///
/// let record = TextMessageRecord::new(Recipient::with_e164("+15550000000"), "hi")
///     .with_secure(true);
/// assert!(record.secure);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessageRecord {
    /// Destination of the stored message.
    pub recipient: Recipient,
    /// Stored body text.
    pub body: String,
    /// Stored disappearing-message timer.
    pub expires_in: Duration,
    /// Stored subscription selector.
    pub subscription_id: SubscriptionId,
    /// The record was sent encrypted.
    pub secure: bool,
    /// The record is a key exchange.
    pub key_exchange: bool,
    /// The record ended a secure session.
    pub end_session: bool,
}

impl TextMessageRecord {
    /// Creates a plain, non-expiring record.
    #[must_use]
    pub fn new(recipient: Recipient, body: impl Into<String>) -> Self {
        Self {
            recipient,
            body: body.into(),
            expires_in: Duration::ZERO,
            subscription_id: SubscriptionId::UNSPECIFIED,
            secure: false,
            key_exchange: false,
            end_session: false,
        }
    }

    /// Sets the stored expiry.
    #[must_use]
    pub const fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Sets the stored subscription selector.
    #[must_use]
    pub const fn with_subscription_id(mut self, subscription_id: SubscriptionId) -> Self {
        self.subscription_id = subscription_id;
        self
    }

    /// Marks the record as encrypted.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Marks the record as a key exchange.
    #[must_use]
    pub const fn with_key_exchange(mut self, key_exchange: bool) -> Self {
        self.key_exchange = key_exchange;
        self
    }

    /// Marks the record as ending a session.
    #[must_use]
    pub const fn with_end_session(mut self, end_session: bool) -> Self {
        self.end_session = end_session;
        self
    }
}
