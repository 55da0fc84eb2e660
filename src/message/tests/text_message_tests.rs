//! Unit tests for outgoing text messages.

#![expect(
    clippy::too_many_arguments,
    reason = "rstest case expansion creates many parameters from #[case] attributes"
)]

use crate::message::{
    adapters::memory::StaticLocalIdentity,
    domain::{OutgoingTextMessage, Recipient, SubscriptionId, TextMessageKind, TextMessageRecord},
    error::{MessageBuilderError, TagError},
    ports::identity::LocalIdentity,
    tagging::service::CounterTagger,
};
use mockall::mock;
use rstest::{fixture, rstest};
use std::time::Duration;

mock! {
    Identity {}

    impl LocalIdentity for Identity {
        fn phone_number(&self) -> Option<String>;
    }
}

#[fixture]
fn tagger() -> CounterTagger {
    CounterTagger::new()
}

#[fixture]
fn identity() -> StaticLocalIdentity {
    StaticLocalIdentity::registered("+15551234567")
}

#[fixture]
fn recipient() -> Recipient {
    Recipient::with_e164("+15557654321")
}

// ============================================================================
// Construction
// ============================================================================

#[rstest]
fn new_tags_body_and_defaults_to_plain(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let message = OutgoingTextMessage::new(
        recipient.clone(),
        "hello",
        SubscriptionId::new(1),
        &tagger,
        &identity,
    )
    .expect("taggable body");

    assert_eq!(message.body(), "+15551234XXX (1) :\nhello");
    assert_eq!(message.recipient(), &recipient);
    assert_eq!(message.subscription_id(), SubscriptionId::new(1));
    assert_eq!(message.expires_in(), Duration::ZERO);
    assert_eq!(message.kind(), TextMessageKind::Plain);
}

#[rstest]
fn new_without_registered_number_leaves_body_untagged(tagger: CounterTagger, recipient: Recipient) {
    let message = OutgoingTextMessage::new(
        recipient,
        "hello",
        SubscriptionId::UNSPECIFIED,
        &tagger,
        &StaticLocalIdentity::unregistered(),
    )
    .expect("taggable body");

    assert_eq!(message.body(), "hello");
}

#[rstest]
fn builder_sets_every_field(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let message = OutgoingTextMessage::builder(recipient)
        .kind(TextMessageKind::Encrypted)
        .body("secret")
        .expires_in(Duration::from_secs(30))
        .subscription_id(SubscriptionId::new(2))
        .build(&tagger, &identity)
        .expect("taggable body");

    assert_eq!(message.kind(), TextMessageKind::Encrypted);
    assert_eq!(message.body(), "+15551234XXX (1) :\nsecret");
    assert_eq!(message.expires_in(), Duration::from_secs(30));
    assert_eq!(message.subscription_id(), SubscriptionId::new(2));
}

#[rstest]
fn construction_surfaces_tagging_failure(tagger: CounterTagger, recipient: Recipient) {
    let err = OutgoingTextMessage::new(
        recipient,
        "hello",
        SubscriptionId::UNSPECIFIED,
        &tagger,
        &StaticLocalIdentity::registered("+1"),
    )
    .expect_err("number too short to mask");

    assert_eq!(
        err,
        MessageBuilderError::Tagging(TagError::PhoneNumberTooShort {
            actual: 2,
            required: 3,
        })
    );
}

#[rstest]
fn build_reads_local_identity_once(tagger: CounterTagger, recipient: Recipient) {
    let mut identity = MockIdentity::new();
    identity
        .expect_phone_number()
        .times(1)
        .returning(|| Some("+4420712345".to_owned()));

    let message = OutgoingTextMessage::new(
        recipient,
        "hi",
        SubscriptionId::UNSPECIFIED,
        &tagger,
        &identity,
    )
    .expect("taggable body");

    assert_eq!(message.body(), "+4420712XXX (1) :\nhi");
}

// ============================================================================
// Kind capabilities
// ============================================================================

#[rstest]
#[case(TextMessageKind::Plain, false, false, false, false)]
#[case(TextMessageKind::Encrypted, true, false, false, false)]
#[case(TextMessageKind::KeyExchange, false, true, false, false)]
#[case(TextMessageKind::EndSession, false, false, true, false)]
#[case(TextMessageKind::PreKeyBundle, false, false, false, true)]
fn kind_determines_capability_flags(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
    #[case] kind: TextMessageKind,
    #[case] is_secure: bool,
    #[case] is_key_exchange: bool,
    #[case] is_end_session: bool,
    #[case] is_pre_key_bundle: bool,
) {
    let message = OutgoingTextMessage::builder(recipient)
        .kind(kind)
        .body("x")
        .build(&tagger, &identity)
        .expect("taggable body");

    assert_eq!(message.is_secure(), is_secure);
    assert_eq!(message.is_key_exchange(), is_key_exchange);
    assert_eq!(message.is_end_session(), is_end_session);
    assert_eq!(message.is_pre_key_bundle(), is_pre_key_bundle);
    assert!(!message.is_identity_verified());
    assert!(!message.is_identity_default());
}

#[rstest]
fn kind_serialises_as_snake_case() {
    let json = serde_json::to_string(&TextMessageKind::PreKeyBundle).expect("serialisable");
    assert_eq!(json, "\"pre_key_bundle\"");
}

// ============================================================================
// from_record
// ============================================================================

fn record(recipient: Recipient) -> TextMessageRecord {
    TextMessageRecord::new(recipient, "stored")
        .with_expires_in(Duration::from_secs(60))
        .with_subscription_id(SubscriptionId::new(3))
}

#[rstest]
#[case(true, false, false, TextMessageKind::Encrypted, 60, -1)]
#[case(false, true, false, TextMessageKind::KeyExchange, 0, -1)]
#[case(false, false, true, TextMessageKind::EndSession, 0, -1)]
#[case(false, false, false, TextMessageKind::Plain, 60, 3)]
#[case(true, true, false, TextMessageKind::Encrypted, 60, -1)]
#[case(true, true, true, TextMessageKind::Encrypted, 60, -1)]
#[case(false, true, true, TextMessageKind::KeyExchange, 0, -1)]
fn from_record_selects_kind_by_priority(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
    #[case] secure: bool,
    #[case] key_exchange: bool,
    #[case] end_session: bool,
    #[case] expected_kind: TextMessageKind,
    #[case] expected_expiry_secs: u64,
    #[case] expected_subscription: i32,
) {
    let stored = record(recipient.clone())
        .with_secure(secure)
        .with_key_exchange(key_exchange)
        .with_end_session(end_session);

    let message =
        OutgoingTextMessage::from_record(&stored, &tagger, &identity).expect("taggable body");

    assert_eq!(message.kind(), expected_kind);
    assert_eq!(
        message.expires_in(),
        Duration::from_secs(expected_expiry_secs)
    );
    assert_eq!(
        message.subscription_id(),
        SubscriptionId::new(expected_subscription)
    );
    assert_eq!(message.recipient(), &recipient);
    assert_eq!(message.body(), "+15551234XXX (1) :\nstored");
}

#[rstest]
fn from_record_increments_stored_tag(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let stored = TextMessageRecord::new(recipient, "+15551234XXX (1) :\nagain");

    let message =
        OutgoingTextMessage::from_record(&stored, &tagger, &identity).expect("taggable body");

    assert_eq!(message.body(), "+15551234XXX (2) :\nagain");
}

// ============================================================================
// Copies
// ============================================================================

#[rstest]
fn with_body_retags_and_keeps_envelope(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let original = OutgoingTextMessage::builder(recipient)
        .kind(TextMessageKind::KeyExchange)
        .body("first")
        .expires_in(Duration::from_secs(5))
        .subscription_id(SubscriptionId::new(7))
        .build(&tagger, &identity)
        .expect("taggable body");

    let replaced = original
        .with_body("second", &tagger, &identity)
        .expect("taggable body");

    assert_eq!(replaced.body(), "+15551234XXX (1) :\nsecond");
    assert_eq!(replaced.kind(), original.kind());
    assert_eq!(replaced.recipient(), original.recipient());
    assert_eq!(replaced.expires_in(), original.expires_in());
    assert_eq!(replaced.subscription_id(), original.subscription_id());
    assert_eq!(original.body(), "+15551234XXX (1) :\nfirst");
}

#[rstest]
fn with_body_of_own_body_increments_counter(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let original =
        OutgoingTextMessage::new(recipient, "hi", SubscriptionId::UNSPECIFIED, &tagger, &identity)
            .expect("taggable body");

    let resent = original
        .with_body(original.body(), &tagger, &identity)
        .expect("taggable body");

    assert_eq!(resent.body(), "+15551234XXX (2) :\nhi");
}

#[rstest]
fn with_expires_in_changes_only_expiry(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let original = OutgoingTextMessage::builder(recipient)
        .kind(TextMessageKind::Encrypted)
        .body("hi")
        .subscription_id(SubscriptionId::new(4))
        .build(&tagger, &identity)
        .expect("taggable body");

    let expiring = original.with_expires_in(Duration::from_secs(3600));

    assert_eq!(expiring.expires_in(), Duration::from_secs(3600));
    assert_eq!(expiring.body(), original.body());
    assert_eq!(expiring.kind(), original.kind());
    assert_eq!(expiring.recipient(), original.recipient());
    assert_eq!(expiring.subscription_id(), original.subscription_id());
    assert_eq!(expiring.with_expires_in(Duration::ZERO), original);
}

#[rstest]
fn into_kind_keeps_body_verbatim(
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    recipient: Recipient,
) {
    let base =
        OutgoingTextMessage::new(recipient, "bye", SubscriptionId::UNSPECIFIED, &tagger, &identity)
            .expect("taggable body");
    let body = base.body().to_owned();

    let end_session = base.into_kind(TextMessageKind::EndSession);

    assert!(end_session.is_end_session());
    assert_eq!(end_session.body(), body);
}
