//! Behavioural tests for body tagging across envelope kinds.

use courier::message::{
    adapters::memory::StaticLocalIdentity,
    domain::{
        Attachment, AttachmentBundle, AttachmentId, OutgoingMediaMessage, OutgoingTextMessage,
        Recipient, SubscriptionId,
    },
    error::{MessageBuilderError, TagError},
    tagging::service::CounterTagger,
};
use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct TaggingWorld {
    tagger: CounterTagger,
    identity: StaticLocalIdentity,
    text: Option<OutgoingTextMessage>,
    media: Option<OutgoingMediaMessage>,
    last_error: Option<MessageBuilderError>,
}

#[fixture]
fn world() -> TaggingWorld {
    TaggingWorld::default()
}

fn peer() -> Recipient {
    Recipient::with_e164("+15557654321")
}

#[given("a sender registered with a phone number")]
fn registered_sender(world: &mut TaggingWorld) {
    world.identity = StaticLocalIdentity::registered("+15551234567");
}

#[given("a sender without a phone number")]
fn unregistered_sender(world: &mut TaggingWorld) {
    world.identity = StaticLocalIdentity::unregistered();
}

#[given("a sender registered with a two character number")]
fn short_number_sender(world: &mut TaggingWorld) {
    world.identity = StaticLocalIdentity::registered("+1");
}

#[when("the sender composes a text message saying hello")]
fn compose_text(world: &mut TaggingWorld) {
    match OutgoingTextMessage::new(
        peer(),
        "hello",
        SubscriptionId::UNSPECIFIED,
        &world.tagger,
        &world.identity,
    ) {
        Ok(message) => {
            world.text = Some(message);
            world.last_error = None;
        }
        Err(error) => {
            world.text = None;
            world.last_error = Some(error);
        }
    }
}

#[when("the sender resends the message body")]
fn resend_text(world: &mut TaggingWorld) {
    if let Some(message) = &world.text {
        match message.with_body(message.body(), &world.tagger, &world.identity) {
            Ok(resent) => {
                world.text = Some(resent);
                world.last_error = None;
            }
            Err(error) => {
                world.text = None;
                world.last_error = Some(error);
            }
        }
    }
}

#[when("the sender composes a captioned media message")]
fn compose_media(world: &mut TaggingWorld) {
    let bundle = AttachmentBundle::new(
        vec![Attachment::new(AttachmentId::new(), "image/jpeg")],
        "sunset",
    );
    match OutgoingMediaMessage::builder(peer())
        .bundle(bundle)
        .text("from the pier")
        .build(&DefaultClock, &world.tagger, &world.identity)
    {
        Ok(message) => {
            world.media = Some(message);
            world.last_error = None;
        }
        Err(error) => {
            world.media = None;
            world.last_error = Some(error);
        }
    }
}

fn composition_failure(world: &TaggingWorld, expected: &str) -> eyre::Report {
    world.last_error.as_ref().map_or_else(
        || eyre!("expected a composed {expected}"),
        |error| eyre!("composing the {expected} failed: {error}"),
    )
}

fn text_body(world: &TaggingWorld) -> Result<&str> {
    world
        .text
        .as_ref()
        .map(OutgoingTextMessage::body)
        .ok_or_else(|| composition_failure(world, "text message"))
}

#[then("the body starts with a fresh masked tag")]
fn fresh_masked_tag(world: &TaggingWorld) -> Result<()> {
    assert_eq!(text_body(world)?, "+15551234XXX (1) :\nhello");
    Ok(())
}

#[then("the body carries the second counter")]
fn second_counter(world: &TaggingWorld) -> Result<()> {
    assert_eq!(text_body(world)?, "+15551234XXX (2) :\nhello");
    Ok(())
}

#[then("the body is exactly the typed text")]
fn untouched_body(world: &TaggingWorld) -> Result<()> {
    assert_eq!(text_body(world)?, "hello");
    Ok(())
}

#[then("the media body joins caption and text under one tag")]
fn merged_media_body(world: &TaggingWorld) -> Result<()> {
    let media = world
        .media
        .as_ref()
        .ok_or_else(|| composition_failure(world, "media message"))?;

    assert_eq!(media.body(), "+15551234XXX (1) :\nsunset\n\nfrom the pier");
    assert_eq!(media.attachments().len(), 1);
    Ok(())
}

#[then("composing fails because the number is too short to mask")]
fn short_number_failure(world: &TaggingWorld) -> Result<()> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre!("expected a tagging error"))?;

    assert_eq!(
        error,
        &MessageBuilderError::Tagging(TagError::PhoneNumberTooShort {
            actual: 2,
            required: 3,
        })
    );
    assert!(world.text.is_none());
    Ok(())
}

#[scenario(
    path = "tests/features/tagging.feature",
    name = "A registered sender tags a fresh message"
)]
fn fresh_message(world: TaggingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/tagging.feature",
    name = "Resending a tagged message increments the counter"
)]
fn resent_message(world: TaggingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/tagging.feature",
    name = "An unregistered sender leaves the body untouched"
)]
fn unregistered_message(world: TaggingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/tagging.feature",
    name = "A captioned media message is merged before tagging"
)]
fn captioned_media(world: TaggingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/tagging.feature",
    name = "A number shorter than the mask cannot be tagged"
)]
fn short_number_message(world: TaggingWorld) {
    let _ = world;
}
