//! Tag grammar and the primitive rewrites applied to message bodies.
//!
//! A tag sits at offset zero of a body and reads
//! `+<digits>XXX (<counter>) :`. Everything after the tag, including the
//! newline a fresh tag is followed by, belongs to the original body.

use crate::message::error::TagError;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Literal that replaces the masked tail of the phone number.
pub const MASK: &str = "XXX";

/// Counter written into a freshly synthesised tag.
pub const INITIAL_COUNTER: u64 = 1;

static TAG_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]*XXX \((?P<counter>[0-9]+)\) :"));

fn tag_pattern() -> Result<&'static Regex, TagError> {
    TAG_PATTERN
        .as_ref()
        .map_err(|err| TagError::Pattern(err.to_string()))
}

/// A tag found at the start of a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingTag {
    counter: u64,
    counter_span: Range<usize>,
}

impl ExistingTag {
    /// Returns the parsed counter value.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Returns the byte range of the counter digits within the body.
    #[must_use]
    pub fn counter_span(&self) -> Range<usize> {
        self.counter_span.clone()
    }
}

/// Looks for a tag anchored at the start of `body`.
///
/// # Errors
///
/// Returns [`TagError::InvalidCounter`] when the counter digits do not fit
/// a `u64`.
pub fn find_tag(body: &str) -> Result<Option<ExistingTag>, TagError> {
    let Some(counter) = tag_pattern()?
        .captures(body)
        .and_then(|captures| captures.name("counter"))
    else {
        return Ok(None);
    };

    let value = counter
        .as_str()
        .parse::<u64>()
        .map_err(|source| TagError::invalid_counter(counter.as_str(), source))?;

    Ok(Some(ExistingTag {
        counter: value,
        counter_span: counter.range(),
    }))
}

/// Rewrites the counter of `tag` to its successor, leaving every other byte
/// of `body` as it was.
///
/// # Errors
///
/// Returns [`TagError::CounterOverflow`] if the counter is already `u64::MAX`.
pub fn increment_counter(body: &str, tag: &ExistingTag) -> Result<String, TagError> {
    let next = tag
        .counter
        .checked_add(1)
        .ok_or(TagError::CounterOverflow(tag.counter))?;

    let mut rewritten = body.to_owned();
    rewritten.replace_range(tag.counter_span(), &next.to_string());
    Ok(rewritten)
}

/// Drops the last `masked_chars` characters of `phone_number`.
///
/// # Errors
///
/// Returns [`TagError::PhoneNumberTooShort`] if the number has fewer
/// characters than the mask removes.
pub fn mask_phone_number(phone_number: &str, masked_chars: usize) -> Result<String, TagError> {
    let actual = phone_number.chars().count();
    let kept = actual
        .checked_sub(masked_chars)
        .ok_or(TagError::PhoneNumberTooShort {
            actual,
            required: masked_chars,
        })?;

    Ok(phone_number.chars().take(kept).collect())
}

/// Prepends a fresh tag built from `phone_number` to `body`.
///
/// # Errors
///
/// Propagates [`mask_phone_number`] failures.
pub fn prepend_tag(
    body: &str,
    phone_number: &str,
    masked_chars: usize,
) -> Result<String, TagError> {
    let masked = mask_phone_number(phone_number, masked_chars)?;
    Ok(format!("{masked}{MASK} ({INITIAL_COUNTER}) :\n{body}"))
}
