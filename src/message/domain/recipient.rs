//! Recipient handle for outgoing messages.

use super::RecipientId;
use crate::message::ports::identity::LocalIdentity;
use serde::{Deserialize, Serialize};

/// Opaque handle to a messaging destination.
///
/// Resolution of the handle (contacts, groups, profile data) happens
/// elsewhere; envelopes only carry it to the transport. The E.164 phone
/// number is present when the destination is known by number, which is
/// always the case for the locally-owned identity.
///
/// # Examples
///
/// ```
/// use courier::message::domain::Recipient;
///
/// let me = Recipient::with_e164("+15551234567");
/// assert_eq!(me.e164(), Some("+15551234567"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient {
    id: RecipientId,
    e164: Option<String>,
}

impl Recipient {
    /// Creates a recipient without a known phone number.
    #[must_use]
    pub const fn new(id: RecipientId) -> Self {
        Self { id, e164: None }
    }

    /// Creates a recipient with a fresh identifier and the given phone number.
    #[must_use]
    pub fn with_e164(e164: impl Into<String>) -> Self {
        Self {
            id: RecipientId::new(),
            e164: Some(e164.into()),
        }
    }

    /// Creates a recipient from an identifier and an optional phone number.
    #[must_use]
    pub const fn from_parts(id: RecipientId, e164: Option<String>) -> Self {
        Self { id, e164 }
    }

    /// Returns the recipient identifier.
    #[must_use]
    pub const fn id(&self) -> RecipientId {
        self.id
    }

    /// Returns the E.164 phone number, if known.
    #[must_use]
    pub fn e164(&self) -> Option<&str> {
        self.e164.as_deref()
    }
}

/// A recipient handle for the local account can stand in for the identity
/// lookup directly.
impl LocalIdentity for Recipient {
    fn phone_number(&self) -> Option<String> {
        self.e164.clone()
    }
}
