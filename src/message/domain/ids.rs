//! Identifier newtypes for recipients, messages, attachments and the
//! sending subscription.
//!
//! These types wrap primitive values to prevent accidental mixing of
//! identifiers that share a representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declares a UUID-backed identifier.
///
/// `Default` mints a fresh random identifier, so a defaulted envelope field
/// never aliases another envelope's reference.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $noun:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Mints a random ", $noun, " identifier.")]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Wraps a ", $noun, " identifier issued elsewhere.")]
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Unwraps the UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Opaque handle for a messaging destination, as issued by the contact
    /// store.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier::message::domain::RecipientId;
    ///
    /// let id = RecipientId::new();
    /// assert!(!id.as_ref().is_nil());
    /// ```
    RecipientId,
    "recipient"
);

uuid_identifier!(
    /// Identifier of a previously stored message, used by quote references.
    MessageId,
    "message"
);

uuid_identifier!(
    /// Identifier of an attachment held by the attachment store.
    AttachmentId,
    "attachment"
);

/// Selector for the network identity (SIM slot, account) that sends a message.
///
/// The meaning of the value belongs to the transport; this crate only
/// carries it. [`SubscriptionId::UNSPECIFIED`] leaves the choice to the
/// transport.
///
/// # Examples
///
/// ```
/// use courier::message::domain::SubscriptionId;
///
/// assert_eq!(SubscriptionId::default(), SubscriptionId::UNSPECIFIED);
/// assert_eq!(SubscriptionId::new(2).value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(i32);

impl SubscriptionId {
    /// No subscription preference.
    pub const UNSPECIFIED: Self = Self(-1);

    /// Creates a subscription selector from a raw value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw selector value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` if no subscription was chosen.
    #[must_use]
    pub const fn is_unspecified(self) -> bool {
        self.0 == Self::UNSPECIFIED.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl From<i32> for SubscriptionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
