//! In-memory implementation of the `LocalIdentity` port.
//!
//! Holds the local account's phone number in process. Hosts that keep the
//! registration elsewhere implement the port themselves.

use std::sync::{Arc, RwLock};

use crate::message::ports::identity::LocalIdentity;

/// In-memory implementation of [`LocalIdentity`].
///
/// Clones share the same registration, so updating one handle is visible
/// through all of them. Thread-safe via internal [`RwLock`]; a poisoned
/// lock still yields the last stored value.
///
/// # Example
///
/// ```
/// use courier::message::adapters::memory::StaticLocalIdentity;
/// use courier::message::ports::identity::LocalIdentity;
///
/// let identity = StaticLocalIdentity::unregistered();
/// assert_eq!(identity.phone_number(), None);
///
/// identity.register("+15551234567");
/// assert_eq!(identity.phone_number().as_deref(), Some("+15551234567"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticLocalIdentity {
    phone_number: Arc<RwLock<Option<String>>>,
}

impl StaticLocalIdentity {
    /// Creates an identity with no registered phone number.
    #[must_use]
    pub fn unregistered() -> Self {
        Self::default()
    }

    /// Creates an identity registered under `phone_number`.
    #[must_use]
    pub fn registered(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Arc::new(RwLock::new(Some(phone_number.into()))),
        }
    }

    /// Records the phone number the local account registered with.
    pub fn register(&self, phone_number: impl Into<String>) {
        let mut guard = self
            .phone_number
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(phone_number.into());
    }

    /// Forgets the registered phone number.
    pub fn unregister(&self) {
        let mut guard = self
            .phone_number
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
    }
}

impl LocalIdentity for StaticLocalIdentity {
    fn phone_number(&self) -> Option<String> {
        self.phone_number
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
