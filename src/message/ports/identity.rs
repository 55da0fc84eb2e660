//! Local identity port.
//!
//! The phone number of the account sending a message comes from a
//! process-wide lookup owned by the host application. Envelope
//! constructors take it through this port rather than reaching for a global.

/// Port for resolving the locally-owned identity.
pub trait LocalIdentity: Send + Sync {
    /// Returns the E.164 phone number of the local account, if registered.
    fn phone_number(&self) -> Option<String>;
}
