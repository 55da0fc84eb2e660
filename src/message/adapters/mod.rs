//! Adapters for the message module's ports.
//!
//! # Available Adapters
//!
//! - [`memory::StaticLocalIdentity`]: in-process [`LocalIdentity`] holding
//!   the local account's phone number
//!
//! The default [`BodyTagger`] lives in [`crate::message::tagging`].
//!
//! [`LocalIdentity`]: crate::message::ports::identity::LocalIdentity
//! [`BodyTagger`]: crate::message::ports::tagger::BodyTagger

pub mod memory;
