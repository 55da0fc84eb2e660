//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that envelope construction requires
//! from its collaborators. Adapters implement these ports to connect the
//! domain to the host application's identity store and tagging policy.

pub mod identity;
pub mod tagger;

pub use identity::LocalIdentity;
pub use tagger::{BodyTagger, TagResult, TaggingConfig};
