//! Courier: outgoing message envelopes for a messaging client.
//!
//! This crate builds the immutable value objects a client hands to its
//! transport when sending a message, and applies the body tag that records
//! who sent a message and how often it has been re-sent.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for collaborators (tagging, identity)
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Outgoing text and media envelopes and body tagging

pub mod message;
