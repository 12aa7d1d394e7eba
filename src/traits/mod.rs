//! Trait definitions for scripture API requests.
//!
//! Each request type implements [`Endpoint`], keeping URL construction
//! separate from the transport.

mod endpoint;

pub use endpoint::Endpoint;
