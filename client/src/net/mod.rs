//! Networking modules for the campaign backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
