//! Browser helpers shared by the campaign components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper has a no-op server-side rendition so components can call it
//! unconditionally from event handlers.

pub mod alert;
