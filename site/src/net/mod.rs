//! Networking for the registration submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the outbound POST and `types` defines its JSON body.

pub mod api;
pub mod types;
