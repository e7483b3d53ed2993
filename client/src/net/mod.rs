//! Networking modules for the remote auth/monitor API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies failures, and `types` defines
//! the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
