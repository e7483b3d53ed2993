//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `form`, `posts`, `webhook`) so each
//! page depends on a small focused model.

pub mod form;
pub mod posts;
pub mod session;
pub mod webhook;
