//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing rules and input checks out of page and
//! component code so they can be tested without a browser.

pub mod email;
pub mod guard;
