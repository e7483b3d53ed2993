//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and forms while reading/writing shared
//! state from Leptos context providers.

pub mod credential_form;
pub mod nav_bar;
