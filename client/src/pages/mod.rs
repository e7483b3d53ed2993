//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard for its path, owns route-scoped state,
//! and delegates shared rendering to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod webhook;
