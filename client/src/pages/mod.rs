//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard for its own route and renders only once
//! the guard allows it.

pub mod home;
pub mod login;
pub mod profile;
