//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session core's `AuthApi` over the browser's fetch.

pub mod api;
