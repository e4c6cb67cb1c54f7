//! Client-side state adapters.
//!
//! DESIGN
//! ======
//! The session state itself is defined in `cerebrum::store`; this module only
//! binds it to Leptos signals so reducers and actions run unchanged.

pub mod session;
