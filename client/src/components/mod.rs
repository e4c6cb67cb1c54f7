//! Reusable UI component modules.

pub mod top_navbar;
