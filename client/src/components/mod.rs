//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome while reading/writing shared state from
//! Leptos context providers.

pub mod loading;
pub mod sidebar;
pub mod student_layout;
pub mod toast_host;
