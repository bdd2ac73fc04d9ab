//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`, `data`, `toast`) so each
//! provider owns one small model and components depend only on what they read.

pub mod auth;
pub mod data;
pub mod theme;
pub mod toast;
