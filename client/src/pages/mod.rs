//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Student pages render inside `StudentLayout` and may
//! assume a signed-in user.

pub mod courses;
pub mod dashboard;
pub mod login;
pub mod profile;
