//! Server-side services used by route handlers.

pub mod directory;
pub mod session;
