//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server links this crate and serializes these same types, so the JSON
//! shape of every `/api/*` response is defined exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Public user information returned by `/api/auth/me` and `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Enrolled degree program, if any.
    #[serde(default)]
    pub program: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Credentials posted to `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A course the student is enrolled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    /// Catalog code such as `"CS101"`.
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub credits: u8,
    /// Completion percentage. Values above 100 are clamped for display.
    #[serde(default)]
    pub progress: u8,
}

impl Course {
    /// Progress percentage clamped to `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }
}

/// A portal-wide announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    /// ISO 8601 date the announcement was posted.
    pub posted_at: String,
}

/// Everything the student pages render, returned by `/api/student/overview`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentOverview {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}
