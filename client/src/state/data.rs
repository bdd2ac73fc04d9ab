//! Student data loaded for the signed-in user.
//!
//! DESIGN
//! ======
//! `loaded_for` records which user the current (or in-flight) overview
//! belongs to. A response that arrives after the user changed is discarded,
//! so a slow fetch can never show one student's courses to another.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::net::types::{Announcement, Course, StudentOverview};

/// Shared student data backed by `/api/student/overview`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataState {
    pub overview: Option<StudentOverview>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded_for: Option<String>,
}

impl DataState {
    /// Whether data for `user_id` still has to be requested.
    #[must_use]
    pub fn needs_load(&self, user_id: &str) -> bool {
        self.loaded_for.as_deref() != Some(user_id)
    }

    /// Mark a fetch for `user_id` as in flight, dropping data for anyone else.
    pub fn begin_load(&mut self, user_id: &str) {
        if self.needs_load(user_id) {
            self.overview = None;
        }
        self.loaded_for = Some(user_id.to_owned());
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. Returns `false` when the result is stale.
    pub fn finish_load(&mut self, user_id: &str, result: Result<StudentOverview, String>) -> bool {
        if self.needs_load(user_id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(overview) => {
                self.overview = Some(overview);
                self.error = None;
            }
            Err(e) => {
                self.overview = None;
                self.error = Some(e);
            }
        }
        true
    }

    /// Forget everything, e.g. after logout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        self.overview.as_ref().map_or(&[], |o| o.courses.as_slice())
    }

    #[must_use]
    pub fn announcements(&self) -> &[Announcement] {
        self.overview.as_ref().map_or(&[], |o| o.announcements.as_slice())
    }

    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses().iter().map(|c| u32::from(c.credits)).sum()
    }

    /// Mean clamped progress across courses, `None` without courses.
    #[must_use]
    pub fn average_progress(&self) -> Option<u8> {
        let courses = self.courses();
        if courses.is_empty() {
            return None;
        }
        let total: u32 = courses.iter().map(|c| u32::from(c.progress_percent())).sum();
        let count = u32::try_from(courses.len()).unwrap_or(u32::MAX);
        u8::try_from(total / count).ok()
    }
}
