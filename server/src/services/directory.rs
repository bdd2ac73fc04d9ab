//! Student directory loaded from a YAML file.
//!
//! DESIGN
//! ======
//! The directory is read once at startup and shared immutably through
//! `AppState`. Passwords are stored as hex SHA-256 digests; emails are matched
//! case-insensitively.

use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use portal_client::net::types::{Announcement, Course, StudentOverview, User};
use serde::Deserialize;
use sha2::{Digest, Sha256};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("malformed directory: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate student id: {0}")]
    DuplicateId(String),
    #[error("duplicate student email: {0}")]
    DuplicateEmail(String),
    #[error("student {0} has an invalid password digest")]
    InvalidDigest(String),
}

/// One student as stored in the directory file.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_sha256: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl StudentRecord {
    /// Public view of the record, without credentials.
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            program: self.program.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    students: Vec<StudentRecord>,
    #[serde(default)]
    announcements: Vec<Announcement>,
}

#[derive(Debug, Default)]
pub struct Directory {
    students: HashMap<String, StudentRecord>,
    /// Lowercased email -> student id.
    by_email: HashMap<String, String>,
    announcements: Vec<Announcement>,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Hex SHA-256 digest of `password`, the format stored in the directory.
///
/// Unsalted and fast: fine for the demo fixture, not for real credentials.
#[must_use]
pub fn hash_password(password: &str) -> String {
    bytes_to_hex(&Sha256::digest(password.as_bytes()))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn is_hex_digest(raw: &str) -> bool {
    raw.len() == 64 && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

impl Directory {
    /// Read and validate a directory file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| DirectoryError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&raw)
    }

    /// Parse and validate directory YAML.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML, duplicate ids or emails, and
    /// digests that are not 64 hex characters.
    pub fn from_yaml_str(raw: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = serde_yaml::from_str(raw)?;
        let mut directory = Self { announcements: file.announcements, ..Self::default() };

        for mut student in file.students {
            if !is_hex_digest(&student.password_sha256) {
                return Err(DirectoryError::InvalidDigest(student.id));
            }
            student.password_sha256.make_ascii_lowercase();

            let email = normalize_email(&student.email);
            if directory.by_email.contains_key(&email) {
                return Err(DirectoryError::DuplicateEmail(student.email));
            }
            if directory.students.contains_key(&student.id) {
                return Err(DirectoryError::DuplicateId(student.id));
            }
            directory.by_email.insert(email, student.id.clone());
            directory.students.insert(student.id.clone(), student);
        }

        Ok(directory)
    }

    /// Check credentials, returning the matching student.
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&StudentRecord> {
        let id = self.by_email.get(&normalize_email(email))?;
        let student = self.students.get(id)?;
        (student.password_sha256 == hash_password(password)).then_some(student)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.get(id)
    }

    /// Courses for `id` plus the shared announcements, newest first.
    #[must_use]
    pub fn overview(&self, id: &str) -> Option<StudentOverview> {
        let student = self.get(id)?;
        let mut announcements = self.announcements.clone();
        announcements.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Some(StudentOverview { courses: student.courses.clone(), announcements })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
