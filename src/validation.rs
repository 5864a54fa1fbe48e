//! Input rules applied before anything is sent to the backend.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::error::TaskboardError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects every violation of a form instead of stopping at the first.
#[derive(Debug, Default, Clone)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.trim().chars().count();
        if len < min {
            self.push(field, format!("must be at least {} characters", min));
        } else if len > max {
            self.push(field, format!("must be at most {} characters", max));
        }
        self
    }

    pub fn max_length(&mut self, field: &'static str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.push(field, format!("must be at most {} characters", max));
            }
        }
        self
    }

    pub fn not_before(&mut self, field: &'static str, date: Option<NaiveDate>, today: NaiveDate) -> &mut Self {
        if let Some(date) = date {
            if date < today {
                self.push(field, "cannot be in the past".to_string());
            }
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !EMAIL_RE.is_match(value.trim()) {
            self.push(field, "must be a valid email address".to_string());
        }
        self
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn finish(&self) -> Result<(), TaskboardError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            let joined = self
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            Err(TaskboardError::Validation(joined))
        }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }
}

/// Parses a `YYYY-MM-DD` form date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, TaskboardError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        TaskboardError::Validation(format!("{}: expected a date like 2026-01-31, got '{}'", field, raw))
    })
}

pub fn validate_workspace(name: Option<&str>, description: Option<&str>) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    if let Some(name) = name {
        v.length("name", name, 2, 50);
    }
    v.max_length("description", description, 200);
    v.finish()
}

pub fn validate_project(
    name: Option<&str>,
    description: Option<&str>,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    if let Some(name) = name {
        v.length("name", name, 2, 100);
    }
    v.max_length("description", description, 500)
        .not_before("deadline", deadline, today);
    v.finish()
}

pub fn validate_task(
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    if let Some(title) = title {
        v.length("title", title, 2, 100);
    }
    v.max_length("description", description, 1000)
        .not_before("due date", due_date, today);
    v.finish()
}

pub fn validate_subtask(title: &str) -> Result<(), TaskboardError> {
    Validator::new().length("title", title, 1, 200).finish()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    v.email("email", email);
    if password.is_empty() {
        v.push("password", "is required".to_string());
    }
    v.finish()
}

pub fn validate_user_update(name: Option<&str>, email: Option<&str>) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    if let Some(name) = name {
        v.length("name", name, 2, 50);
    }
    if let Some(email) = email {
        v.email("email", email);
    }
    v.finish()
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), TaskboardError> {
    let mut v = Validator::new();
    v.length("name", name, 2, 50).email("email", email);
    if password.chars().count() < 6 {
        v.push("password", "must be at least 6 characters".to_string());
    }
    v.finish()
}
