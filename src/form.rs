// Form validation for the login and report-issue screens.
//
// Errors are collected per field and surfaced inline; validation is never
// fatal and never partial (every failing field is reported in one pass).

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::{Error, FieldError, Result};
use crate::models::{IssueStatus, UserReport};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// How the user is signing in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Email,
    Phone,
}

/// Credentials form for the login screen, covering sign-in and sign-up
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub method: LoginMethod,
    pub signing_up: bool,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        match self.method {
            LoginMethod::Email => {
                if self.signing_up && self.full_name.trim().is_empty() {
                    errors.push(FieldError::new("full_name", "Full name is required"));
                }
                if self.email.is_empty() {
                    errors.push(FieldError::new("email", "Email is required"));
                } else if !is_valid_email(&self.email) {
                    errors.push(FieldError::new("email", "Please enter a valid email address"));
                }
                if self.password.is_empty() {
                    errors.push(FieldError::new("password", "Password is required"));
                } else if self.signing_up && self.password.len() < 6 {
                    errors.push(FieldError::new(
                        "password",
                        "Password must be at least 6 characters",
                    ));
                }
                if self.signing_up && self.password != self.confirm_password {
                    errors.push(FieldError::new("confirm_password", "Passwords do not match"));
                }
            }
            LoginMethod::Phone => {
                if self.phone.trim().is_empty() {
                    errors.push(FieldError::new("phone", "Phone number is required"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

/// New-issue form for the report screen; every field is required
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
}

impl ReportForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }
        if self.location.trim().is_empty() {
            errors.push(FieldError::new("location", "Location is required"));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Validate and build the report record. New reports start pending with
    /// zeroed counters and a generated id.
    pub fn into_report(self, now: i64) -> Result<UserReport> {
        self.validate()?;
        Ok(UserReport {
            id: Uuid::now_v7().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            status: IssueStatus::Pending,
            location: self.location.trim().to_string(),
            created_at: now,
            likes: 0,
            comments: 0,
            upvotes: 0,
        })
    }
}
