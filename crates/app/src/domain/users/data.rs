//! Users Data

use std::{fmt, sync::LazyLock};

use regex::Regex;
use zeroize::Zeroizing;

use crate::domain::{
    audit::snapshot::{Snapshot, Snapshotable},
    validation::{FieldError, ValidationErrors},
};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 6;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

fn check_identity(errors: &mut ValidationErrors, name: &str, email: &str) {
    errors.check_length("name", name, NAME_MIN_LENGTH, Some(NAME_MAX_LENGTH));

    if !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail { field: "email" });
    }
}

/// New User Data
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
}

impl NewUser {
    /// # Errors
    ///
    /// Returns every violated constraint.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_identity(&mut errors, &self.name, &self.email);
        errors.check_length("password", &self.password, PASSWORD_MIN_LENGTH, None);

        errors.into_result()
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl Snapshotable for NewUser {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .redacted("password")
    }
}

/// User Update Data
///
/// A missing or blank password leaves the stored one untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub password: Option<Zeroizing<String>>,
}

impl UserUpdate {
    /// The replacement password, if one was actually supplied.
    #[must_use]
    pub fn supplied_password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .map(String::as_str)
            .filter(|password| !password.trim().is_empty())
    }

    /// # Errors
    ///
    /// Returns every violated constraint.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_identity(&mut errors, &self.name, &self.email);

        if let Some(password) = self.supplied_password() {
            errors.check_length("password", password, PASSWORD_MIN_LENGTH, None);
        }

        errors.into_result()
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field(
                "password",
                &self.supplied_password().map(|_| "**redacted**"),
            )
            .finish()
    }
}

impl Snapshotable for UserUpdate {
    fn snapshot(&self) -> Snapshot {
        let snapshot = Snapshot::new()
            .text("name", &self.name)
            .text("email", &self.email);

        if self.supplied_password().is_some() {
            snapshot.redacted("password")
        } else {
            snapshot
        }
    }
}
