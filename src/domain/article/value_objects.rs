use crate::domain::errors::{ValidationError, ValidationErrors, ValidationResult};
use std::fmt;

pub const SLUG_LENGTH: usize = 32;
pub const SLUG_FORMAT_MESSAGE: &str = "slug は 32 文字の英小文字数字です。";

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_valid_slug(value: &str) -> bool {
    value.chars().count() == SLUG_LENGTH && value.chars().all(is_slug_char)
}

/// Article identifier: exactly 32 lowercase ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(Self::format_errors());
        }
        Ok(Self(value))
    }

    /// The single error reported for any input that is not a well-formed slug.
    pub fn format_errors() -> ValidationErrors {
        ValidationErrors::single(ValidationError::new("slug", SLUG_FORMAT_MESSAGE))
    }

    /// Rebuild a slug that was already validated before it was stored.
    pub fn new_without_validation(value: impl Into<String>) -> Self {
        let value = value.into();
        debug_assert!(is_valid_slug(&value), "trusted slug violates format: {value:?}");
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self(value.into()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self(value.into()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self(value.into()))
    }

    pub fn new_without_validation(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
