//! Validated username input.

use std::fmt;

use thiserror::Error;

/// Errors raised while validating user input, before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was empty or whitespace only.
    #[error("Please enter a username.")]
    EmptyUsername,
}

/// A trimmed, non-empty username.
///
/// Construct one with [`Username::parse`]; the inner string is never empty
/// and never carries leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The username as sent to the lookup endpoint.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let name = Username::parse("  Builderman \n").unwrap();
        assert_eq!(name.as_str(), "Builderman");
        assert_eq!(name.to_string(), "Builderman");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Username::parse(""), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn test_parse_rejects_whitespace_only() {
        assert_eq!(
            Username::parse(" \t  "),
            Err(ValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            ValidationError::EmptyUsername.to_string(),
            "Please enter a username."
        );
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        // The lookup endpoint decides whether this is a valid name.
        let name = Username::parse("two words").unwrap();
        assert_eq!(name.as_ref(), "two words");
    }
}
