//! # Validation Utilities
//!
//! Input validation helpers applied before a request is sent.

/// Validate that a string is not empty after trimming.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a search term and return it trimmed.
pub fn validate_search_term(term: &str) -> Result<&str, String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        Err("Please enter a search term".to_string())
    } else {
        Ok(trimmed)
    }
}

/// Validate that two values match (password and its confirmation).
pub fn validate_matching(value: &str, confirmation: &str, field_name: &str) -> Result<(), String> {
    if value != confirmation {
        Err(format!("{} and its confirmation do not match", field_name))
    } else {
        Ok(())
    }
}
