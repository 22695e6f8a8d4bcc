//! # Validation Module
//!
//! Shape checks for CareStaff input. Field contents are not validated; the
//! store only needs ids it can compare and search text it can match.
//!
//! ## Usage
//! ```rust
//! use carestaff_core::validation::{validate_id, validate_search_query};
//!
//! assert!(validate_id("id", "emp-001").is_ok());
//! assert!(validate_id("id", "  ").is_err());
//!
//! assert_eq!(validate_search_query("  nurse ").unwrap(), "nurse");
//! ```

use crate::error::ValidationError;
use crate::MAX_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a record id.
///
/// Only an empty or blank id is rejected. Any other string is a usable id,
/// whatever its length or contents, so `add` accepts exactly what
/// `set_all` can hold.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum `MAX_QUERY_LEN` (100) characters after trimming
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("id", "emp-001").is_ok());
        assert!(validate_id("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(matches!(
            validate_id("id", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_id("id", "   "),
            Err(ValidationError::Required { .. })
        ));

        // Shape beyond non-blank is the caller's business.
        assert!(validate_id("id", "emp 001").is_ok());
        assert!(validate_id("id", &"x".repeat(500)).is_ok());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  icu  ").unwrap(), "icu");
        assert!(validate_search_query(&"q".repeat(MAX_QUERY_LEN + 1)).is_err());
    }
}
