// ABOUTME: Lexical validation for SQL identifiers supplied by the caller.
// ABOUTME: First line of defense; existence is checked against the live catalog.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DbError;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern"));

/// Accept only plain SQL identifiers. Anything that could close a quote or
/// smuggle in extra statement text is rejected before it reaches SQL.
pub fn validate_identifier(name: &str) -> Result<&str, DbError> {
    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(DbError::InvalidIdentifier(name.to_string()))
    }
}
