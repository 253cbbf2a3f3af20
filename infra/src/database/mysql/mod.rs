//! MySQL repository implementations
//!
//! Rows are soft-deleted through `deleted_at`; every read filters on
//! `deleted_at IS NULL`.

mod customer_repository_impl;
mod driver_repository_impl;
mod price_rule_repository_impl;

pub use customer_repository_impl::MySqlCustomerRepository;
pub use driver_repository_impl::MySqlDriverRepository;
pub use price_rule_repository_impl::MySqlPriceRuleRepository;

use dj_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::{Decode, MySql, Row, Type};

/// Whether an insert lost a race against the unique index on `telephone`
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn query_failed(err: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Database query failed: {}", err))
}

/// Typed column read with the column name in the error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("Failed to get {}: {}", name, e)))
}

/// Treat an empty credential column as no credential
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_column_is_none() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("t".to_string())), Some("t".to_string()));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
