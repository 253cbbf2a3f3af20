//! MySQL implementation of the customer identity repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use dj_core::domain::entities::{Customer, CustomerId, Identity};
use dj_core::errors::DomainError;
use dj_core::repositories::IdentityRepository;
use dj_shared::phone::mask_phone_number;

use super::{column, is_unique_violation, non_empty, query_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, telephone, name, email, wechat, city_id,
           token, token_created_at, created_at, updated_at
    FROM customers
"#;

/// MySQL implementation of `IdentityRepository<Customer>`, table `customers`
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: &MySqlRow) -> Result<Customer, DomainError> {
        Ok(Customer {
            id: CustomerId(column(row, "id")?),
            telephone: column(row, "telephone")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            wechat: column(row, "wechat")?,
            city_id: column(row, "city_id")?,
            token: non_empty(column(row, "token")?),
            token_created_at: column(row, "token_created_at")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl IdentityRepository<Customer> for MySqlCustomerRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, DomainError> {
        let query = format!(
            "{} WHERE telephone = ? AND deleted_at IS NULL LIMIT 1",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn find_by_key(&self, key: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let query = format!("{} WHERE id = ? AND deleted_at IS NULL LIMIT 1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(key.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn create(&self, phone: &str) -> Result<Customer, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO customers (telephone, created_at, updated_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(phone)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Customer::register(done.last_insert_id(), phone, now)),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(
                    phone = %mask_phone_number(phone),
                    "Concurrent customer registration, reading existing row"
                );
                self.find_by_phone(phone).await?.ok_or_else(|| {
                    DomainError::storage("telephone is held by a deleted customer record")
                })
            }
            Err(e) => Err(DomainError::storage(format!("Failed to create customer: {}", e))),
        }
    }

    async fn save_session(
        &self,
        key: &CustomerId,
        token: Option<&str>,
        issued_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET token = ?, token_created_at = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(token)
        .bind(issued_at)
        .bind(Utc::now())
        .bind(key.0)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
