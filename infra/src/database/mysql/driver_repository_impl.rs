//! MySQL implementation of the driver identity repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use dj_core::domain::entities::{Driver, DriverStatus, Identity, Telephone};
use dj_core::errors::DomainError;
use dj_core::repositories::IdentityRepository;
use dj_shared::phone::mask_phone_number;

use super::{column, is_unique_violation, non_empty, query_failed};

// `status` is an ENUM column, cast so it decodes as text
const SELECT_COLUMNS: &str = r#"
    SELECT id, telephone, token, token_created_at, CAST(status AS CHAR) AS status,
           name, id_number, id_image_a, license_image_a, license_image_b,
           distinct_code, telephone_bak, audit_at, created_at, updated_at
    FROM drivers
"#;

/// MySQL implementation of `IdentityRepository<Driver>`, table `drivers`.
///
/// Drivers are keyed by telephone.
pub struct MySqlDriverRepository {
    pool: MySqlPool,
}

impl MySqlDriverRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_driver(row: &MySqlRow) -> Result<Driver, DomainError> {
        let status: Option<String> = column(row, "status")?;
        let status = status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<DriverStatus>())
            .transpose()
            .map_err(|e| DomainError::storage(format!("Invalid driver status: {}", e)))?;

        Ok(Driver {
            id: column(row, "id")?,
            telephone: column(row, "telephone")?,
            token: non_empty(column(row, "token")?),
            token_created_at: column(row, "token_created_at")?,
            status,
            name: column(row, "name")?,
            id_number: column(row, "id_number")?,
            id_image_a: column(row, "id_image_a")?,
            license_image_a: column(row, "license_image_a")?,
            license_image_b: column(row, "license_image_b")?,
            distinct_code: column(row, "distinct_code")?,
            telephone_bak: column(row, "telephone_bak")?,
            audit_at: column(row, "audit_at")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl IdentityRepository<Driver> for MySqlDriverRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Driver>, DomainError> {
        let query = format!(
            "{} WHERE telephone = ? AND deleted_at IS NULL LIMIT 1",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_driver).transpose()
    }

    async fn find_by_key(&self, key: &Telephone) -> Result<Option<Driver>, DomainError> {
        self.find_by_phone(key.as_str()).await
    }

    async fn create(&self, phone: &str) -> Result<Driver, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO drivers (telephone, status, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(phone)
        .bind(DriverStatus::Stop.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Driver::register(done.last_insert_id(), phone, now)),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(
                    phone = %mask_phone_number(phone),
                    "Concurrent driver registration, reading existing row"
                );
                self.find_by_phone(phone).await?.ok_or_else(|| {
                    DomainError::storage("telephone is held by a deleted driver record")
                })
            }
            Err(e) => Err(DomainError::storage(format!("Failed to create driver: {}", e))),
        }
    }

    async fn save_session(
        &self,
        key: &Telephone,
        token: Option<&str>,
        issued_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE drivers
            SET token = ?, token_created_at = ?, updated_at = ?
            WHERE telephone = ? AND deleted_at IS NULL
            "#,
        )
        .bind(token)
        .bind(issued_at)
        .bind(Utc::now())
        .bind(key.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
