use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Admin;
use crate::domain::identity::models::AdminId;
use crate::domain::identity::ports::AdminRepository;
use crate::domain::values::EmailAddress;
use crate::domain::values::RequiredText;
use crate::outbound::repositories::violated_constraint;

pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_admin(row: PgRow) -> Result<Admin, IdentityError> {
        Ok(Admin {
            id: AdminId(row.get("id")),
            name: RequiredText::new("name", row.get("name"))?,
            email: EmailAddress::new(row.get("email"))?,
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn create(&self, admin: Admin) -> Result<Admin, IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO admins (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(admin.id.as_uuid())
        .bind(admin.name.as_str())
        .bind(admin.email.as_str())
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("admins_email_key") => {
                IdentityError::EmailAlreadyExists(admin.email.to_string())
            }
            _ => IdentityError::DatabaseError(e.to_string()),
        })?;

        Ok(admin)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, IdentityError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_admin).transpose()
    }
}
