use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::values::EmailAddress;
use crate::domain::values::Hours;
use crate::domain::values::PhoneNumber;
use crate::domain::values::RequiredText;
use crate::domain::volunteer::errors::VolunteerError;
use crate::domain::volunteer::models::Volunteer;
use crate::domain::volunteer::models::VolunteerId;
use crate::domain::volunteer::ports::VolunteerRepository;
use crate::outbound::repositories::violated_constraint;

const COLUMNS: &str = "id, name, email, phone, address, skills, hours, status, join_date, \
                       password_hash, created_at, updated_at";

pub struct PostgresVolunteerRepository {
    pool: PgPool,
}

impl PostgresVolunteerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_volunteer(row: PgRow) -> Result<Volunteer, VolunteerError> {
        Ok(Volunteer {
            id: VolunteerId(row.get("id")),
            name: RequiredText::new("name", row.get("name"))?,
            email: EmailAddress::new(row.get("email"))?,
            phone: PhoneNumber::new(row.get("phone"))?,
            address: row.get("address"),
            skills: row.get("skills"),
            hours: Hours::new(row.get("hours"))?,
            status: row.get::<String, _>("status").parse()?,
            join_date: row.get("join_date"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn map_write_error(e: sqlx::Error, volunteer: &Volunteer) -> VolunteerError {
        match violated_constraint(&e) {
            Some("volunteers_email_key") => {
                VolunteerError::EmailAlreadyExists(volunteer.email.to_string())
            }
            _ => VolunteerError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl VolunteerRepository for PostgresVolunteerRepository {
    async fn create(&self, volunteer: Volunteer) -> Result<Volunteer, VolunteerError> {
        sqlx::query(
            r#"
            INSERT INTO volunteers (id, name, email, phone, address, skills, hours, status,
                                    join_date, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(volunteer.id.as_uuid())
        .bind(volunteer.name.as_str())
        .bind(volunteer.email.as_str())
        .bind(volunteer.phone.as_str())
        .bind(volunteer.address.as_deref())
        .bind(volunteer.skills.as_deref())
        .bind(volunteer.hours.value())
        .bind(volunteer.status.as_str())
        .bind(volunteer.join_date)
        .bind(&volunteer.password_hash)
        .bind(volunteer.created_at)
        .bind(volunteer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &volunteer))?;

        Ok(volunteer)
    }

    async fn find_by_id(&self, id: &VolunteerId) -> Result<Option<Volunteer>, VolunteerError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM volunteers WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VolunteerError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_volunteer).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Volunteer>, VolunteerError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM volunteers WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VolunteerError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_volunteer).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Volunteer>, VolunteerError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM volunteers ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VolunteerError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_volunteer).collect()
    }

    async fn update(
        &self,
        mut volunteer: Volunteer,
        hours: Option<Hours>,
    ) -> Result<Volunteer, VolunteerError> {
        let row = sqlx::query(
            r#"
            UPDATE volunteers
            SET name = $2, email = $3, phone = $4, address = $5, skills = $6,
                hours = COALESCE($7, hours), status = $8, password_hash = $9, updated_at = $10
            WHERE id = $1
            RETURNING hours
            "#,
        )
        .bind(volunteer.id.as_uuid())
        .bind(volunteer.name.as_str())
        .bind(volunteer.email.as_str())
        .bind(volunteer.phone.as_str())
        .bind(volunteer.address.as_deref())
        .bind(volunteer.skills.as_deref())
        .bind(hours.map(|h| h.value()))
        .bind(volunteer.status.as_str())
        .bind(&volunteer.password_hash)
        .bind(volunteer.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &volunteer))?
        .ok_or_else(|| VolunteerError::NotFound(volunteer.id.to_string()))?;

        volunteer.hours = Hours::new(row.get("hours"))?;

        Ok(volunteer)
    }

    async fn delete(&self, id: &VolunteerId) -> Result<(), VolunteerError> {
        let result = sqlx::query(
            r#"
            DELETE FROM volunteers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| VolunteerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VolunteerError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
