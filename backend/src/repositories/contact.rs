//! PostgreSQL contact repository
//!
//! Every statement filters on `user_id = $1`, bound from the scope owner.
//! Update and delete are single statements with `RETURNING`, so the lookup
//! and the write happen atomically.

use super::{ContactInput, ContactRepository, ContactScope};
use anyhow::Result;
use async_trait::async_trait;
use contact_list_shared::Contact;
use sqlx::PgPool;
use uuid::Uuid;

/// Contact record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub user_id: Uuid,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            phone: record.phone,
            user_id: record.user_id,
        }
    }
}

/// Contact repository backed by the `contacts` table
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list(&self, scope: ContactScope) -> Result<Vec<Contact>> {
        let records = sqlx::query_as::<_, ContactRecord>(
            r#"
            SELECT id, name, phone, user_id
            FROM contacts
            WHERE user_id = $1
            ORDER BY seq
            "#,
        )
        .bind(scope.owner())
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Contact::from).collect())
    }

    async fn search(&self, scope: ContactScope, text: &str) -> Result<Vec<Contact>> {
        // strpos is case-sensitive, treats no character as a wildcard, and
        // returns 1 for the empty needle.
        let records = sqlx::query_as::<_, ContactRecord>(
            r#"
            SELECT id, name, phone, user_id
            FROM contacts
            WHERE user_id = $1
              AND (strpos(name, $2) > 0 OR strpos(phone, $2) > 0)
            ORDER BY seq
            "#,
        )
        .bind(scope.owner())
        .bind(text)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Contact::from).collect())
    }

    async fn create(&self, scope: ContactScope, input: &ContactInput) -> Result<Contact> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            INSERT INTO contacts (user_id, id, name, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, user_id
            "#,
        )
        .bind(scope.owner())
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn update(
        &self,
        scope: ContactScope,
        id: Uuid,
        input: &ContactInput,
    ) -> Result<Option<Contact>> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            UPDATE contacts
            SET name = $3, phone = $4
            WHERE user_id = $1 AND id = $2
            RETURNING id, name, phone, user_id
            "#,
        )
        .bind(scope.owner())
        .bind(id)
        .bind(&input.name)
        .bind(&input.phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Contact::from))
    }

    async fn delete(&self, scope: ContactScope, id: Uuid) -> Result<Option<Contact>> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            DELETE FROM contacts
            WHERE user_id = $1 AND id = $2
            RETURNING id, name, phone, user_id
            "#,
        )
        .bind(scope.owner())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Contact::from))
    }
}
