//! PostgreSQL user repository

use super::UserRepository;
use anyhow::Result;
use async_trait::async_trait;
use contact_list_shared::User;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            password: record.password,
        }
    }
}

/// User repository backed by the `users` table
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, username: &str, password: &str) -> Result<User> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, username, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, password
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user.into())
    }

    async fn find_first_by_username(&self, username: &str) -> Result<Option<User>> {
        // Usernames are not unique; the earliest insert wins.
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(User::from))
    }
}
