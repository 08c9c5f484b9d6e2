//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Repositories are held as trait objects, so the same router serves
//! PostgreSQL in production and the in-memory store in tests.

use crate::config::AppConfig;
use crate::repositories::{
    ContactRepository, InMemoryContactRepository, InMemoryUserRepository, PgContactRepository,
    PgUserRepository, UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`s or `Arc`-backed handles, so cloning per request is
/// cheap.
#[derive(Clone)]
pub struct AppState {
    /// User storage
    pub users: Arc<dyn UserRepository>,
    /// Contact storage
    pub contacts: Arc<dyn ContactRepository>,
    /// Database pool, absent when running on the in-memory store
    pub db: Option<PgPool>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state backed by PostgreSQL
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(db.clone())),
            contacts: Arc::new(PgContactRepository::new(db.clone())),
            db: Some(db),
            config: Arc::new(config),
        }
    }

    /// Create state backed by fresh, empty in-memory repositories
    pub fn in_memory(config: AppConfig) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryContactRepository::new()),
            config,
        )
    }

    /// Create state from arbitrary repositories
    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        contacts: Arc<dyn ContactRepository>,
        config: AppConfig,
    ) -> Self {
        Self {
            users,
            contacts,
            db: None,
            config: Arc::new(config),
        }
    }

    /// Get the user repository
    #[inline]
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Get the contact repository
    #[inline]
    pub fn contacts(&self) -> &dyn ContactRepository {
        self.contacts.as_ref()
    }

    /// Get the database pool, if PostgreSQL backs this state
    #[inline]
    pub fn db(&self) -> Option<&PgPool> {
        self.db.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
