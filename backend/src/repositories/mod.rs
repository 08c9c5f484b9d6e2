//! Database repositories
//!
//! Storage is reached only through the [`UserRepository`] and
//! [`ContactRepository`] traits so services can run against PostgreSQL or
//! the in-memory store. Every contact operation takes a [`ContactScope`];
//! there is no way to read or change a contact without naming its owner.

pub mod contact;
pub mod memory;
pub mod user;

use anyhow::Result;
use async_trait::async_trait;
use contact_list_shared::{Contact, User};
use uuid::Uuid;

pub use contact::PgContactRepository;
pub use memory::{InMemoryContactRepository, InMemoryUserRepository};
pub use user::PgUserRepository;

/// The set of contacts visible to one user
///
/// Reads, writes and searches through a scope only ever touch rows whose
/// `user_id` equals the scope owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactScope {
    owner: Uuid,
}

impl ContactScope {
    pub fn new(owner: Uuid) -> Self {
        Self { owner }
    }

    /// The user whose contacts this scope covers
    #[inline]
    pub fn owner(&self) -> Uuid {
        self.owner
    }

    /// Whether `contact` falls inside this scope
    #[inline]
    pub fn contains(&self, contact: &Contact) -> bool {
        contact.user_id == self.owner
    }
}

/// Name and phone supplied on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
}

/// User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user under a freshly assigned id
    async fn create(&self, username: &str, password: &str) -> Result<User>;

    /// First stored user with exactly this username, if any
    async fn find_first_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Contact persistence, always owner-scoped
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts in the scope, in storage order
    async fn list(&self, scope: ContactScope) -> Result<Vec<Contact>>;

    /// Contacts in the scope whose name or phone contains `text`
    async fn search(&self, scope: ContactScope, text: &str) -> Result<Vec<Contact>>;

    /// Insert a contact owned by the scope owner
    async fn create(&self, scope: ContactScope, input: &ContactInput) -> Result<Contact>;

    /// Overwrite name and phone of a contact in the scope
    ///
    /// Returns `None` when no contact with `id` exists in the scope.
    async fn update(
        &self,
        scope: ContactScope,
        id: Uuid,
        input: &ContactInput,
    ) -> Result<Option<Contact>>;

    /// Remove a contact in the scope, returning it as it was
    async fn delete(&self, scope: ContactScope, id: Uuid) -> Result<Option<Contact>>;
}
