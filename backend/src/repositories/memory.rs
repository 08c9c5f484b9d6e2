//! In-memory repositories
//!
//! Rows live in insertion-ordered vectors behind a `tokio` `RwLock`. Each
//! operation takes the lock once, so a lookup and the write that follows it
//! cannot interleave with another request.

use super::{ContactInput, ContactRepository, ContactScope, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use contact_list_shared::{Contact, User};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Users kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &str, password: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: password.to_string(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_first_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

/// Contacts kept in process memory
///
/// No foreign key is enforced: a contact may name an owner that was never
/// registered.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self, scope: ContactScope) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().filter(|c| scope.contains(c)).cloned().collect())
    }

    async fn search(&self, scope: ContactScope, text: &str) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .iter()
            .filter(|c| scope.contains(c) && c.matches(text))
            .cloned()
            .collect())
    }

    async fn create(&self, scope: ContactScope, input: &ContactInput) -> Result<Contact> {
        let contact = Contact {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            phone: input.phone.clone(),
            user_id: scope.owner(),
        };
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        scope: ContactScope,
        id: Uuid,
        input: &ContactInput,
    ) -> Result<Option<Contact>> {
        let mut contacts = self.contacts.write().await;
        let Some(contact) = contacts
            .iter_mut()
            .find(|c| scope.contains(c) && c.id == id)
        else {
            return Ok(None);
        };

        contact.name = input.name.clone();
        contact.phone = input.phone.clone();
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, scope: ContactScope, id: Uuid) -> Result<Option<Contact>> {
        let mut contacts = self.contacts.write().await;
        let position = contacts
            .iter()
            .position(|c| scope.contains(c) && c.id == id);
        Ok(position.map(|index| contacts.remove(index)))
    }
}
