//! Contact service: owner-scoped contact management
//!
//! Callers pass the acting user's id with every operation. The id is turned
//! into a [`ContactScope`] before storage is touched, so a contact owned by
//! someone else behaves exactly like one that does not exist.

use crate::db;
use crate::error::ApiError;
use crate::repositories::{ContactInput, ContactRepository, ContactScope};
use contact_list_shared::{Contact, ContactError};
use tracing::{debug, info};
use uuid::Uuid;

/// Contact service for a user's address book
pub struct ContactService;

impl ContactService {
    /// All contacts owned by `user_id`
    ///
    /// An unknown user simply has no contacts.
    pub async fn list(
        contacts: &dyn ContactRepository,
        user_id: Uuid,
    ) -> Result<Vec<Contact>, ApiError> {
        contacts
            .list(ContactScope::new(user_id))
            .await
            .map_err(ApiError::Internal)
    }

    /// Contacts owned by `user_id` whose name or phone contains `text`
    pub async fn search(
        contacts: &dyn ContactRepository,
        user_id: Uuid,
        text: &str,
    ) -> Result<Vec<Contact>, ApiError> {
        contacts
            .search(ContactScope::new(user_id), text)
            .await
            .map_err(ApiError::Internal)
    }

    /// Add a contact for `user_id`
    ///
    /// The owner is not checked against the users table up front. The nil
    /// id is refused since no account can ever hold it, and an owner the
    /// database's foreign key rejects is reported the same way.
    pub async fn create(
        contacts: &dyn ContactRepository,
        user_id: Uuid,
        input: ContactInput,
    ) -> Result<Contact, ApiError> {
        if user_id.is_nil() {
            return Err(ApiError::Validation("Invalid user ID".to_string()));
        }

        let contact = contacts
            .create(ContactScope::new(user_id), &input)
            .await
            .map_err(|err| {
                if db::is_foreign_key_violation(&err) {
                    debug!(user_id = %user_id, "Contact rejected: unknown owner");
                    ApiError::Validation("Invalid user ID".to_string())
                } else {
                    ApiError::Internal(err)
                }
            })?;

        info!(user_id = %user_id, contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    /// Replace name and phone of one of `user_id`'s contacts
    pub async fn update(
        contacts: &dyn ContactRepository,
        user_id: Uuid,
        contact_id: Uuid,
        input: ContactInput,
    ) -> Result<Contact, ApiError> {
        let updated = contacts
            .update(ContactScope::new(user_id), contact_id, &input)
            .await
            .map_err(ApiError::Internal)?;

        match updated {
            Some(contact) => {
                info!(user_id = %user_id, contact_id = %contact_id, "Contact updated");
                Ok(contact)
            }
            None => {
                debug!(user_id = %user_id, contact_id = %contact_id, "Update missed");
                Err(ContactError::NotFound.into())
            }
        }
    }

    /// Delete one of `user_id`'s contacts, returning it as it was
    pub async fn delete(
        contacts: &dyn ContactRepository,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Contact, ApiError> {
        let deleted = contacts
            .delete(ContactScope::new(user_id), contact_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ContactError::NotFound)?;

        info!(user_id = %user_id, contact_id = %contact_id, "Contact deleted");
        Ok(deleted)
    }
}
