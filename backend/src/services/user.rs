//! User service for account creation and login
//!
//! Login is a single stateless credential check: there are no sessions or
//! tokens, and logout changes nothing.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use contact_list_shared::{validation, LoginError, User};
use tracing::{debug, info};
use uuid::Uuid;

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Create a user account
    ///
    /// Usernames are not checked for uniqueness; a second account with the
    /// same name is stored alongside the first.
    pub async fn create(
        users: &dyn UserRepository,
        username: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        validation::validate_credentials(username, password).map_err(ApiError::Validation)?;

        let user = users
            .create(username, password)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Check a username and password against the first matching account
    ///
    /// The password is compared verbatim.
    pub async fn authenticate(
        users: &dyn UserRepository,
        username: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let user = users
            .find_first_by_username(username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(LoginError::UserNotFound)?;

        if user.password != password {
            debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(LoginError::PasswordMismatch.into());
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Log a user out
    ///
    /// Always succeeds, whether or not the user exists.
    pub fn logout(user_id: Uuid) {
        debug!(user_id = %user_id, "User logged out");
    }
}
