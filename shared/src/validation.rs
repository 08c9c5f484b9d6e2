//! Input validation functions

/// Validate a username: it must be present
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    Ok(())
}

/// Validate a password: it must be present
///
/// No strength rules apply.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Validate a registration request, username first
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    validate_username(username)?;
    validate_password(password)
}
