//! Business logic services
//!
//! Services hold the data-access and authorization rules and reach storage
//! only through the repository traits.

pub mod contact;
pub mod user;

pub use contact::ContactService;
pub use user::UserService;
