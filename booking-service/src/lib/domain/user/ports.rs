use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Login;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Credential store port.
///
/// Read operations return `Ok(None)` for a missing record; a storage fault is
/// an `Err`. Callers that gate access must keep the two apart so they can
/// fail closed on faults instead of treating them as "no such user".
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns the identifier.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Point lookup by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Point lookup by unique login.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Remove a user by login.
    ///
    /// # Returns
    /// True when a record was removed, false when no record matched
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn delete_by_login(&self, login: &Login) -> Result<bool, UserError>;
}
