use std::sync::Arc;

use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Login;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for user management and credential verification.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    authenticator: Arc<Authenticator>,
}

/// Result of a successful login: the token plus the denormalized user fields
/// returned once at login time. They are never re-derived from the token;
/// subsequent requests re-resolve the record by id.
#[derive(Debug)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: User,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Verify credentials and issue an access token.
    ///
    /// Unknown login and wrong password both collapse to
    /// `InvalidCredentials`, so a caller cannot enumerate logins.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Login unknown or password mismatch
    /// * `DatabaseError` - Credential lookup failed
    pub async fn login(&self, login: &Login, password: &str) -> Result<LoginOutcome, UserError> {
        let user = self
            .repository
            .find_by_login(login)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, user.id.0)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                other => UserError::Unknown(other.to_string()),
            })?;

        Ok(LoginOutcome {
            access_token: result.access_token,
            user,
        })
    }

    /// Resolve a credential record by id.
    ///
    /// Used by the access gate: `Ok(None)` means the record vanished after
    /// token issuance, an `Err` means the store itself failed.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    pub async fn find_user(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.repository.find_by_id(id).await
    }

    /// Create a new user with a freshly hashed password.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `DatabaseError` - Storage operation failed
    pub async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_login(&command.login)
            .await?
            .is_some()
        {
            return Err(UserError::LoginAlreadyExists(command.login.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        self.repository
            .create(NewUser {
                login: command.login,
                password_hash,
                role: command.role,
                last_name: command.last_name,
                first_name: command.first_name,
            })
            .await
    }

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    /// Delete a user by login.
    ///
    /// # Errors
    /// * `NotFound` - No user with this login
    /// * `DatabaseError` - Storage operation failed
    pub async fn delete_user(&self, login: &Login) -> Result<(), UserError> {
        if self.repository.delete_by_login(login).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(login.to_string()))
        }
    }
}
