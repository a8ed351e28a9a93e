use std::fmt;

use crate::domain::user::errors::LoginError;

/// Stored role value that grants administrator privileges.
pub const ADMIN_ROLE_VALUE: i16 = 1;

/// Credential record for a registered user.
///
/// Owned by the credential store; the authentication core treats it as an
/// immutable snapshot for the duration of one request.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: String,
    pub role: Role,
    pub last_name: String,
    pub first_name: String,
}

/// Fields of a user that does not exist yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: String,
    pub role: Role,
    pub last_name: String,
    pub first_name: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User privilege level, mapped from the stored role value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Standard,
    Admin,
}

impl Role {
    /// Map a stored role value onto a privilege level.
    ///
    /// Any value other than the admin constant is a standard user, so an
    /// unexpected value can never grant privileges.
    pub fn from_value(value: i16) -> Self {
        if value == ADMIN_ROLE_VALUE {
            Role::Admin
        } else {
            Role::Standard
        }
    }

    /// Stored representation of this role.
    pub fn as_value(self) -> i16 {
        match self {
            Role::Admin => ADMIN_ROLE_VALUE,
            Role::Standard => 0,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Login value type
///
/// Ensures the login is 1-64 characters with no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Empty` - Login is empty
    /// * `TooLong` - Login longer than 64 characters
    /// * `InvalidCharacters` - Login contains whitespace
    pub fn new(login: String) -> Result<Self, LoginError> {
        if login.is_empty() {
            return Err(LoginError::Empty);
        }
        if login.len() > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
                actual: login.len(),
            });
        }
        if login.chars().any(char::is_whitespace) {
            return Err(LoginError::InvalidCharacters);
        }
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub login: Login,
    pub password: String,
    pub role: Role,
    pub last_name: String,
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(Role::from_value(1), Role::Admin);
        assert_eq!(Role::from_value(0), Role::Standard);
        // Unknown values never grant privileges
        assert_eq!(Role::from_value(2), Role::Standard);
        assert_eq!(Role::from_value(-1), Role::Standard);

        assert!(Role::Admin.is_admin());
        assert!(!Role::Standard.is_admin());
    }

    #[test]
    fn test_login_validation() {
        assert!(Login::new("egauthier".to_string()).is_ok());
        assert!(Login::new("".to_string()).is_err());
        assert!(Login::new("has space".to_string()).is_err());
        assert!(Login::new("x".repeat(65)).is_err());
    }
}
