//! User domain models and parameters.
//!
//! Provides the public user model, the credential lookup used during login, and
//! validated parameter types for registration and login.

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        error::AppError,
        util::validate::{is_valid_email, require_max_len, require_non_blank, MAX_FIELD_LEN},
    },
};

/// Registered user without credential data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-assigned user id.
    pub id: i32,
    pub name: String,
    /// Unique email address used to log in.
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// A user together with the stored bcrypt hash, only used to verify a login.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredential {
    pub user: User,
    pub password_hash: String,
}

impl UserCredential {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Outcome of looking up login credentials by email.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialLookup {
    /// No user is registered with the email.
    NotFound,
    /// A user with the email exists.
    Found(UserCredential),
}

/// Validated registration input with the plain-text password.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates the registration DTO.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - All fields present and the email is well formed
    /// - `Err(AppError::BadRequest)` - A field is blank, the name or email is longer
    ///   than 255 characters, or the email is malformed
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        require_non_blank("name", &dto.name)?;
        require_non_blank("email", &dto.email)?;
        require_non_blank("password", &dto.password)?;

        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_string();
        require_max_len("name", &name, MAX_FIELD_LEN)?;
        require_max_len("email", &email, MAX_FIELD_LEN)?;
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
        })
    }
}

/// Row values for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated login input.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        require_non_blank("email", &dto.email)?;
        require_non_blank("password", &dto.password)?;

        let email = dto.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(Self {
            email,
            password: dto.password,
        })
    }
}
