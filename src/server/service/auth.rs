//! Registration and login.
//!
//! Session handling stays in the controller; this service only decides whether a
//! registration or login is valid.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, CredentialLookup, LoginParam, RegisterUserParam, User},
    util::password::{hash_password, verify_password},
};

/// Message returned when registering an email that already belongs to a user.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email has been used";

/// Service providing user registration and credential verification.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    /// bcrypt cost applied to newly registered passwords.
    pub bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor for hashing new passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a new user.
    ///
    /// Rejects an email that is already registered, hashes the password, and stores
    /// the user. Two registrations racing on the same email both pass the lookup;
    /// the unique index rejects the second insert, which is reported the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::HashErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string())
                } else {
                    AppError::DbErr(err)
                }
            })?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(user)
    }

    /// Verifies login credentials.
    ///
    /// An unknown email and a wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::HashErr)` - The stored hash could not be verified
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let credential = match user_repo.verify_credential(&param.email).await? {
            CredentialLookup::Found(credential) => credential,
            CredentialLookup::NotFound => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(param.password, credential.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credential.user)
    }
}
