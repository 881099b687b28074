use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
/// `SESSION_SECRET` must be at least this long to derive a cookie signing key.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub session_secret: Vec<u8>,
    pub session_secure: bool,

    pub host: String,
    pub port: u16,

    pub bcrypt_cost: u32,
    pub seed_users: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => {
                if !url.starts_with("mysql://") {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "DATABASE_URL".to_string(),
                        reason: "expected a mysql:// connection URL".to_string(),
                    }
                    .into());
                }
                url
            }
            Err(_) => format!(
                "mysql://{}:{}@{}:{}/{}",
                required("DB_USER")?,
                required("DB_PASS")?,
                required("DB_HOST")?,
                parse_or("DB_PORT", DEFAULT_DB_PORT)?,
                required("DB_NAME")?,
            ),
        };

        let session_secret = required("SESSION_SECRET")?.into_bytes();
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let bcrypt_cost = parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidEnvVar {
                name: "BCRYPT_COST".to_string(),
                reason: "must be between 4 and 31".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url,
            session_secret,
            session_secure: parse_or("SESSION_SECURE", false)?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", DEFAULT_PORT)?,
            bcrypt_cost,
            seed_users: parse_or("SEED_USERS", false)?,
        })
    }

    /// Address the HTTP listener binds to, `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
