//! Startup helpers that build the shared resources handed to the router.

use sea_orm::DatabaseConnection;
use time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::{
    cookie::Key,
    service::SignedCookie,
    session_store::{self, ExpiredDeletion},
    Expiry, SessionManagerLayer, SessionStore,
};
use tower_sessions_sqlx_store::MySqlStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    middleware::session::SESSION_INACTIVITY_HOURS,
    model::user::CreateUserParam,
    util::password::hash_password,
};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Seconds between sweeps of expired session rows.
const EXPIRED_SESSION_SWEEP_SECS: u64 = 60;

/// Demo accounts inserted when seeding is enabled, as `(name, email)`.
const SEED_USERS: [(&str, &str); 2] = [
    ("User 1", "user1@gmail.com"),
    ("User 2", "user2@gmail.com"),
];
const SEED_PASSWORD: &str = "password";

/// Connects to the MySQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Builds the signed-cookie session layer over any session store.
///
/// # Arguments
/// - `store` - Backing session store
/// - `secret` - Cookie signing secret, at least 64 bytes
/// - `secure` - Whether the cookie carries the `Secure` attribute
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer issuing `session_id` cookies with a 24 hour
///   inactivity expiry
/// - `Err(AppError::InternalError)` - The secret cannot be used as a signing key
pub fn session_layer<S: SessionStore + Clone>(
    store: S,
    secret: &[u8],
    secure: bool,
) -> Result<SessionManagerLayer<S, SignedCookie>, AppError> {
    let key = Key::try_from(secret)
        .map_err(|e| AppError::InternalError(format!("Invalid session secret: {}", e)))?;

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            SESSION_INACTIVITY_HOURS,
        )))
        .with_signed(key))
}

/// Creates the database-backed session layer and the expired-session sweeper.
///
/// The session table lives in the application database and is created if missing.
/// The returned task deletes expired sessions periodically and must be aborted on
/// shutdown.
///
/// # Returns
/// - `Ok((layer, task))` - Session layer and the handle of the cleanup task
/// - `Err(AppError::InternalError)` - Session table migration failed or invalid secret
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<
    (
        SessionManagerLayer<MySqlStore, SignedCookie>,
        JoinHandle<Result<(), session_store::Error>>,
    ),
    AppError,
> {
    let pool = db.get_mysql_connection_pool().clone();
    let session_store = MySqlStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let deletion_task = tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(std::time::Duration::from_secs(
                EXPIRED_SESSION_SWEEP_SECS,
            )),
    );

    let layer = session_layer(session_store, &config.session_secret, config.session_secure)?;

    Ok((layer, deletion_task))
}

/// Inserts the demo users, skipping any email that is already registered.
///
/// # Returns
/// - `Ok(usize)` - Number of users inserted
/// - `Err(AppError)` - Database or hashing error
pub async fn seed_users(db: &DatabaseConnection, bcrypt_cost: u32) -> Result<usize, AppError> {
    let user_repo = UserRepository::new(db);
    let mut inserted = 0;

    for (name, email) in SEED_USERS {
        if user_repo.find_by_email(email).await?.is_some() {
            tracing::info!("Seed user {} already exists, skipping", email);
            continue;
        }

        let password_hash = hash_password(SEED_PASSWORD.to_string(), bcrypt_cost).await?;

        user_repo
            .create(CreateUserParam {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;
        inserted += 1;
    }

    tracing::info!("Seeded {} demo users", inserted);

    Ok(inserted)
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
