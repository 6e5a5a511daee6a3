//! Login provisioning: create the login, or update its password if it exists.
//!
//! The root login is load-bearing, so any failure other than "already
//! exists" is fatal. The application login is best effort.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::InitConfig;
use crate::db::{ADMIN_DATABASE, AdminServer, Role};
use crate::error::{BootstrapError, ServerError};

/// Result of a single login provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum LoginOutcome {
    Created,
    /// The login already existed and its password was overwritten.
    Updated,
    Skipped,
    Failed(String),
}

/// Attempts `createUser`; falls back to a password update when the login exists.
///
/// Errors other than duplicate-identity, and failures of the update itself,
/// are returned to the caller to decide on.
async fn create_or_update<S: AdminServer + ?Sized>(
    server: &S,
    username: &str,
    password: &str,
    roles: &[Role],
) -> Result<LoginOutcome, ServerError> {
    match server
        .create_user(ADMIN_DATABASE, username, password, roles)
        .await
    {
        Ok(()) => Ok(LoginOutcome::Created),
        Err(e) if e.is_duplicate_identity() => {
            info!("User {} already exists, updating password...", username);
            server
                .update_user_password(ADMIN_DATABASE, username, password)
                .await?;
            info!("Password updated for user {}", username);
            Ok(LoginOutcome::Updated)
        }
        Err(e) => Err(e),
    }
}

/// Provisions the administrative login with the `root` role.
pub async fn provision_root_login<S: AdminServer + ?Sized>(
    server: &S,
    config: &InitConfig,
) -> Result<LoginOutcome, BootstrapError> {
    let Some(password) = config.root_password() else {
        warn!("MONGO_INITDB_ROOT_PASSWORD is not set. MongoDB will run without authentication.");
        return Ok(LoginOutcome::Skipped);
    };

    let username = config.root_username.as_str();
    info!("Creating root user: {}", username);

    match create_or_update(server, username, password, &[Role::Root]).await {
        Ok(outcome) => {
            if outcome == LoginOutcome::Created {
                info!("Root user {} created successfully", username);
            }
            Ok(outcome)
        }
        Err(source) => {
            error!("Error creating root user: {}", source);
            Err(BootstrapError::RootLogin {
                username: username.to_string(),
                source,
            })
        }
    }
}

/// Provisions the application login with `readWrite` on the application database.
///
/// The login lives in `admin` but is only granted access to its own database.
/// Failures are logged and reported through [`LoginOutcome::Failed`].
pub async fn provision_app_login<S: AdminServer + ?Sized>(
    server: &S,
    config: &InitConfig,
) -> LoginOutcome {
    let username = config.app_username.as_str();
    info!("Creating n8n user: {}", username);
    info!("Database: {}", config.app_database);

    let Some(password) = config.app_password() else {
        warn!("N8N_MONGODB_PASSWORD is not set. Skipping n8n user creation.");
        return LoginOutcome::Skipped;
    };

    let roles = [Role::read_write(config.app_database.as_str())];
    match create_or_update(server, username, password, &roles).await {
        Ok(outcome) => {
            if outcome == LoginOutcome::Created {
                info!("User {} created successfully", username);
            }
            outcome
        }
        Err(e) => {
            error!("Error creating user: {}", e);
            warn!("Continuing without n8n user...");
            LoginOutcome::Failed(e.to_string())
        }
    }
}
