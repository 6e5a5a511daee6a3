//! Configuration resolved from the process environment.

use std::fmt;

pub const ROOT_USERNAME_VAR: &str = "MONGO_INITDB_ROOT_USERNAME";
pub const ROOT_PASSWORD_VAR: &str = "MONGO_INITDB_ROOT_PASSWORD";
pub const FILES_DATABASE_VAR: &str = "MONGO_INITDB_DATABASE";
pub const APP_DATABASE_VAR: &str = "N8N_MONGODB_DATABASE";
pub const APP_USERNAME_VAR: &str = "N8N_MONGODB_USER";
pub const APP_PASSWORD_VAR: &str = "N8N_MONGODB_PASSWORD";

pub const MONGODB_URI_VAR: &str = "MONGODB_URI";
pub const MONGODB_APP_NAME_VAR: &str = "MONGODB_APP_NAME";

/// Reads `key` through `lookup`, treating an empty value the same as unset.
fn resolve<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Logins and databases to provision on first boot.
///
/// An empty password is the signal to skip the matching login step.
#[derive(Clone, PartialEq, Eq)]
pub struct InitConfig {
    /// Administrative login name.
    pub root_username: String,
    pub root_password: String,
    /// Database seeded first; never seeded when it names `admin`.
    pub files_database: String,
    /// Database the application login is scoped to, always seeded.
    pub app_database: String,
    pub app_username: String,
    pub app_password: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            root_username: "admin".to_string(),
            root_password: String::new(),
            files_database: "files".to_string(),
            app_database: "n8n".to_string(),
            app_username: "n8n".to_string(),
            app_password: String::new(),
        }
    }
}

impl InitConfig {
    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            root_username: resolve(&lookup, ROOT_USERNAME_VAR, &defaults.root_username),
            root_password: resolve(&lookup, ROOT_PASSWORD_VAR, &defaults.root_password),
            files_database: resolve(&lookup, FILES_DATABASE_VAR, &defaults.files_database),
            app_database: resolve(&lookup, APP_DATABASE_VAR, &defaults.app_database),
            app_username: resolve(&lookup, APP_USERNAME_VAR, &defaults.app_username),
            app_password: resolve(&lookup, APP_PASSWORD_VAR, &defaults.app_password),
        }
    }

    /// Root password, or `None` when root provisioning should be skipped.
    pub fn root_password(&self) -> Option<&str> {
        Some(self.root_password.as_str()).filter(|p| !p.is_empty())
    }

    /// Application password, or `None` when the application login should be skipped.
    pub fn app_password(&self) -> Option<&str> {
        Some(self.app_password.as_str()).filter(|p| !p.is_empty())
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

impl fmt::Debug for InitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitConfig")
            .field("root_username", &self.root_username)
            .field("root_password", &redact(&self.root_password))
            .field("files_database", &self.files_database)
            .field("app_database", &self.app_database)
            .field("app_username", &self.app_username)
            .field("app_password", &redact(&self.app_password))
            .finish()
    }
}

/// How to reach the server being initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub uri: String,
    pub app_name: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            app_name: "mongo-init".to_string(),
        }
    }
}

impl ConnectionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            uri: resolve(&lookup, MONGODB_URI_VAR, &defaults.uri),
            app_name: resolve(&lookup, MONGODB_APP_NAME_VAR, &defaults.app_name),
        }
    }
}
