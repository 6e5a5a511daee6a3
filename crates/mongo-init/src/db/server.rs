//! The administrative API this tool drives, and its MongoDB implementation.

use async_trait::async_trait;
use bson::{Document, doc};
use mongodb::Client;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::error::{BootstrapError, ServerError};

/// Database that holds logins and is targeted for user management.
pub const ADMIN_DATABASE: &str = "admin";

/// A role grant attached to a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Built-in full-access role.
    Root,
    /// Read/write on a single database.
    ReadWrite { db: String },
}

impl Role {
    pub fn read_write(db: impl Into<String>) -> Self {
        Self::ReadWrite { db: db.into() }
    }

    pub fn to_document(&self) -> Document {
        match self {
            Role::Root => doc! { "role": "root", "db": ADMIN_DATABASE },
            Role::ReadWrite { db } => doc! { "role": "readWrite", "db": db.as_str() },
        }
    }
}

/// Administrative operations against a database server.
///
/// Every call names the database it runs against; there is no separate
/// "current database" state.
#[async_trait]
pub trait AdminServer: Send + Sync {
    /// Create a login stored in `db` with the given role grants.
    async fn create_user(
        &self,
        db: &str,
        username: &str,
        password: &str,
        roles: &[Role],
    ) -> Result<(), ServerError>;

    /// Overwrite the password of an existing login in place.
    async fn update_user_password(
        &self,
        db: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ServerError>;

    async fn create_collection(&self, db: &str, name: &str) -> Result<(), ServerError>;

    async fn insert_one(
        &self,
        db: &str,
        collection: &str,
        document: Document,
    ) -> Result<(), ServerError>;
}

impl From<MongoError> for ServerError {
    fn from(err: MongoError) -> Self {
        let message = err.to_string();
        match &*err.kind {
            ErrorKind::Command(command) => {
                ServerError::new(message).with_code(command.code, command.code_name.clone())
            }
            ErrorKind::Write(WriteFailure::WriteError(write)) => ServerError {
                code: Some(write.code),
                code_name: write.code_name.clone(),
                message,
            },
            _ => ServerError::new(message),
        }
    }
}

/// Host list of a parsed connection string, without credentials.
fn endpoint(options: &ClientOptions) -> String {
    options
        .hosts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// [`AdminServer`] backed by the official MongoDB driver.
#[derive(Clone)]
pub struct MongoServer {
    client: Client,
}

impl MongoServer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client for the configured endpoint.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first command rather than here.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, BootstrapError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| BootstrapError::Connect(e.to_string()))?;
        options.app_name = Some(config.app_name.clone());
        info!("Connecting to MongoDB at {}", endpoint(&options));

        let client =
            Client::with_options(options).map_err(|e| BootstrapError::Connect(e.to_string()))?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl AdminServer for MongoServer {
    async fn create_user(
        &self,
        db: &str,
        username: &str,
        password: &str,
        roles: &[Role],
    ) -> Result<(), ServerError> {
        let roles: Vec<Document> = roles.iter().map(Role::to_document).collect();
        debug!("createUser {} on {}", username, db);

        self.client
            .database(db)
            .run_command(doc! {
                "createUser": username,
                "pwd": password,
                "roles": roles,
            })
            .await?;
        Ok(())
    }

    async fn update_user_password(
        &self,
        db: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ServerError> {
        debug!("updateUser {} on {}", username, db);

        self.client
            .database(db)
            .run_command(doc! {
                "updateUser": username,
                "pwd": password,
            })
            .await?;
        Ok(())
    }

    async fn create_collection(&self, db: &str, name: &str) -> Result<(), ServerError> {
        self.client.database(db).create_collection(name).await?;
        Ok(())
    }

    async fn insert_one(
        &self,
        db: &str,
        collection: &str,
        document: Document,
    ) -> Result<(), ServerError> {
        self.client
            .database(db)
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(())
    }
}
