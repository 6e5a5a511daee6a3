//! Database seeding utilities.
//!
//! MongoDB only materializes a database once it holds data, so each target
//! database gets a marker collection with a single record.

use bson::Document;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{error, info};

use super::server::{ADMIN_DATABASE, AdminServer};
use crate::error::ServerError;

/// Collection that holds marker records.
pub const MARKER_COLLECTION: &str = "_init";

/// Sentinel document inserted into each seeded database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub initialized: bool,
    pub timestamp: bson::DateTime,
}

impl MarkerRecord {
    pub fn at(created_at: OffsetDateTime) -> Self {
        Self {
            initialized: true,
            timestamp: bson::DateTime::from_time_0_3(created_at),
        }
    }

    pub fn now() -> Self {
        Self::at(OffsetDateTime::now_utc())
    }

    pub fn to_document(&self) -> Result<Document, ServerError> {
        bson::to_document(self).map_err(|e| ServerError::new(e.to_string()))
    }
}

/// Result of a single seeding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded,
    Skipped,
    Failed(String),
}

/// Seeds marker records through an [`AdminServer`].
pub struct Seeder<'a, S: AdminServer + ?Sized> {
    server: &'a S,
}

impl<'a, S: AdminServer + ?Sized> Seeder<'a, S> {
    pub fn new(server: &'a S) -> Self {
        Self { server }
    }

    /// Creates the marker collection in `db` and inserts one marker record.
    ///
    /// Failures are logged and reported, never propagated.
    pub async fn seed_marker(&self, db: &str) -> SeedOutcome {
        match self.insert_marker(db).await {
            Ok(()) => SeedOutcome::Seeded,
            Err(e) => {
                error!("Error creating database {}: {}", db, e);
                SeedOutcome::Failed(e.to_string())
            }
        }
    }

    async fn insert_marker(&self, db: &str) -> Result<(), ServerError> {
        self.server.create_collection(db, MARKER_COLLECTION).await?;
        let marker = MarkerRecord::now().to_document()?;
        self.server.insert_one(db, MARKER_COLLECTION, marker).await
    }

    /// Seeds the files database unless it names the admin database.
    pub async fn seed_files_database(&self, db: &str) -> SeedOutcome {
        if db.is_empty() || db == ADMIN_DATABASE {
            info!("Files database is {:?}, not seeding it", db);
            return SeedOutcome::Skipped;
        }

        info!("Creating files database: {}", db);
        let outcome = self.seed_marker(db).await;
        if outcome == SeedOutcome::Seeded {
            info!("Files database {} created successfully", db);
        }
        outcome
    }

    /// Seeds the application database. Always attempted.
    pub async fn seed_app_database(&self, db: &str) -> SeedOutcome {
        info!("Creating n8n database: {}", db);
        let outcome = self.seed_marker(db).await;
        if outcome == SeedOutcome::Seeded {
            info!("n8n database {} initialized successfully", db);
        }
        outcome
    }
}
