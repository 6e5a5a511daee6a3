//! The first-boot procedure: logins first, then database markers.

use serde::Serialize;
use tracing::info;

use crate::config::InitConfig;
use crate::db::{AdminServer, SeedOutcome, Seeder};
use crate::error::BootstrapError;
use crate::logins::{LoginOutcome, provision_app_login, provision_root_login};

/// Outcome of every step of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub root_login: LoginOutcome,
    pub app_login: LoginOutcome,
    pub files_database: SeedOutcome,
    pub app_database: SeedOutcome,
}

impl BootstrapReport {
    /// True when some best-effort step failed.
    pub fn has_failures(&self) -> bool {
        matches!(self.app_login, LoginOutcome::Failed(_))
            || matches!(self.files_database, SeedOutcome::Failed(_))
            || matches!(self.app_database, SeedOutcome::Failed(_))
    }
}

/// Runs the bootstrap steps once, in order, against a server.
pub struct Bootstrap<'a, S: AdminServer + ?Sized> {
    server: &'a S,
    config: InitConfig,
}

impl<'a, S: AdminServer + ?Sized> Bootstrap<'a, S> {
    pub fn new(server: &'a S, config: InitConfig) -> Self {
        Self { server, config }
    }

    /// Executes the procedure.
    ///
    /// Only a root login failure aborts; everything after it is best effort.
    pub async fn run(&self) -> Result<BootstrapReport, BootstrapError> {
        info!("Initializing MongoDB users and databases...");

        let root_login = provision_root_login(self.server, &self.config).await?;
        let app_login = provision_app_login(self.server, &self.config).await;

        let seeder = Seeder::new(self.server);
        let files_database = seeder.seed_files_database(&self.config.files_database).await;
        let app_database = seeder.seed_app_database(&self.config.app_database).await;

        info!("MongoDB initialization completed");

        Ok(BootstrapReport {
            root_login,
            app_login,
            files_database,
            app_database,
        })
    }
}
