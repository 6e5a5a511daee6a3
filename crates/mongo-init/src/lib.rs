//! First-boot bootstrap for the MongoDB instance backing n8n.
//!
//! Runs once against an empty data directory: provisions the root login,
//! provisions an `n8n` login scoped to its own database, and writes a
//! marker record into the files and n8n databases so both exist.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mongo_init::prelude::*;
//!
//! let server = MongoServer::connect(&ConnectionConfig::from_env()).await?;
//! let report = Bootstrap::new(&server, InitConfig::from_env()).run().await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod logins;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::bootstrap::{Bootstrap, BootstrapReport};
    pub use crate::config::{ConnectionConfig, InitConfig};
    pub use crate::db::{
        ADMIN_DATABASE, AdminServer, MARKER_COLLECTION, MarkerRecord, MongoServer, Role,
        SeedOutcome, Seeder,
    };
    pub use crate::error::{BootstrapError, ServerError};
    pub use crate::logins::{LoginOutcome, provision_app_login, provision_root_login};
}
