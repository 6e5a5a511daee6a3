//! Database integration.
//!
//! [`AdminServer`] is the administrative surface the bootstrap drives;
//! [`MongoServer`] implements it with the official driver. The [`Seeder`]
//! makes databases materialize by writing marker records.

mod seeder;
mod server;

pub use seeder::{MARKER_COLLECTION, MarkerRecord, SeedOutcome, Seeder};
pub use server::{ADMIN_DATABASE, AdminServer, MongoServer, Role};
