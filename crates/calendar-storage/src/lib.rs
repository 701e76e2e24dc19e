// Postgres storage layer with sqlx
//
// This crate provides the `Database` handle the event service reads and
// writes through. No global access: the handle is constructed once at startup
// and passed into the service.

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::*;
