//! SQLite persistence for the smartphone defect schema.
pub mod connection;
pub mod entities;
pub mod error;
pub mod schema;
pub mod seed;
pub mod store;

pub use store::DefectStore;
