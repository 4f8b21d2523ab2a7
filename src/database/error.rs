use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),

    #[error("Failed to create database directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Seed row in {table} references unknown {parent}: {key}")]
    MissingParent {
        table: &'static str,
        parent: &'static str,
        key: String,
    },

    #[error("Seed data repeats {parent} key: {key}")]
    DuplicateKey { parent: &'static str, key: String },

    #[error("Invalid date in seed data '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
