//! Persistence gateway: the single seam between entity services and storage.
//!
//! `repository` declares the trait, `repo` holds the SeaORM and in-memory
//! implementations, `domain` the write payloads and the relation-carrying
//! read views.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod repo;

pub use errors::GatewayError;
pub use repository::PersistenceGateway;
