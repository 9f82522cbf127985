//! Service layer providing validated CRUD over users, stores and products.
//! - Entity services validate input and interpret persistence outcomes.
//! - Storage is reached only through the `gateway::PersistenceGateway` trait.
//! - Errors are tagged enums so callers can match them exhaustively.

pub mod errors;
pub mod gateway;
pub mod input;
pub mod user_service;
pub mod store_service;
pub mod product_service;
#[cfg(test)]
pub mod test_support;

pub use product_service::ProductService;
pub use store_service::StoreService;
pub use user_service::UserService;
