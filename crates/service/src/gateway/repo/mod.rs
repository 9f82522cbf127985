pub mod memory;
pub mod seaorm;

pub use memory::InMemoryGateway;
pub use seaorm::SeaOrmGateway;
