use std::sync::Arc;

use service::gateway::PersistenceGateway;
use service::{ProductService, StoreService, UserService};

/// Shared handler state; all services share one gateway.
#[derive(Clone)]
pub struct ServerState {
    pub users: UserService,
    pub stores: StoreService,
    pub products: ProductService,
}

impl ServerState {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            users: UserService::new(gateway.clone()),
            stores: StoreService::new(gateway.clone()),
            products: ProductService::new(gateway),
        }
    }
}
