use crate::catalog::Product;
use crate::config::Config;
use crate::deployment::DeploymentInfo;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub items: ItemStore,
    pub products: Arc<Vec<Product>>,
    pub deployment: Arc<DeploymentInfo>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, deployment: DeploymentInfo, items: ItemStore, products: Vec<Product>) -> Self {
        Self {
            items,
            products: Arc::new(products),
            deployment: Arc::new(deployment),
            config: Arc::new(config),
        }
    }

    /// State with default configuration and seed data, for handler tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = Config::from_lookup(|_| None).expect("default config is valid");
        let deployment = DeploymentInfo::capture(&config);
        Self::new(
            config,
            deployment,
            ItemStore::seeded(),
            crate::catalog::seed_products(),
        )
    }
}
