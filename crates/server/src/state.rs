//! Shared application state

use std::sync::Arc;

use car_advisor_agent::CarAdvisor;
use car_advisor_config::Settings;
use car_advisor_tools::CarCatalog;

/// State shared across all handlers. Everything is immutable after
/// startup, so plain `Arc`s are enough.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub catalog: Arc<CarCatalog>,
    pub advisor: Arc<CarAdvisor>,
}

impl AppState {
    pub fn new(config: Settings, catalog: CarCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let advisor = CarAdvisor::new(catalog.clone(), config.loan.clone());
        Self {
            config: Arc::new(config),
            catalog,
            advisor: Arc::new(advisor),
        }
    }
}
