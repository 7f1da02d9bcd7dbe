//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::InventoryService;
use crate::config::Settings;
use crate::infrastructure::traits::{DiskReader, StockReader};

/// Settings plus the services built from them.
pub struct ServiceContainer {
    pub settings: Arc<Settings>,

    /// Also used to report whether config files exist
    pub reader: Arc<dyn StockReader>,

    pub inventory: InventoryService,
}

impl ServiceContainer {
    /// Container reading from disk.
    pub fn new(settings: Settings) -> Self {
        Self::with_reader(settings, Arc::new(DiskReader))
    }

    /// Container over any reader (for testing).
    pub fn with_reader(settings: Settings, reader: Arc<dyn StockReader>) -> Self {
        let inventory = InventoryService::new(Arc::clone(&reader));

        Self {
            settings: Arc::new(settings),
            reader,
            inventory,
        }
    }
}
