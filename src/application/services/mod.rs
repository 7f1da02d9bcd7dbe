//! Application services

pub mod inventory;

pub use inventory::{InventoryService, StockSummary};
