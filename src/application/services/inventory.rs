//! Inventory service
//!
//! Loads stock and order files into sorted multisets and answers
//! totals and availability questions over them.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{FoodItem, Listable, SortedMultiset};
use crate::infrastructure::traits::StockReader;

/// On-disk layout of a stock or order file.
///
/// ```toml
/// [[item]]
/// name = "Coffee"
/// wholesale_cost = 1
/// retail_value = 3
/// quantity = 2
/// ```
#[derive(Debug, Deserialize, Default)]
struct StockFile {
    #[serde(default, rename = "item")]
    items: Vec<StockEntry>,
}

#[derive(Debug, Deserialize)]
struct StockEntry {
    name: String,
    wholesale_cost: u32,
    retail_value: u32,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Largest `quantity` a single entry may carry.
pub const MAX_QUANTITY: u32 = 10_000;

/// Aggregate figures for a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSummary {
    pub items: usize,
    pub wholesale_cost: u64,
    pub retail_value: u64,
}

impl StockSummary {
    pub fn of<T: Listable>(set: &SortedMultiset<T>) -> Self {
        Self {
            items: set.len(),
            wholesale_cost: set.total_wholesale_cost(),
            retail_value: set.total_retail_value(),
        }
    }

    /// Retail value minus wholesale cost; negative when items sell at a loss.
    pub fn margin(&self) -> i128 {
        i128::from(self.retail_value) - i128::from(self.wholesale_cost)
    }
}

impl fmt::Display for StockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items, wholesale {}, retail {}",
            self.items, self.wholesale_cost, self.retail_value
        )
    }
}

/// Service for reading stock and filling orders against it.
pub struct InventoryService {
    reader: Arc<dyn StockReader>,
}

impl InventoryService {
    /// Create a new inventory service.
    pub fn new(reader: Arc<dyn StockReader>) -> Self {
        Self { reader }
    }

    /// Load a stock or order file.
    ///
    /// An entry with `quantity = n` contributes `n` handles to one shared item;
    /// `n` must be in `1..=MAX_QUANTITY`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<SortedMultiset<FoodItem>> {
        let content = self
            .reader
            .read(path)
            .map_err(|source| ApplicationError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let file: StockFile = toml::from_str(&content).map_err(|e| ApplicationError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut stock = SortedMultiset::new();
        for entry in file.items {
            let invalid = |message: String| ApplicationError::InvalidItem {
                path: path.to_path_buf(),
                message,
            };
            if entry.name.trim().is_empty() {
                return Err(invalid("empty name".into()));
            }
            if entry.quantity == 0 || entry.quantity > MAX_QUANTITY {
                return Err(invalid(format!(
                    "{}: quantity {} not in 1..={}",
                    entry.name, entry.quantity, MAX_QUANTITY
                )));
            }
            let item = Arc::new(FoodItem::new(
                entry.name,
                entry.wholesale_cost,
                entry.retail_value,
            ));
            for _ in 0..entry.quantity {
                stock.add(Arc::clone(&item));
            }
        }
        debug!("load: {} items from {}", stock.len(), path.display());
        Ok(stock)
    }

    pub fn summarize(&self, stock: &SortedMultiset<FoodItem>) -> StockSummary {
        StockSummary::of(stock)
    }

    /// True if every item of `order` is in `stock`, respecting counts.
    pub fn check(&self, stock: &SortedMultiset<FoodItem>, order: &SortedMultiset<FoodItem>) -> bool {
        stock.contains_all(order)
    }

    /// Take `order` out of `stock` if it can be filled completely.
    ///
    /// Each order line consumes one fully equal stock item, so a same-named
    /// item at another price is never taken in its place. On success returns
    /// the summary of the order; on failure `stock` is left unchanged.
    #[instrument(level = "debug", skip_all, fields(stock = stock.len(), order = order.len()))]
    pub fn fulfil(
        &self,
        stock: &mut SortedMultiset<FoodItem>,
        order: &SortedMultiset<FoodItem>,
    ) -> ApplicationResult<StockSummary> {
        stock
            .take_all(order)
            .map_err(|missing| ApplicationError::Unavailable {
                name: missing.name().to_string(),
            })?;
        debug!("fulfil: {} items left", stock.len());
        Ok(StockSummary::of(order))
    }
}
