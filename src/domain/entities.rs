//! Domain entities: immutable, named, priced items

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable item that can be held by a [`SortedMultiset`](super::SortedMultiset).
///
/// The name is the ordering key. Equality between two items is whatever
/// `PartialEq` the implementor provides, normally a full value comparison.
pub trait Listable {
    /// Ordering key, compared case-sensitively byte by byte.
    fn name(&self) -> &str;

    /// Cost of buying the item in.
    fn wholesale_cost(&self) -> u32;

    /// Price the item sells for.
    fn retail_value(&self) -> u32;
}

/// A food item on the menu or in stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    wholesale_cost: u32,
    retail_value: u32,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, wholesale_cost: u32, retail_value: u32) -> Self {
        Self {
            name: name.into(),
            wholesale_cost,
            retail_value,
        }
    }
}

impl Listable for FoodItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn wholesale_cost(&self) -> u32 {
        self.wholesale_cost
    }

    fn retail_value(&self) -> u32 {
        self.retail_value
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
