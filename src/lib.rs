//! larder: food stock kept in a sorted multiset
//!
//! Layers:
//! - `domain`: `Listable`, `FoodItem`, `SortedMultiset` (no I/O)
//! - `application`: `InventoryService` over stock and order files
//! - `infrastructure`: filesystem boundary and service wiring
//! - `cli`: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;
