//! Domain layer: entities and the sorted multiset
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod sorted_multiset;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use sorted_multiset::SortedMultiset;
