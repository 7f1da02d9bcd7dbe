//! Infrastructure layer: the disk boundary and service wiring

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
