// Query Workshop - query exercises over a small in-memory sample dataset
// This is the library root that exposes the public API

pub mod data;
pub mod error;
pub mod query;
pub mod workshop;

// Re-export commonly used types for convenience
pub use data::{Customer, DataLoader, DataSource, Order, Product, Supplier};
pub use error::{Result, WorkshopError};
pub use workshop::{Exercise, ExerciseOutput, Settings, Workshop};
