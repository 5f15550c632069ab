//! Bulk lot import: drives the wizard through the server round trip.

pub mod executor;

pub use executor::{ImportExecutor, ImportRunError};
