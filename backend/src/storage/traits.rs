//! # Storage Traits
//!
//! Abstraction over where the surgery catalog comes from, so the domain layer
//! can be fed from a JSON file in production and from memory in tests.

use anyhow::Result;

use crate::domain::models::SurgeryCatalog;

/// Read-only source of the surgery catalog
pub trait SurgeryCatalogStorage: Send + Sync {
    /// Load and validate the full catalog
    fn load_catalog(&self) -> Result<SurgeryCatalog>;
}
