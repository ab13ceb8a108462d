//! # Storage Module
//!
//! Sources for the read-only surgery catalog.

pub mod json_catalog_repository;
pub mod memory_catalog_repository;
pub mod traits;

pub use json_catalog_repository::JsonCatalogRepository;
pub use memory_catalog_repository::InMemoryCatalogRepository;
pub use traits::SurgeryCatalogStorage;
