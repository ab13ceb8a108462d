pub mod surgery_catalog;

pub use surgery_catalog::{CatalogError, SurgeryCatalog};
