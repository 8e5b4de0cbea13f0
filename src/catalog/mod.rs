//! Catalog store wiring.
//!
//! This module owns the product catalog and its CSV backing file. Types here
//! mirror the file layout (fixed header row, one record per data row);
//! callers use `CatalogStore` for all reads and mutations and only touch the
//! `file` helpers when staging fixture files.

pub mod file;
pub mod record;
pub mod store;

pub use file::{load_products_from_path, save_products_to_path};
pub use record::{HEADERS, Product};
pub use store::{CatalogStore, DEFAULT_CATALOG_PATH};
