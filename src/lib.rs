//! Shared library for the stockbook catalog tools.
//!
//! The crate keeps a small product catalog (name, price, quantity per record)
//! in a CSV file with a fixed header row. `CatalogStore` is the contract the
//! front end depends on: open the catalog once at startup, render `names()`
//! for display, resolve a selected item with `find`, and drive
//! `add`/`remove`/`update`/`search` from user actions. Every successful
//! mutation rewrites the backing file in full.

pub mod catalog;
pub mod error;

pub use catalog::{
    CatalogStore, DEFAULT_CATALOG_PATH, HEADERS, Product, load_products_from_path,
    save_products_to_path,
};
pub use error::{StoreError, StoreResult};
