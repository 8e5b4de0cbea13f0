//! The in-memory catalog and its durable file.
//!
//! `CatalogStore` owns the ordered product list and the path it persists to.
//! Every mutation updates memory first and then rewrites the file in full;
//! a failed write leaves memory ahead of disk, which is surfaced to the
//! caller and not repaired here.

use crate::catalog::file::{load_products_from_path, save_products_to_path};
use crate::catalog::record::{Product, require_field};
use crate::error::{StoreError, StoreResult};
use std::path::{Path, PathBuf};

/// Catalog file used when the caller does not pick one.
pub const DEFAULT_CATALOG_PATH: &str = "products.csv";

/// Ordered product catalog bound to one backing file.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Open the catalog at `path`, or start empty when no file exists yet.
    ///
    /// A missing file is the initialization path, not a failure; nothing is
    /// written until the first mutation persists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let products = if path.is_file() {
            load_products_from_path(&path)?
        } else {
            Vec::new()
        };
        Ok(Self { path, products })
    }

    /// Open the catalog at [`DEFAULT_CATALOG_PATH`].
    pub fn open_default() -> StoreResult<Self> {
        Self::open(DEFAULT_CATALOG_PATH)
    }

    /// The backing file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All product names in catalog order, header excluded.
    ///
    /// Restartable: each call walks the current state from the top.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|product| product.name.as_str())
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[Product] {
        &self.products
    }

    /// First record whose name equals `name` exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    /// Append a record at the end of the catalog and persist.
    ///
    /// All three fields are required. Duplicate names are allowed and create
    /// a second record; lookups keep resolving to the first.
    pub fn add(&mut self, name: &str, price: &str, quantity: &str) -> StoreResult<()> {
        require_field("product name", name)?;
        require_field("price", price)?;
        require_field("quantity", quantity)?;
        self.products.push(Product::new(name, price, quantity));
        self.persist()
    }

    /// Delete the first record matching `name` exactly and persist.
    ///
    /// Returns the removed record so the front end can name it in its
    /// notification.
    pub fn remove(&mut self, name: &str) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|product| product.name == name)
            .ok_or_else(|| StoreError::not_found(name))?;
        let removed = self.products.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Overwrite the fields of the first record named `selected`, in place.
    ///
    /// `selected` identifies the target; a blank selection means the caller
    /// never picked a record. The replacement fields are taken as given,
    /// without the non-empty check `add` applies.
    pub fn update(
        &mut self,
        selected: &str,
        name: &str,
        price: &str,
        quantity: &str,
    ) -> StoreResult<()> {
        if selected.trim().is_empty() {
            return Err(StoreError::SelectionRequired);
        }
        let target = self
            .products
            .iter_mut()
            .find(|product| product.name == selected)
            .ok_or_else(|| StoreError::not_found(selected))?;
        target.name = name.to_string();
        target.price = price.to_string();
        target.quantity = quantity.to_string();
        self.persist()
    }

    /// Names containing `term` as a case-insensitive substring, in catalog
    /// order. No match is a valid, empty result; a blank term is a usage
    /// error.
    pub fn search(&self, term: &str) -> StoreResult<Vec<&str>> {
        if term.trim().is_empty() {
            return Err(StoreError::validation("search term must not be empty"));
        }
        let needle = term.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|product| product.name_contains(&needle))
            .map(|product| product.name.as_str())
            .collect())
    }

    /// Rewrite the backing file from current memory.
    fn persist(&self) -> StoreResult<()> {
        save_products_to_path(&self.path, &self.products)
    }
}
