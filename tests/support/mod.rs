use anyhow::Result;
use std::path::PathBuf;
use stockbook::{CatalogStore, Product, save_products_to_path};
use tempfile::TempDir;

pub fn catalog_path(dir: &TempDir) -> PathBuf {
    dir.path().join("products.csv")
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Widget", "9.99", "10"),
        Product::new("Gadget", "4.50", "3"),
        Product::new("Sprocket", "0.25", "500"),
    ]
}

/// Stage a catalog file holding [`sample_products`] and open a store on it.
pub fn seeded_store(dir: &TempDir) -> Result<CatalogStore> {
    let path = catalog_path(dir);
    save_products_to_path(&path, &sample_products())?;
    Ok(CatalogStore::open(path)?)
}
