//! Tabular persistence for the catalog file.
//!
//! Row zero is always the fixed header; every later row is one product in
//! catalog order. Saves rewrite the whole file, matching the catalog
//! lifecycle: one small catalog, one writer, a full rewrite after each
//! mutation.

use crate::catalog::record::{HEADERS, Product};
use crate::error::StoreResult;
use std::path::Path;

/// Read and parse the catalog rows from disk.
///
/// The header row is consumed by the reader and never returned as data.
/// A file holding only the header yields an empty catalog.
pub fn load_products_from_path(path: &Path) -> StoreResult<Vec<Product>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut products = Vec::new();
    for row in reader.deserialize() {
        products.push(row?);
    }
    Ok(products)
}

/// Rewrite the full catalog file: header row first, then every record.
///
/// The header is written explicitly so it survives even when the last
/// product has been removed.
pub fn save_products_to_path(path: &Path, products: &[Product]) -> StoreResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(HEADERS)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_catalog_still_writes_the_header_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.csv");
        save_products_to_path(&path, &[]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Product Name,Price,Quantity\n");
        assert!(load_products_from_path(&path).unwrap().is_empty());
    }

    #[test]
    fn saved_rows_load_back_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.csv");
        let products = vec![
            Product::new("Widget", "9.99", "10"),
            Product::new("Gadget", "4.50", "3"),
            Product::new("Widget", "1.00", "1"),
        ];
        save_products_to_path(&path, &products).unwrap();
        assert_eq!(load_products_from_path(&path).unwrap(), products);
    }

    #[test]
    fn fields_with_commas_survive_the_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.csv");
        let products = vec![Product::new("Nuts, assorted", "2,50", "12")];
        save_products_to_path(&path, &products).unwrap();
        assert_eq!(load_products_from_path(&path).unwrap(), products);
    }
}
