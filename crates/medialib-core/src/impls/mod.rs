//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryCatalog**: `CatalogStore` のインメモリ実装

pub mod inmem_catalog;

pub use self::inmem_catalog::InMemoryCatalog;
