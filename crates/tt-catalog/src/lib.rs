//! `tt-catalog` — CSV course catalog loading for the timetable engine.
//!
//! The engine consumes a normalized `Vec<Course>`; this crate is one way of
//! producing it from a spreadsheet export.
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`loader`]  | `load_catalog_csv`, `load_catalog_reader`     |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`            |

pub mod error;
pub mod loader;


pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
