//! Page viewer core
//!
//! The page catalog, viewer configuration and asset lookup live here so the
//! window code in main.rs stays a thin iced shell.

pub mod assets;
pub mod config;
pub mod state;

pub use state::catalog::{list_pages, CatalogError, PageCatalog};
pub use state::data::{thumbnail_name_for, Page, THUMBNAIL_PREFIX};
