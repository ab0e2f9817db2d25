/// State management module
///
/// This module handles the page data model:
/// - The page record and its derived thumbnail name (data.rs)
/// - The fixed, ordered page catalog (catalog.rs)

pub mod catalog;
pub mod data;
