/// Page image resources
///
/// This module handles:
/// - Scanning the asset folder for image files
/// - Resolving page image and thumbnail names to paths on disk
///
/// Decoding and drawing the files is left to iced's image widgets.

pub mod index;

pub use index::{scan_async, AssetIndex, PageAssets};
