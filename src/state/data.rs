/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the page catalog and the UI layer.

use serde::{Deserialize, Serialize};

/// Prefix that turns a full-resolution image name into its thumbnail name
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Represents a single viewable page in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Stable identity key, unique within a catalog
    id: i64,
    /// Name of the full-resolution image resource (e.g., "magazine-front-cover")
    image_name: String,
}

impl Page {
    /// Create a new page record
    ///
    /// No validation happens here; duplicate ids and empty names are
    /// rejected when a catalog is built from a list of pages.
    pub fn new(id: i64, image_name: impl Into<String>) -> Self {
        Self {
            id,
            image_name: image_name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Name of the smaller preview resource for this page.
    /// Recomputed on every call.
    pub fn thumbnail_name(&self) -> String {
        thumbnail_name_for(&self.image_name)
    }
}

/// Derive a thumbnail resource name from a full image name
pub fn thumbnail_name_for(image_name: &str) -> String {
    format!("{THUMBNAIL_PREFIX}{image_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_name_is_prefixed() {
        let page = Page::new(7, "magazine-front-cover");
        assert_eq!(page.thumbnail_name(), "thumb-magazine-front-cover");
    }

    #[test]
    fn test_thumbnail_name_matches_free_function() {
        for name in ["a", "magazine-back-cover", "cover with spaces", "ünïcödé"] {
            let page = Page::new(1, name);
            assert_eq!(page.thumbnail_name(), thumbnail_name_for(name));
            assert_eq!(page.thumbnail_name(), format!("thumb-{}", page.image_name()));
        }
    }

    #[test]
    fn test_equal_image_names_give_equal_thumbnails() {
        let first = Page::new(1, "poster");
        let second = Page::new(2, "poster");
        assert_ne!(first, second);
        assert_eq!(first.thumbnail_name(), second.thumbnail_name());
    }

    #[test]
    fn test_serialization_skips_derived_name() {
        let page = Page::new(1, "magazine-front-cover");
        let json = serde_json::to_string(&page).unwrap();

        assert!(!json.contains("thumb-"));

        let restored: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, restored);
        assert_eq!(restored.thumbnail_name(), "thumb-magazine-front-cover");
    }
}
