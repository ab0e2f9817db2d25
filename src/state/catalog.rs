use once_cell::sync::Lazy;
use std::collections::HashSet;
use thiserror::Error;

use super::data::Page;

/// The pages bundled with the viewer, built once on first access
static BUILTIN: Lazy<PageCatalog> = Lazy::new(|| PageCatalog {
    pages: vec![
        Page::new(1, "magazine-front-cover"),
        Page::new(2, "magazine-back-cover"),
    ],
});

/// Errors raised while building a catalog from an external page list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate page id {0}")]
    DuplicateId(i64),
    #[error("page {id} has an empty image name")]
    EmptyImageName { id: i64 },
}

/// An ordered, fixed collection of pages.
///
/// Insertion order is the only order. Once built a catalog is never
/// mutated, so it can be shared freely between readers.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCatalog {
    pages: Vec<Page>,
}

/// The built-in page list in display order
pub fn list_pages() -> &'static [Page] {
    BUILTIN.pages()
}

impl PageCatalog {
    /// The process-wide catalog shipped with the viewer
    pub fn builtin() -> &'static PageCatalog {
        &BUILTIN
    }

    /// Build a catalog from an externally supplied list.
    ///
    /// Pages are checked in order and the first offending page decides the
    /// error: an empty image name, or an id already seen earlier in the list.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(pages.len());

        for page in &pages {
            if page.image_name().is_empty() {
                return Err(CatalogError::EmptyImageName { id: page.id() });
            }
            if !seen.insert(page.id()) {
                return Err(CatalogError::DuplicateId(page.id()));
            }
        }

        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Look up a page by its id
    pub fn get(&self, id: i64) -> Option<&Page> {
        self.pages.iter().find(|page| page.id() == id)
    }

    /// Index of a page within the display order
    pub fn position(&self, id: i64) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    /// The page displayed after `id`, or None at the end of the catalog
    pub fn next_after(&self, id: i64) -> Option<&Page> {
        let index = self.position(id)?;
        self.pages.get(index + 1)
    }

    /// The page displayed before `id`, or None at the start of the catalog
    pub fn previous_before(&self, id: i64) -> Option<&Page> {
        let index = self.position(id)?;
        index.checked_sub(1).and_then(|i| self.pages.get(i))
    }
}
