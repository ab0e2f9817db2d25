use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::state::data::Page;

/// Image formats the viewer will pick up (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Resource names mapped to image files, keyed by file stem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetIndex {
    files: HashMap<String, PathBuf>,
}

/// Files backing a single page
#[derive(Debug, Clone, PartialEq)]
pub struct PageAssets {
    /// Full-resolution image, None if the file is missing
    pub image: Option<PathBuf>,
    /// Thumbnail image; falls back to the full image when no thumbnail exists
    pub thumbnail: Option<PathBuf>,
}

impl AssetIndex {
    /// Walk `dir` recursively and index every supported image by its stem.
    ///
    /// Entries are visited in sorted order, and the first file seen for a
    /// stem wins. A missing or unreadable directory gives an empty index.
    pub fn scan(dir: &Path) -> Self {
        let mut files = HashMap::new();

        if !dir.is_dir() {
            tracing::warn!("Asset folder {} does not exist", dir.display());
            return Self { files };
        }

        tracing::info!("Scanning asset folder: {}", dir.display());

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || !is_supported(path) {
                continue;
            }

            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };

            if let Some(existing) = files.get(&stem) {
                tracing::debug!(
                    "Skipping {}, {} already provides '{}'",
                    path.display(),
                    existing.display(),
                    stem
                );
                continue;
            }

            files.insert(stem, path.to_path_buf());
        }

        tracing::info!("Indexed {} image files", files.len());

        Self { files }
    }

    /// Path of the file providing a resource name
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.files.get(name).map(PathBuf::as_path)
    }

    /// Files for a page's image and thumbnail
    pub fn page_assets(&self, page: &Page) -> PageAssets {
        let image = self.resolve(page.image_name()).map(Path::to_path_buf);
        let thumbnail = self
            .resolve(&page.thumbnail_name())
            .map(Path::to_path_buf)
            .or_else(|| image.clone());

        PageAssets { image, thumbnail }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan the asset folder on a background thread
///
/// Walking the folder touches the disk, so it runs off the UI thread.
pub async fn scan_async(dir: PathBuf) -> AssetIndex {
    let fallback = dir.clone();
    match tokio::task::spawn_blocking(move || AssetIndex::scan(&dir)).await {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!("Asset scan of {} failed: {}", fallback.display(), e);
            AssetIndex::default()
        }
    }
}

fn is_supported(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    #[test]
    fn test_scan_indexes_by_stem() {
        let tmp = TempDir::new().unwrap();
        let front = touch(tmp.path(), "magazine-front-cover.png");
        let thumb = touch(tmp.path(), "thumbs/thumb-magazine-front-cover.JPG");

        let index = AssetIndex::scan(tmp.path());

        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("magazine-front-cover"), Some(front.as_path()));
        assert_eq!(index.resolve("thumb-magazine-front-cover"), Some(thumb.as_path()));
        assert_eq!(index.resolve("magazine-back-cover"), None);
    }

    #[test]
    fn test_scan_ignores_unsupported_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "README");
        touch(tmp.path(), "cover.nef");

        let index = AssetIndex::scan(tmp.path());
        assert!(index.is_empty());
    }

    #[test]
    fn test_first_file_for_a_stem_wins() {
        let tmp = TempDir::new().unwrap();
        let jpg = touch(tmp.path(), "cover.jpg");
        touch(tmp.path(), "cover.png");

        let index = AssetIndex::scan(tmp.path());
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("cover"), Some(jpg.as_path()));
    }

    #[test]
    fn test_missing_folder_gives_empty_index() {
        let tmp = TempDir::new().unwrap();
        let index = AssetIndex::scan(&tmp.path().join("nope"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_page_assets_with_thumbnail() {
        let tmp = TempDir::new().unwrap();
        let image = touch(tmp.path(), "magazine-back-cover.png");
        let thumb = touch(tmp.path(), "thumb-magazine-back-cover.png");
        let index = AssetIndex::scan(tmp.path());

        let assets = index.page_assets(&Page::new(2, "magazine-back-cover"));
        assert_eq!(assets.image, Some(image));
        assert_eq!(assets.thumbnail, Some(thumb));
    }

    #[test]
    fn test_thumbnail_falls_back_to_image() {
        let tmp = TempDir::new().unwrap();
        let image = touch(tmp.path(), "magazine-front-cover.webp");
        let index = AssetIndex::scan(tmp.path());

        let assets = index.page_assets(&Page::new(1, "magazine-front-cover"));
        assert_eq!(assets.image, Some(image.clone()));
        assert_eq!(assets.thumbnail, Some(image));
    }

    #[test]
    fn test_page_without_files() {
        let assets = AssetIndex::default().page_assets(&Page::new(1, "magazine-front-cover"));
        assert_eq!(assets.image, None);
        assert_eq!(assets.thumbnail, None);
    }

    #[test]
    fn test_scan_async_matches_scan() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "magazine-front-cover.png");
        touch(tmp.path(), "thumb-magazine-front-cover.png");
        touch(tmp.path(), "nested/magazine-back-cover.jpg");

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let index = runtime.block_on(scan_async(tmp.path().to_path_buf()));

        assert_eq!(index.len(), 3);
        assert_eq!(index, AssetIndex::scan(tmp.path()));
    }

    #[test]
    fn test_scan_async_missing_folder() {
        let tmp = TempDir::new().unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let index = runtime.block_on(scan_async(tmp.path().join("nope")));

        assert!(index.is_empty());
    }
}
