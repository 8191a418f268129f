// SPDX-License-Identifier: MPL-2.0
//! In-memory working list of photos.
//!
//! Starts from the authored catalog; the management panel may append,
//! remove and re-caption entries. Nothing here ever touches the disk.

use super::catalog::{self, PhotoId, PhotoRecord};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PhotoLibrary {
    photos: Vec<PhotoRecord>,
    next_id: u64,
}

impl Default for PhotoLibrary {
    fn default() -> Self {
        Self::catalog()
    }
}

impl PhotoLibrary {
    /// Library seeded with the authored catalog.
    #[must_use]
    pub fn catalog() -> Self {
        Self::from_records(catalog::catalog())
    }

    #[must_use]
    pub fn from_records(photos: Vec<PhotoRecord>) -> Self {
        let next_id = photos.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
        Self { photos, next_id }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PhotoRecord> {
        self.photos.get(index)
    }

    #[must_use]
    pub fn position(&self, id: PhotoId) -> Option<usize> {
        self.photos.iter().position(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.photos.iter()
    }

    /// Appends one record per file, in the given order.
    ///
    /// The caption is the file name without its final extension
    /// (`beach.day.jpg` becomes `beach.day`). Returns the new ids.
    pub fn add_files(&mut self, paths: &[PathBuf]) -> Vec<PhotoId> {
        paths
            .iter()
            .map(|path| {
                let id = self.allocate_id();
                self.photos.push(PhotoRecord::new(
                    id,
                    path.to_string_lossy(),
                    caption_from_path(path),
                ));
                id
            })
            .collect()
    }

    /// Removes a photo. Returns the index it occupied.
    pub fn remove(&mut self, id: PhotoId) -> Option<usize> {
        let index = self.position(id)?;
        self.photos.remove(index);
        Some(index)
    }

    /// Replaces a caption. Returns false when the id is unknown.
    pub fn set_caption(&mut self, id: PhotoId, caption: impl Into<String>) -> bool {
        match self.photos.iter_mut().find(|p| p.id == id) {
            Some(photo) => {
                photo.caption = caption.into();
                true
            }
            None => false,
        }
    }

    fn allocate_id(&mut self) -> PhotoId {
        let id = PhotoId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// File name without its final extension.
#[must_use]
pub fn caption_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_library_is_the_catalog() {
        let library = PhotoLibrary::default();
        assert_eq!(library.len(), catalog::CATALOG_LEN);
        assert_eq!(library.get(0).map(|p| p.id), Some(PhotoId::new(1)));
    }

    #[test]
    fn added_files_get_fresh_unique_ids() {
        let mut library = PhotoLibrary::catalog();
        let ids = library.add_files(&[
            PathBuf::from("/tmp/sea.jpg"),
            PathBuf::from("/tmp/forest.png"),
        ]);

        assert_eq!(ids, vec![PhotoId::new(36), PhotoId::new(37)]);
        let all: HashSet<_> = library.iter().map(|p| p.id).collect();
        assert_eq!(all.len(), library.len());
    }

    #[test]
    fn captions_drop_only_the_final_extension() {
        let mut library = PhotoLibrary::empty();
        library.add_files(&[
            PathBuf::from("/tmp/birthday.party.jpeg"),
            PathBuf::from("/tmp/noext"),
        ]);

        assert_eq!(library.get(0).map(|p| p.caption.as_str()), Some("birthday.party"));
        assert_eq!(library.get(1).map(|p| p.caption.as_str()), Some("noext"));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut library = PhotoLibrary::empty();
        let first = library.add_files(&[PathBuf::from("/tmp/a.jpg")]);
        library.remove(first[0]);
        let second = library.add_files(&[PathBuf::from("/tmp/b.jpg")]);

        assert_ne!(first[0], second[0]);
    }

    #[test]
    fn remove_reports_index() {
        let mut library = PhotoLibrary::catalog();
        assert_eq!(library.remove(PhotoId::new(3)), Some(2));
        assert_eq!(library.len(), catalog::CATALOG_LEN - 1);
        assert_eq!(library.remove(PhotoId::new(3)), None);
    }

    #[test]
    fn set_caption_updates_known_photo_only() {
        let mut library = PhotoLibrary::catalog();
        assert!(library.set_caption(PhotoId::new(1), "Первый день"));
        assert_eq!(library.get(0).map(|p| p.caption.as_str()), Some("Первый день"));
        assert!(!library.set_caption(PhotoId::new(999), "nope"));
    }
}
