// SPDX-License-Identifier: MPL-2.0
//! Decoded photo cache keyed by photo id.
//!
//! - **LRU eviction**: least recently shown photos go first
//! - **Memory-bounded**: both an entry count and a byte budget apply
//! - **Id-keyed**: re-captioning a photo keeps its cached pixels

use super::catalog::PhotoId;
use crate::app::config::{CACHE_MAX_BYTES, DEFAULT_CACHE_MAX_IMAGES};
use crate::error::{Error, Result};
use crate::media::{self, ImageData};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct PhotoCache {
    cache: LruCache<PhotoId, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl PhotoCache {
    #[must_use]
    pub fn new(max_images: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_images)
            .or(NonZeroUsize::new(DEFAULT_CACHE_MAX_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_capacity(max_images: usize) -> Self {
        Self::new(max_images, CACHE_MAX_BYTES)
    }

    /// Stores a photo. Photos larger than half the byte budget are not kept.
    pub fn insert(&mut self, id: PhotoId, image: ImageData) -> bool {
        let size = image.size_bytes();
        if size > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&id) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }

        if let Some((_, evicted)) = self.cache.push(id, image) {
            // `push` hands back the LRU entry when the count limit is hit.
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        true
    }

    /// Looks a photo up and marks it most recently used.
    pub fn get(&mut self, id: PhotoId) -> Option<ImageData> {
        match self.cache.get(&id) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: PhotoId) -> bool {
        self.cache.contains(&id)
    }

    pub fn remove(&mut self, id: PhotoId) {
        if let Some(image) = self.cache.pop(&id) {
            self.current_bytes = self.current_bytes.saturating_sub(image.size_bytes());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Decodes a photo on the blocking pool.
pub async fn load_photo(id: PhotoId, path: PathBuf) -> (PhotoId, Result<ImageData>) {
    let result = tokio::task::spawn_blocking(move || media::load_image(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Photo loading task failed: {e}"))));
    (id, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn insert_and_get() {
        let mut cache = PhotoCache::with_capacity(4);
        assert!(cache.insert(PhotoId::new(1), image(10, 10)));
        assert_eq!(cache.get(PhotoId::new(1)).map(|i| i.width), Some(10));
        assert_eq!(cache.stats().hits, 1);
        assert!(cache.get(PhotoId::new(2)).is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn count_limit_evicts_least_recent() {
        let mut cache = PhotoCache::with_capacity(2);
        cache.insert(PhotoId::new(1), image(10, 10));
        cache.insert(PhotoId::new(2), image(10, 10));
        cache.get(PhotoId::new(1));
        cache.insert(PhotoId::new(3), image(10, 10));

        assert!(cache.contains(PhotoId::new(1)));
        assert!(!cache.contains(PhotoId::new(2)));
        assert_eq!(cache.memory_usage(), 2 * 400);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn byte_limit_evicts_until_room() {
        // Each 50x50 image is 10_000 bytes.
        let mut cache = PhotoCache::new(100, 25_000);
        cache.insert(PhotoId::new(1), image(50, 50));
        cache.insert(PhotoId::new(2), image(50, 50));
        cache.insert(PhotoId::new(3), image(50, 50));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(PhotoId::new(1)));
        assert!(cache.memory_usage() <= 25_000);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let mut cache = PhotoCache::new(10, 10_000);
        assert!(!cache.insert(PhotoId::new(1), image(50, 50)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_replaces_accounting() {
        let mut cache = PhotoCache::with_capacity(4);
        cache.insert(PhotoId::new(1), image(10, 10));
        cache.insert(PhotoId::new(1), image(20, 20));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 1600);
    }

    #[test]
    fn remove_frees_memory() {
        let mut cache = PhotoCache::with_capacity(4);
        cache.insert(PhotoId::new(1), image(10, 10));
        cache.remove(PhotoId::new(1));
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[tokio::test]
    async fn load_photo_reports_missing_file() {
        let (id, result) = load_photo(PhotoId::new(9), PathBuf::from("/nonexistent/9.jpg")).await;
        assert_eq!(id, PhotoId::new(9));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
