// SPDX-License-Identifier: MPL-2.0
//! Photo decoding and cache behaviour against real files on disk.

use image_rs::{Rgba, RgbaImage};
use keepsake::error::Error;
use keepsake::gallery::cache::{load_photo, PhotoCache};
use keepsake::gallery::PhotoId;
use keepsake::media::{self, load_image};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 90, 255]))
        .save(&path)
        .expect("failed to write png");
    path
}

#[test]
fn decodes_png_with_its_dimensions() {
    let dir = tempdir().expect("temp dir");
    let path = write_png(dir.path(), "first-days.png", 12, 8);

    let image = load_image(&path).expect("png should decode");
    assert_eq!((image.width, image.height), (12, 8));
    assert_eq!(image.size_bytes(), 12 * 8 * 4);
}

#[test]
fn rasterizes_svg() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("heart.svg");
    fs::write(
        &path,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="red"/></svg>"#,
    )
    .expect("write svg");

    let image = load_image(&path).expect("svg should rasterize");
    assert_eq!((image.width, image.height), (20, 10));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_image(dir.path().join("nope.jpg"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn garbage_bytes_are_an_image_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.jpg");
    fs::write(&path, b"definitely not a jpeg").expect("write");

    let result = load_image(&path);
    assert!(matches!(result, Err(Error::Image(_))));
}

#[test]
fn extension_filters_match_picker_choices() {
    assert!(media::is_supported_image(Path::new("/tmp/Photo.JPG")));
    assert!(media::is_supported_audio(Path::new("/tmp/song.ogg")));
    assert!(!media::is_supported_image(Path::new("/tmp/song.ogg")));
    assert!(!media::is_supported_audio(Path::new("/tmp/notes.txt")));
}

#[tokio::test]
async fn load_photo_reports_the_requested_id() {
    let dir = tempdir().expect("temp dir");
    let path = write_png(dir.path(), "mom.png", 4, 4);

    let (id, result) = load_photo(PhotoId::new(7), path).await;
    assert_eq!(id, PhotoId::new(7));
    assert!(result.is_ok());

    let (id, result) = load_photo(PhotoId::new(8), dir.path().join("gone.png")).await;
    assert_eq!(id, PhotoId::new(8));
    assert!(result.is_err());
}

#[test]
fn cache_keeps_recent_photos_within_capacity() {
    let dir = tempdir().expect("temp dir");
    let mut cache = PhotoCache::with_capacity(2);

    for n in 1..=3u64 {
        let path = write_png(dir.path(), &format!("{n}.png"), 6, 6);
        let image = load_image(&path).expect("decode");
        cache.insert(PhotoId::new(n), image);
    }

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(PhotoId::new(1)));
    assert!(cache.get(PhotoId::new(3)).is_some());
}
