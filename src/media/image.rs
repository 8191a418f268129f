// SPDX-License-Identifier: MPL-2.0
//! Photo loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::app::config::MAX_PHOTO_EDGE_PX;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageDecoder, ImageReader};
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tiny_skia;

/// A decoded photo ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Bytes held by the decoded pixels (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Load a photo from the given path.
///
/// Raster formats honour the EXIF orientation and are downscaled so the
/// longest edge fits `MAX_PHOTO_EDGE_PX`. SVG files are rasterized with resvg
/// under the same edge limit.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// it cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        load_svg(path)
    } else {
        let bytes = fs::read(path)?;
        decode_raster(&bytes)
    }
}

fn load_svg(path: &Path) -> Result<ImageData> {
    let svg_data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let size = tree.size();
    let (width, height, scale) = svg_raster_size(size.width(), size.height(), MAX_PHOTO_EDGE_PX)
        .ok_or_else(|| Error::Image("SVG has empty dimensions".into()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Decodes an encoded raster image held in memory.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unknown or the data is corrupt.
pub fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    let img = fit_within(img, MAX_PHOTO_EDGE_PX);
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Pixmap size and scale for an SVG of the given declared size.
///
/// The longest edge is capped at `max_edge`; smaller documents render at
/// their own size. `None` when either side rounds to zero.
fn svg_raster_size(width: f32, height: f32, max_edge: u32) -> Option<(u32, u32, f32)> {
    let longest = width.max(height);
    if !longest.is_finite() || longest <= 0.0 {
        return None;
    }
    let scale = (max_edge as f32 / longest).min(1.0);
    let scaled_width = (width * scale).round() as u32;
    let scaled_height = (height * scale).round() as u32;
    if scaled_width == 0 || scaled_height == 0 {
        return None;
    }
    Some((scaled_width, scaled_height, scale))
}

fn fit_within(img: DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width.max(height) <= max_edge {
        return img;
    }
    img.resize(max_edge, max_edge, image_rs::imageops::FilterType::Triangle)
}
