// SPDX-License-Identifier: MPL-2.0
//! Photo gallery: the authored catalog, the in-memory working list and the
//! carousel that presents it.

pub mod cache;
pub mod carousel;
pub mod catalog;
pub mod component;
pub mod gesture;
pub mod library;
pub mod transition;

pub use carousel::{CarouselState, Direction};
pub use catalog::{PhotoId, PhotoRecord};
pub use library::PhotoLibrary;
