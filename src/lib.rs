// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a commemorative photo gallery with background music, built
//! with the Iced GUI framework.
//!
//! It shows an authored list of captioned photos in a carousel, loops a
//! background track behind an autoplay prompt, and can optionally let the
//! user add or remove content for the current run.

#![doc(html_root_url = "https://docs.rs/keepsake/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod music;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
