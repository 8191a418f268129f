// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks shared by the page.
//!
//! The gallery and the music control live in their own modules; this one
//! holds the management panel and everything the views have in common.
//!
//! - [`manager`] - Content management side panel (photos and music)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod manager;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
