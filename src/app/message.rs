// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::component as gallery;
use crate::music::state as music;
use crate::ui::manager;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Music(music::Message),
    Manager(manager::Message),
    Notification(notifications::NotificationMessage),
    /// A mouse button or finger went down anywhere in the window.
    /// Touch carries the x coordinate; mouse positions arrive as moves.
    PointerPressed(Option<f32>),
    /// Animation and toast tick.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Directory holding `photos/` and `music/`.
    pub content_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `KEEPSAKE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Show the content management panel.
    pub manage: bool,
}
