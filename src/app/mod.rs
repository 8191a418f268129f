// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the music
//! control and the optional management panel.
//!
//! The `App` owns the working photo list and hands it to the components on
//! every call; components never keep their own copy.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use self::config::Config;
use crate::gallery::component as gallery;
use crate::gallery::PhotoLibrary;
use crate::i18n::fluent::I18n;
use crate::music::state as music;
use crate::ui::manager;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    library: PhotoLibrary,
    gallery: gallery::State,
    music: music::State,
    /// `None` unless the management panel is enabled.
    manager: Option<manager::State>,
    notifications: notifications::Manager,
    autoplay_delay: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.library.len())
            .field("gallery", &self.gallery)
            .field("music", &self.music.playback())
            .field("manager_enabled", &self.manager.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the content root and kicks off loading of
    /// the first photo.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(&config, &flags);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        tracing::info!(
            content_root = %app.gallery.content_root().display(),
            photos = app.library.len(),
            track = ?app.music.track(),
            manage = app.manager.is_some(),
            "keepsake started"
        );

        let task = app.gallery.sync(&app.library).map(Message::Gallery);
        (app, task)
    }

    fn from_config(config: &Config, flags: &Flags) -> Self {
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), config);
        let content_root = paths::resolve_content_root(
            flags.content_dir.as_deref(),
            config.gallery.content_dir.as_deref(),
        );
        let track: Option<PathBuf> = config
            .music
            .track
            .as_deref()
            .filter(|locator| !locator.is_empty())
            .map(|locator| paths::resolve_locator(&content_root, locator));

        let manage = flags.manage || config.gallery.management_panel;

        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            library: PhotoLibrary::catalog(),
            gallery: gallery::State::new(&config.gallery, content_root),
            music: music::State::new(&config.music, track),
            manager: manage.then(manager::State::default),
            notifications: notifications::Manager::new(),
            autoplay_delay: config.music.autoplay_delay(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.is_animating(),
            self.notifications.has_notifications(),
        );
        let autoplay_sub = subscription::create_autoplay_subscription(
            self.music.autoplay_attempted(),
            self.autoplay_delay,
        );
        let player_sub = subscription::create_player_subscription(self.music.source());

        Subscription::batch([event_sub, tick_sub, autoplay_sub, player_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            library: &mut self.library,
            gallery: &mut self.gallery,
            music: &mut self.music,
            manager: &mut self.manager,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Music(message) => update::handle_music_message(&mut ctx, message),
            Message::Manager(message) => update::handle_manager_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::PointerPressed(x) => update::handle_pointer_pressed(&mut ctx, x),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            library: &self.library,
            gallery: &self.gallery,
            music: &self.music,
            manager: self.manager.as_ref(),
            notifications: &self.notifications,
        })
    }
}
