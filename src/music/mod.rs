// SPDX-License-Identifier: MPL-2.0
//! Background music: control state, the playback engine and its view.
//!
//! The engine runs as a subscription keyed by the audio source. It decodes
//! the whole track with FFmpeg on first play and loops it through cpal.

pub mod component;
pub mod decoder;
pub mod output;
pub mod player;
pub mod state;
pub mod volume;

pub use volume::Volume;
