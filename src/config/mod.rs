//! Configuration module for Notat.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, NoteSettings, Settings, YoutubeSettings};
