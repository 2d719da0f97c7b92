use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    book: BookConfig,
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.window.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            pages: tables.book.pages,
            music_path: tables.audio.music_path,
            base_volume: tables.audio.base_volume,
            fade_step: tables.audio.fade_step,
            fade_tick_ms: tables.audio.fade_tick_ms,
            require_gesture: tables.audio.require_gesture,
            log_level: tables.logging.log_level,
            key_next_page: tables.keys.next_page,
            key_prev_page: tables.keys.prev_page,
            key_toggle_mute: tables.keys.toggle_mute,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            theme: ThemeMode::default(),
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct BookConfig {
    #[serde(default = "defaults::default_pages")]
    pages: Vec<String>,
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            pages: defaults::default_pages(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AudioConfig {
    #[serde(default = "defaults::default_music_path")]
    music_path: String,
    #[serde(default = "defaults::default_base_volume")]
    base_volume: f32,
    #[serde(default = "defaults::default_fade_step")]
    fade_step: f32,
    #[serde(default = "defaults::default_fade_tick_ms")]
    fade_tick_ms: u64,
    #[serde(default = "defaults::default_require_gesture")]
    require_gesture: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            music_path: defaults::default_music_path(),
            base_volume: defaults::default_base_volume(),
            fade_step: defaults::default_fade_step(),
            fade_tick_ms: defaults::default_fade_tick_ms(),
            require_gesture: defaults::default_require_gesture(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_page")]
    next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    prev_page: String,
    #[serde(default = "defaults::default_key_toggle_mute")]
    toggle_mute: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_page: defaults::default_key_next_page(),
            prev_page: defaults::default_key_prev_page(),
            toggle_mute: defaults::default_key_toggle_mute(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
