use flipbook_core::PAGE_COUNT;
use flipbook_core::audio::FadeSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Shortest fade tick the viewer accepts.
const MIN_FADE_TICK_MS: u64 = 10;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub pages: Vec<String>,
    pub music_path: String,
    pub base_volume: f32,
    pub fade_step: f32,
    pub fade_tick_ms: u64,
    pub require_gesture: bool,
    pub log_level: LogLevel,
    pub key_next_page: String,
    pub key_prev_page: String,
    pub key_toggle_mute: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            pages: crate::config::defaults::default_pages(),
            music_path: crate::config::defaults::default_music_path(),
            base_volume: crate::config::defaults::default_base_volume(),
            fade_step: crate::config::defaults::default_fade_step(),
            fade_tick_ms: crate::config::defaults::default_fade_tick_ms(),
            require_gesture: crate::config::defaults::default_require_gesture(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
            key_toggle_mute: crate::config::defaults::default_key_toggle_mute(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    /// Clamp values the fade controller relies on and make sure there is
    /// exactly one image per page.
    pub(crate) fn sanitized(mut self) -> Self {
        if !self.base_volume.is_finite() || self.base_volume <= 0.0 || self.base_volume > 1.0 {
            warn!(
                base_volume = self.base_volume,
                "base_volume outside (0, 1]; using default"
            );
            self.base_volume = crate::config::defaults::default_base_volume();
        }
        if !self.fade_step.is_finite() || self.fade_step <= 0.0 {
            warn!(fade_step = self.fade_step, "fade_step must be positive; using default");
            self.fade_step = crate::config::defaults::default_fade_step();
        }
        self.fade_step = self.fade_step.min(self.base_volume);
        self.fade_tick_ms = self.fade_tick_ms.max(MIN_FADE_TICK_MS);

        if self.pages.len() != PAGE_COUNT {
            warn!(
                configured = self.pages.len(),
                expected = PAGE_COUNT,
                "Page list has the wrong length; filling from defaults"
            );
            let defaults = crate::config::defaults::default_pages();
            self.pages.truncate(PAGE_COUNT);
            let have = self.pages.len();
            self.pages.extend(defaults.into_iter().skip(have));
        }
        self
    }

    pub fn fade_settings(&self) -> FadeSettings {
        FadeSettings {
            base_volume: self.base_volume,
            step: self.fade_step,
            tick_interval: Duration::from_millis(self.fade_tick_ms),
        }
    }

    pub fn page_paths(&self) -> Vec<PathBuf> {
        self.pages.iter().map(PathBuf::from).collect()
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
