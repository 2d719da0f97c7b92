pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_pages() -> Vec<String> {
    (1..=flipbook_core::PAGE_COUNT)
        .map(|n| format!("assets/page{n}.png"))
        .collect()
}

pub(crate) fn default_music_path() -> String {
    "assets/music.mpeg".to_string()
}

pub(crate) fn default_base_volume() -> f32 {
    flipbook_core::audio::DEFAULT_BASE_VOLUME
}

pub(crate) fn default_fade_step() -> f32 {
    flipbook_core::audio::DEFAULT_FADE_STEP
}

pub(crate) fn default_fade_tick_ms() -> u64 {
    flipbook_core::audio::DEFAULT_FADE_TICK.as_millis() as u64
}

pub(crate) fn default_require_gesture() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_toggle_mute() -> String {
    "m".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
