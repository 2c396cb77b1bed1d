//! vitals configuration (vitalsrc, htoprc-style key=value format)
//!
//! Loads `$XDG_CONFIG_HOME/vitals/vitalsrc` (or `~/.config/vitals/vitalsrc`,
//! `%APPDATA%\vitals\vitalsrc` on Windows). Missing file means defaults;
//! CLI flags override whatever the file said.

use std::fs;
use std::path::PathBuf;

pub const DEFAULT_HISTORY_SIZE: usize = 50;
pub const DEFAULT_BAR_WIDTH: usize = 30;
pub const DEFAULT_INTERVAL_MS: u64 = 250;
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Get the config file path
fn config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("vitals").join("vitalsrc"));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("vitals").join("vitalsrc"));
    }
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join("vitals").join("vitalsrc"))
}

/// Resolved runtime settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Samples kept per sparkline
    pub history_size: usize,
    /// Usage bar width in cells
    pub bar_width: usize,
    /// Sampling cadence. Independent of `refresh_ms`: sampling decides how
    /// often new data lands, refresh how often the terminal repaints.
    pub interval_ms: u64,
    /// Display refresh cadence (the event-poll timeout)
    pub refresh_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            bar_width: DEFAULT_BAR_WIDTH,
            interval_ms: DEFAULT_INTERVAL_MS,
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}

impl Settings {
    /// Load settings from the rc file, returning defaults if it doesn't exist
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => return Self::default(),
        };
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse key=value lines; unknown keys and malformed values are ignored
    fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "history_size" => {
                        if let Ok(v) = value.parse::<usize>() {
                            cfg.history_size = clamp_history(v);
                        }
                    }
                    "bar_width" => {
                        if let Ok(v) = value.parse::<usize>() {
                            cfg.bar_width = clamp_bar_width(v);
                        }
                    }
                    "interval_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.interval_ms = clamp_ms(v);
                        }
                    }
                    "refresh_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.refresh_ms = clamp_ms(v);
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    /// Apply CLI overrides on top of the file values
    pub fn apply_overrides(
        &mut self,
        history_size: Option<usize>,
        bar_width: Option<usize>,
        interval_ms: Option<u64>,
        refresh_ms: Option<u64>,
    ) {
        if let Some(v) = history_size {
            self.history_size = clamp_history(v);
        }
        if let Some(v) = bar_width {
            self.bar_width = clamp_bar_width(v);
        }
        if let Some(v) = interval_ms {
            self.interval_ms = clamp_ms(v);
        }
        if let Some(v) = refresh_ms {
            self.refresh_ms = clamp_ms(v);
        }
    }
}

fn clamp_history(v: usize) -> usize {
    v.clamp(2, 500)
}

fn clamp_bar_width(v: usize) -> usize {
    v.clamp(5, 200)
}

fn clamp_ms(v: u64) -> u64 {
    v.clamp(50, 60_000)
}
