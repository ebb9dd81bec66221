//! Configuration loader for fruitsnake.
//!
//! * Looks for `fruitsnake.toml` in the cwd unless overridden by `--config`.
//! * Provides defaults so the file is optional.
//!
//! Extend this struct whenever you add new tunables.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

pub const DEFAULT_CONFIG_PATH: &str = "fruitsnake.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Board size in cells.
    pub grid_width:     i32,
    pub grid_height:    i32,
    /// Pixels per cell; rendering only.
    pub tile_size:      f32,
    pub regular_fruit_value: u32,
    pub special_fruit_value: u32,
    /// Regular fruit needed before the special fruit shows up.
    pub special_fruit_threshold: u32,
    pub special_fruit_relocate_secs: f32,
    /// Initial speed level on the start screen (1-10).
    pub speed_level:    u8,
    pub high_score_path: String,
    /// Zero the stored high score when the program exits.
    pub reset_high_score_on_exit: bool,
    /// Random seed (optional).
    pub seed:           Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            tile_size: 40.0,
            regular_fruit_value: 1,
            special_fruit_value: 5,
            special_fruit_threshold: 10,
            special_fruit_relocate_secs: 3.0,
            speed_level: 5,
            high_score_path: "highscore.txt".to_string(),
            reset_high_score_on_exit: false,
            seed: None,
        }
    }
}

impl Config {
    /// Load from a TOML file; fall back to defaults on any error.
    pub fn load(path: Option<&str>) -> Self {
        let p = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match fs::read_to_string(p) {
            Ok(text) => Self::parse(&text).unwrap_or_else(|e| {
                warn!("ignoring malformed config {p}: {e}");
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("cannot read config {p}: {e}");
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = Config::parse("grid_width = 30\nseed = 9\nreset_high_score_on_exit = true\n").unwrap();
        assert_eq!(cfg.grid_width, 30);
        assert_eq!(cfg.grid_height, 15);
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.reset_high_score_on_exit);
        assert_eq!(cfg.high_score_path, "highscore.txt");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse("grid_width = \"wide\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load(Some("/definitely/not/here/fruitsnake.toml"));
        assert_eq!(cfg, Config::default());
    }
}
