use crate::config::Config;
use crate::Grid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },
    #[error("special fruit relocation interval must be positive, got {0}")]
    BadInterval(f32),
    #[error("special fruit threshold must be at least 1")]
    ZeroThreshold,
}

/// Immutable rules a game is played under.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameRules {
    pub grid: Grid,
    pub regular_fruit_value: u32,
    pub special_fruit_value: u32,
    /// Regular fruit needed before a special fruit appears.
    pub special_fruit_threshold: u32,
    /// Seconds an uneaten special fruit stays put before relocating.
    pub special_fruit_relocate_secs: f32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            grid: Grid::new(20, 15),
            regular_fruit_value: 1,
            special_fruit_value: 5,
            special_fruit_threshold: 10,
            special_fruit_relocate_secs: 3.0,
        }
    }
}

impl GameRules {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        if config.grid_width < 1 || config.grid_height < 1 {
            return Err(ConfigError::EmptyGrid { width: config.grid_width, height: config.grid_height });
        }
        if !(config.special_fruit_relocate_secs.is_finite() && config.special_fruit_relocate_secs > 0.0) {
            return Err(ConfigError::BadInterval(config.special_fruit_relocate_secs));
        }
        if config.special_fruit_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            regular_fruit_value: config.regular_fruit_value,
            special_fruit_value: config.special_fruit_value,
            special_fruit_threshold: config.special_fruit_threshold,
            special_fruit_relocate_secs: config.special_fruit_relocate_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_gives_default_rules() {
        assert_eq!(GameRules::from_config(&Config::default()), Ok(GameRules::default()));
    }

    #[test]
    fn rejects_degenerate_values() {
        let empty = Config { grid_width: 0, ..Config::default() };
        assert!(matches!(GameRules::from_config(&empty), Err(ConfigError::EmptyGrid { .. })));

        let interval = Config { special_fruit_relocate_secs: -1.0, ..Config::default() };
        assert_eq!(GameRules::from_config(&interval), Err(ConfigError::BadInterval(-1.0)));

        let threshold = Config { special_fruit_threshold: 0, ..Config::default() };
        assert_eq!(GameRules::from_config(&threshold), Err(ConfigError::ZeroThreshold));
    }
}
