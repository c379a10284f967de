//! Game configuration.
//!
//! Defaults come from the constants in [`crate::types`]. The binary layers a
//! few `RFK_*` environment variables on top.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::types::{CELL_SIZE, COLUMNS, DEFAULT_ARTIFACTS, FRAME_RATE, ROWS};

pub const ENV_SEED: &str = "RFK_SEED";
pub const ENV_ARTIFACTS: &str = "RFK_ARTIFACTS";
pub const ENV_FPS: &str = "RFK_FPS";
pub const ENV_MESSAGES: &str = "RFK_MESSAGES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub caption: String,
    /// Grid width in cells
    pub columns: u16,
    /// Grid height in cells
    pub rows: u16,
    pub cell_size: i32,
    pub frame_rate: u32,
    pub artifact_count: usize,
    pub seed: u32,
    /// Optional message file, one message per line.
    pub messages_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            caption: "Robot Finds Kitten".to_string(),
            columns: COLUMNS,
            rows: ROWS,
            cell_size: CELL_SIZE,
            frame_rate: FRAME_RATE,
            artifact_count: DEFAULT_ARTIFACTS,
            seed: 1,
            messages_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `RFK_SEED`, `RFK_ARTIFACTS`, `RFK_FPS` and `RFK_MESSAGES`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_SEED) {
            config.seed = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SEED} must be an unsigned integer, got {v:?}"))?;
        }
        if let Some(v) = lookup(ENV_ARTIFACTS) {
            config.artifact_count = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_ARTIFACTS} must be an unsigned integer, got {v:?}"))?;
        }
        if let Some(v) = lookup(ENV_FPS) {
            config.frame_rate = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_FPS} must be an unsigned integer, got {v:?}"))?;
        }
        if let Some(v) = lookup(ENV_MESSAGES) {
            if !v.trim().is_empty() {
                config.messages_path = Some(PathBuf::from(v));
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            bail!("grid must be at least 1x1, got {}x{}", self.columns, self.rows);
        }
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.frame_rate == 0 {
            bail!("frame rate must be positive");
        }
        if self.artifact_count == 0 {
            return Ok(());
        }
        // Artifacts never go on row 0 (the banner row) or column 0.
        if self.columns < 2 || self.rows < 2 {
            bail!(
                "artifacts need a grid of at least 2x2, got {}x{}",
                self.columns,
                self.rows
            );
        }
        let cells = (self.columns as usize - 1) * (self.rows as usize - 1);
        if self.artifact_count > cells {
            bail!(
                "{} artifacts do not fit on a {}x{} grid",
                self.artifact_count,
                self.columns,
                self.rows
            );
        }
        Ok(())
    }

    /// Grid width in position units.
    pub fn max_x(&self) -> i32 {
        self.columns as i32 * self.cell_size
    }

    /// Grid height in position units.
    pub fn max_y(&self) -> i32 {
        self.rows as i32 * self.cell_size
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.frame_rate.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_x(), 60);
        assert_eq!(config.max_y(), 20);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (ENV_SEED, "42"),
            (ENV_ARTIFACTS, " 7 "),
            (ENV_FPS, "30"),
            (ENV_MESSAGES, "msgs.txt"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.artifact_count, 7);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.messages_path, Some(PathBuf::from("msgs.txt")));
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_SEED, "abc")])).unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(GameConfig::from_lookup(lookup_from(&[(ENV_FPS, "0")])).is_err());
    }

    #[test]
    fn too_many_artifacts_are_rejected() {
        let config = GameConfig {
            columns: 2,
            rows: 2,
            artifact_count: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn single_row_or_column_grids_cannot_hold_artifacts() {
        for (columns, rows) in [(5, 1), (1, 5), (1, 1)] {
            let config = GameConfig {
                columns,
                rows,
                artifact_count: 1,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err(), "{columns}x{rows} accepted");

            let empty = GameConfig {
                artifact_count: 0,
                ..config
            };
            empty.validate().unwrap();
        }
    }

    #[test]
    fn capacity_excludes_the_first_row_and_column() {
        let full = GameConfig {
            columns: 3,
            rows: 3,
            artifact_count: 4,
            ..GameConfig::default()
        };
        full.validate().unwrap();

        let over = GameConfig {
            artifact_count: 5,
            ..full
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn frame_duration_matches_rate() {
        let config = GameConfig {
            frame_rate: 10,
            ..GameConfig::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(100));
    }
}
