//! Configuration settings for the life simulator

use crate::game_of_life::io::DEFAULT_PATTERN;
use crate::game_of_life::{Glyphs, RuleKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub rules: Vec<RuleKind>,
    pub input: InputConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    pub delay_ms: u64,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Inline starting pattern, used when no pattern file is set
    pub pattern: String,
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub alive: char,
    pub dead: char,
    pub pad: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON run history, if anywhere
    pub history_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            rules: RuleKind::defaults(),
            input: InputConfig::default(),
            display: DisplayConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            delay_ms: 100,
            clear_screen: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            pattern_file: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            alive: glyphs.alive,
            dead: glyphs.dead,
            pad: 0,
        }
    }
}

impl SimulationConfig {
    /// Pause between animation frames
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl DisplayConfig {
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            alive: self.alive,
            dead: self.dead,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.rules.is_empty() {
            anyhow::bail!("At least one rule must be active");
        }

        if self.display.alive == self.display.dead {
            anyhow::bail!(
                "Alive and dead glyphs must differ, both are '{}'",
                self.display.alive
            );
        }

        if self.display.alive.is_whitespace() {
            anyhow::bail!("Alive glyph cannot be whitespace");
        }

        if let Some(ref pattern_file) = self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if cli_overrides.no_clear {
            self.simulation.clear_screen = false;
        }
        if let Some(ref rules) = cli_overrides.rules {
            self.rules = rules.clone();
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(pad) = cli_overrides.pad {
            self.display.pad = pad;
        }
        if let Some(ref history_file) = cli_overrides.history_file {
            self.output.history_file = Some(history_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub no_clear: bool,
    pub rules: Option<Vec<RuleKind>>,
    pub pattern_file: Option<PathBuf>,
    pub pad: Option<u32>,
    pub history_file: Option<PathBuf>,
}
