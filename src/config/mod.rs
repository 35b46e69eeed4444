//! Configuration management for the life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, InputConfig, OutputConfig, Settings, SimulationConfig,
};
