use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub seed: u64,
}

/// Health costs and regeneration rates, all per second of elapsed time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MetabolismConfig {
    pub move_cost: f64,
    pub burst_cost: f64,
    pub idle_cost: f64,
    pub rest_regen_rate: f64,
    pub rest_regen_threshold: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub metabolism: MetabolismConfig,
    pub target_fps: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 450.0,
            seed: 0,
        }
    }
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            move_cost: 0.25,
            burst_cost: 1.0,
            idle_cost: 0.01,
            rest_regen_rate: 0.8,
            rest_regen_threshold: 50.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            metabolism: MetabolismConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults (and writing them
    /// out) when the file is missing or malformed.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
            tracing::warn!(path, "config file is malformed, using defaults");
        }
        let default = Self::default();
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }
}
