use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::call::Call;
use crate::floor::FloorBounds;

pub const DEFAULT_FULL_LOAD_THRESHOLD: f64 = 0.8;

const CONFIG_FILE_PATH: &str = "config.json";
const FALLBACK_CONFIG_FILE_PATH: &str = "_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Load factor above which a car stops picking up new hallway calls.
    pub full_load_threshold: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig { full_load_threshold: DEFAULT_FULL_LOAD_THRESHOLD }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_floors: u8,
    pub bottom_floor: u8,
    pub num_cars: u8,
    pub tick_ms: u64,
    pub ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_floors: 10,
            bottom_floor: 0,
            num_cars: 2,
            tick_ms: 200,
            ticks: 120,
        }
    }
}

impl SimulationConfig {
    pub fn bounds(&self) -> Result<FloorBounds, ConfigError> {
        if self.num_floors == 0 {
            return Err(ConfigError::Invalid(String::from("num_floors must be at least 1")));
        }
        let top = self.bottom_floor.checked_add(self.num_floors - 1).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "{} floors starting at {} exceed the highest floor number {}",
                self.num_floors, self.bottom_floor, u8::MAX
            ))
        })?;
        FloorBounds::new(self.bottom_floor, top)
            .ok_or_else(|| ConfigError::Invalid(String::from("empty floor range")))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ScenarioAction {
    Press {
        call: Call,
        floor: u8,
        #[serde(default)]
        car: Option<u8>,
    },
    Load {
        load: f64,
        car: u8,
    },
}

/// Something the simulated building does at a given tick.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioEntry {
    pub tick: u64,
    #[serde(flatten)]
    pub action: ScenarioAction,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dispatch: DispatchConfig,
    pub simulation: SimulationConfig,
    pub scenario: Vec<ScenarioEntry>,
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

fn read_config_file(path: Option<&Path>) -> Result<String, ConfigError> {
    if let Some(path) = path {
        return read_file(path)
    }
    match fs::read_to_string(CONFIG_FILE_PATH) {
        Ok(content) => Ok(content),
        Err(_) => {
            info!("No configuration file provided, using default settings...");
            read_file(Path::new(FALLBACK_CONFIG_FILE_PATH))
        },
    }
}

impl Config {
    /// Reads `path`, or `config.json` with `_config.json` as fallback.
    pub fn get(path: Option<&Path>) -> Result<Self, ConfigError> {
        let contents = read_config_file(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.dispatch.full_load_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "full_load_threshold {} is outside (0, 1]", threshold
            )))
        }
        if self.simulation.num_cars == 0 {
            return Err(ConfigError::Invalid(String::from("num_cars must be at least 1")))
        }
        let bounds = self.simulation.bounds()?;
        for entry in &self.scenario {
            self.validate_entry(entry, bounds)?;
        }
        if self.scenario.iter().any(|entry| entry.tick >= self.simulation.ticks) {
            warn!("Some scenario entries are scheduled after the last tick and will never run");
        }
        Ok(())
    }

    fn validate_entry(&self, entry: &ScenarioEntry, bounds: FloorBounds) -> Result<(), ConfigError> {
        let check_car = |car: u8| {
            if car >= self.simulation.num_cars {
                return Err(ConfigError::Invalid(format!(
                    "scenario tick {}: car {} does not exist", entry.tick, car
                )))
            }
            Ok(())
        };
        match entry.action {
            ScenarioAction::Press { call, floor, car } => {
                if !bounds.contains(floor) {
                    return Err(ConfigError::Invalid(format!(
                        "scenario tick {}: floor {} is outside {}..={}",
                        entry.tick, floor, bounds.bottom, bounds.top
                    )))
                }
                match (call, car) {
                    (Call::Rider, Some(car)) => check_car(car),
                    (Call::Rider, None) => Err(ConfigError::Invalid(format!(
                        "scenario tick {}: rider call needs a car", entry.tick
                    ))),
                    (_, _) => Ok(()),
                }
            },
            ScenarioAction::Load { load, car } => {
                if !(0.0..=1.0).contains(&load) {
                    return Err(ConfigError::Invalid(format!(
                        "scenario tick {}: load {} is outside [0, 1]", entry.tick, load
                    )))
                }
                check_car(car)
            },
        }
    }
}
