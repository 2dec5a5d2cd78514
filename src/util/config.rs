use log::info;
use serde;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::util::constants as setting;
use crate::util::error::{DispatchError, DispatchResult};

/// Settings for one dispatch run, read from a JSON file.
///
/// Every field is optional in the file; missing ones fall back to [`DispatchConfig::default`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub num_floors: u8,
    pub num_cars: usize,
    pub tick_ms: u64,
    /// Stop the simulated run after this many seconds. Runs forever when absent.
    pub run_seconds: Option<u64>,
    /// Chance per tick that a random floor call button is pressed.
    pub call_probability: f64,
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for DispatchConfig {
    fn default() -> DispatchConfig {
        DispatchConfig {
            num_floors: setting::DEFAULT_NUM_FLOORS,
            num_cars: setting::DEFAULT_NUM_CARS,
            tick_ms: setting::DEFAULT_TICK_MS,
            run_seconds: None,
            call_probability: setting::DEFAULT_CALL_PROBABILITY,
            seed: None,
            log_level: setting::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DispatchConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> DispatchResult<DispatchConfig> {
        let file = File::open(path)?;
        let config: DispatchConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DispatchResult<()> {
        if self.num_floors == 0 {
            return Err(DispatchError::NoFloors);
        }
        if self.num_cars == 0 {
            return Err(DispatchError::Config("num_cars must be at least 1".to_string()));
        }
        if self.tick_ms == 0 {
            return Err(DispatchError::Config("tick_ms must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.call_probability) {
            return Err(DispatchError::Config(format!(
                "call_probability {} is outside [0, 1]",
                self.call_probability
            )));
        }
        Ok(())
    }

    pub fn print(&self) {
        info!("floors: {}, cars: {}", self.num_floors, self.num_cars);
        info!("tick period: {} ms", self.tick_ms);
        match self.run_seconds {
            Some(s) => info!("running for {} s", s),
            None => info!("running until interrupted"),
        }
        info!("call probability per tick: {}", self.call_probability);
    }
}
