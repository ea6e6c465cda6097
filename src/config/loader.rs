//! Schedule loading functionality.
//!
//! This module provides the [`ScheduleLoader`] type for loading fiscal
//! schedules from YAML files and selecting one by year.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::schedule::FiscalSchedule;

use super::types::ScheduleConfig;

/// Loads and provides access to fiscal schedules.
///
/// # Directory Structure
///
/// ```text
/// config/schedules/
/// ├── 2024.yaml
/// └── 2025.yaml
/// ```
///
/// Every `*.yaml` file in the directory is a complete schedule; the year
/// is read from the file content, not from its name.
///
/// # Example
///
/// ```no_run
/// use impot_engine::config::ScheduleLoader;
///
/// let loader = ScheduleLoader::load("./config/schedules")?;
/// let schedule = loader.get(2024)?;
/// println!("Loaded schedule: {}", schedule.name());
/// # Ok::<(), impot_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    schedules: BTreeMap<i32, FiscalSchedule>,
}

impl ScheduleLoader {
    /// Loads every schedule in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ScheduleLoader` on success, or an error if:
    /// - The directory is missing or holds no schedule file
    /// - Any file contains invalid YAML or misses a field
    /// - Any schedule fails validation
    /// - Two files declare the same year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_file(&path)?;
                let year = schedule.year();
                if let Some(existing) = schedules.insert(year, schedule) {
                    return Err(EngineError::InvalidSchedule {
                        name: existing.name().to_string(),
                        message: format!("year {} is declared by more than one file", year),
                    });
                }
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        Ok(Self { schedules })
    }

    /// Loads and validates a single schedule file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<FiscalSchedule> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ScheduleConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, name = %config.name, year = config.year, "Loaded schedule file");

        FiscalSchedule::new(config)
    }

    /// Gets the schedule for a year.
    ///
    /// # Returns
    ///
    /// Returns the schedule if loaded, or `ScheduleNotFound`.
    pub fn get(&self, year: i32) -> EngineResult<&FiscalSchedule> {
        self.schedules
            .get(&year)
            .ok_or(EngineError::ScheduleNotFound { year })
    }

    /// Returns the schedule with the highest year.
    pub fn latest(&self) -> Option<&FiscalSchedule> {
        self.schedules.values().next_back()
    }

    /// Returns the loaded years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.schedules.keys().copied().collect()
    }
}
