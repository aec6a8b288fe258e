/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of atlas-rotor.
 *
 * atlas-rotor is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * atlas-rotor is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with atlas-rotor. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use rotor_aero::ChordFractionFormula;

/// Operating case for a single rotor analysis run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RotorSettings {
    num_elements: usize,
    rotor_radius: f64,
    cutout_radius: f64,
    blade_count: u32,
    height: f64,
    climb_velocity: f64,
    air_density: f64,
    angular_velocity: f64,
    lift_coefficient: f64,
    chord: f64,
    chord_fraction_formula: ChordFractionFormula
}

impl RotorSettings {
    const NUM_ELEMENTS: &'static str = "num_elements";
    const ROTOR_RADIUS: &'static str = "rotor_radius";
    const CUTOUT_RADIUS: &'static str = "cutout_radius";
    const BLADE_COUNT: &'static str = "blade_count";
    const HEIGHT: &'static str = "height";
    const CLIMB_VELOCITY: &'static str = "climb_velocity";
    const AIR_DENSITY: &'static str = "air_density";
    const ANGULAR_VELOCITY: &'static str = "angular_velocity";
    const LIFT_COEFFICIENT: &'static str = "lift_coefficient";
    const CHORD: &'static str = "chord";
    const CHORD_FRACTION_FORMULA: &'static str = "chord_fraction_formula";
    pub const CONFIG_FILENAME: &'static str = "atlas-rotor-conf";
    const ENV_PREFIX: &'static str = "ATLAS";

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = RotorSettings::default();
        Config::builder()
            .set_default(RotorSettings::NUM_ELEMENTS, defaults.num_elements as i64)?
            .set_default(RotorSettings::ROTOR_RADIUS, defaults.rotor_radius)?
            .set_default(RotorSettings::CUTOUT_RADIUS, defaults.cutout_radius)?
            .set_default(RotorSettings::BLADE_COUNT, defaults.blade_count as i64)?
            .set_default(RotorSettings::HEIGHT, defaults.height)?
            .set_default(RotorSettings::CLIMB_VELOCITY, defaults.climb_velocity)?
            .set_default(RotorSettings::AIR_DENSITY, defaults.air_density)?
            .set_default(RotorSettings::ANGULAR_VELOCITY, defaults.angular_velocity)?
            .set_default(RotorSettings::LIFT_COEFFICIENT, defaults.lift_coefficient)?
            .set_default(RotorSettings::CHORD, defaults.chord)?
            .set_default(RotorSettings::CHORD_FRACTION_FORMULA, defaults.chord_fraction_formula.as_str())
    }

    /// Loads `<config_name>.toml` layered over the defaults, with `ATLAS_*` environment
    /// variables taking precedence. A trailing `.toml` on `config_name` is ignored.
    ///
    /// A missing file isn't an error: the defaults are written out so there is something to
    /// edit next time. A file that exists but can't be parsed is returned as an error and
    /// left untouched.
    pub fn load(config_name: &str) -> Result<Self, ConfigError> {
        RotorSettings::load_with_env(config_name,
                                     config::Environment::with_prefix(RotorSettings::ENV_PREFIX))
    }

    fn load_with_env(config_name: &str, env: config::Environment) -> Result<Self, ConfigError> {
        let file_path = config_file_path(config_name);
        let file_exists = file_path.is_file();
        if !file_exists {
            warn!("No settings found at {}. Using defaults", file_path.display());
        }
        let settings: RotorSettings = RotorSettings::builder_with_defaults()?
            .add_source(config::File::new(&file_path.to_string_lossy(), config::FileFormat::Toml).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        if !file_exists {
            RotorSettings::default().write(config_name).unwrap_or_else(|e| {
                error!("Failed to write settings to {}. {}", file_path.display(), e.to_string())
            });
        }
        Ok(settings)
    }

    #[cfg(test)]
    pub(crate) fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        RotorSettings::builder_with_defaults()?
            .add_source(config::File::from_str(data, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    pub fn rotor_radius(&self) -> f64 {
        self.rotor_radius
    }

    pub fn cutout_radius(&self) -> f64 {
        self.cutout_radius
    }

    pub fn blade_count(&self) -> u32 {
        self.blade_count
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn climb_velocity(&self) -> f64 {
        self.climb_velocity
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn lift_coefficient(&self) -> f64 {
        self.lift_coefficient
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn chord_fraction_formula(&self) -> ChordFractionFormula {
        self.chord_fraction_formula
    }

    pub fn write(&self, config_name: &str) -> std::io::Result<()> {
        fs::write(config_file_path(config_name), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

fn config_file_path(config_name: &str) -> PathBuf {
    let stem = config_name.strip_suffix(".toml").unwrap_or(config_name);
    PathBuf::from(format!("{}.toml", stem))
}

impl Default for RotorSettings {
    fn default() -> Self {
        RotorSettings {
            num_elements: 10,
            rotor_radius: 10.0,
            cutout_radius: 0.75,
            blade_count: 2,
            height: 3.0,
            climb_velocity: 0.0,
            air_density: 1.18,
            angular_velocity: 1.0,
            lift_coefficient: 1.0,
            chord: 1.0,
            chord_fraction_formula: ChordFractionFormula::AsWritten
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use rotor_aero::ChordFractionFormula;
    use crate::settings::{config_file_path, RotorSettings};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("atlas-rotor-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn no_env() -> config::Environment {
        config::Environment::with_prefix(RotorSettings::ENV_PREFIX).source(Some(config::Map::new()))
    }

    fn env_with(key: &str, value: &str) -> config::Environment {
        let mut vars = config::Map::new();
        vars.insert(key.to_string(), value.to_string());
        config::Environment::with_prefix(RotorSettings::ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let settings = RotorSettings::from_toml_str(r#"
            num_elements = 2
            rotor_radius = 2
            angular_velocity = 10.0
        "#).unwrap();
        assert_eq!(settings.num_elements(), 2);
        assert_eq!(settings.rotor_radius(), 2.0);
        assert_eq!(settings.angular_velocity(), 10.0);
        assert_eq!(settings.cutout_radius(), 0.75);
        assert_eq!(settings.blade_count(), 2);
        assert_eq!(settings.air_density(), 1.18);
        assert_eq!(settings.chord_fraction_formula(), ChordFractionFormula::AsWritten);
    }

    #[test]
    fn empty_config_matches_defaults() {
        assert_eq!(RotorSettings::from_toml_str("").unwrap(), RotorSettings::default());
    }

    #[test]
    fn chord_fraction_formula_opt_in() {
        let settings = RotorSettings::from_toml_str("chord_fraction_formula = \"whole_numerator\"").unwrap();
        assert_eq!(settings.chord_fraction_formula(), ChordFractionFormula::WholeNumerator);
        assert!(RotorSettings::from_toml_str("chord_fraction_formula = \"sometimes\"").is_err());
    }

    #[test]
    fn encodes_to_toml() {
        let encoded = toml::to_string(&RotorSettings::default()).unwrap();
        assert!(encoded.contains("num_elements = 10"));
        assert!(encoded.contains("chord_fraction_formula = \"as_written\""));
    }

    #[test]
    fn config_path_ignores_toml_suffix() {
        assert_eq!(config_file_path("rotor"), PathBuf::from("rotor.toml"));
        assert_eq!(config_file_path("rotor.toml"), PathBuf::from("rotor.toml"));
        assert_eq!(config_file_path("dir/rotor.toml"), PathBuf::from("dir/rotor.toml"));
    }

    #[test]
    fn load_layers_file_over_defaults() {
        let dir = scratch_dir("file-present");
        let name = dir.join("rotor");
        fs::write(dir.join("rotor.toml"), "num_elements = 40\nheight = 1.5\n").unwrap();

        let settings = RotorSettings::load_with_env(&name.to_string_lossy(), no_env()).unwrap();
        assert_eq!(settings.num_elements(), 40);
        assert_eq!(settings.height(), 1.5);
        assert_eq!(settings.rotor_radius(), 10.0);

        // passing the full filename loads the same file
        let with_suffix = dir.join("rotor.toml");
        let settings = RotorSettings::load_with_env(&with_suffix.to_string_lossy(), no_env()).unwrap();
        assert_eq!(settings.num_elements(), 40);
        assert!(!dir.join("rotor.toml.toml").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_writes_defaults_when_file_missing() {
        let dir = scratch_dir("file-missing");
        let name = dir.join("rotor.toml");

        let settings = RotorSettings::load_with_env(&name.to_string_lossy(), no_env()).unwrap();
        assert_eq!(settings, RotorSettings::default());

        let written = fs::read_to_string(dir.join("rotor.toml")).unwrap();
        assert_eq!(RotorSettings::from_toml_str(&written).unwrap(), RotorSettings::default());
        assert!(!dir.join("rotor.toml.toml").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn env_overrides_apply_without_a_file() {
        let dir = scratch_dir("env-no-file");
        let name = dir.join("rotor");

        let settings = RotorSettings::load_with_env(&name.to_string_lossy(),
                                                    env_with("ATLAS_NUM_ELEMENTS", "7")).unwrap();
        assert_eq!(settings.num_elements(), 7);

        // the override isn't persisted into the generated file
        let written = fs::read_to_string(dir.join("rotor.toml")).unwrap();
        assert!(written.contains("num_elements = 10"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn env_overrides_file() {
        let dir = scratch_dir("env-over-file");
        let name = dir.join("rotor");
        fs::write(dir.join("rotor.toml"), "num_elements = 40\n").unwrap();

        let settings = RotorSettings::load_with_env(&name.to_string_lossy(),
                                                    env_with("ATLAS_NUM_ELEMENTS", "7")).unwrap();
        assert_eq!(settings.num_elements(), 7);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_an_error_and_left_intact() {
        let dir = scratch_dir("malformed");
        let name = dir.join("rotor");
        let contents = "num_elements = 40\nheight = oops\n";
        fs::write(dir.join("rotor.toml"), contents).unwrap();

        assert!(RotorSettings::load_with_env(&name.to_string_lossy(), no_env()).is_err());
        assert_eq!(fs::read_to_string(dir.join("rotor.toml")).unwrap(), contents);
        let _ = fs::remove_dir_all(&dir);
    }
}
