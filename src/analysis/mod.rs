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

use config::ConfigError;
use itertools::{izip, Itertools};
use tracing::info;
use rotor_aero::{BladeGeometry, InducedVelocityCalculator, InducedVelocityInput, InducedVelocityOutput,
                 RotorError, ThrustCalculator, ThrustInput, ThrustOutput};
use utils::numeric::round_float_to;

use crate::settings::RotorSettings;

const REPORT_DECIMAL_PLACES: u32 = 4;

#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("rotor model error. {0}")]
    Rotor(#[from] RotorError),
    #[error("settings error. {0}")]
    Settings(#[from] ConfigError)
}

/// A single pass over the rotor: geometry, then thrust, then the induced velocity
/// produced by that thrust. Nothing feeds the induced velocity back into the thrust.
#[derive(Debug, Clone)]
pub struct RotorAnalysis {
    geometry: BladeGeometry,
    thrust: ThrustOutput,
    induced: InducedVelocityOutput
}

impl RotorAnalysis {
    pub fn run(settings: &RotorSettings) -> Result<RotorAnalysis, AnalysisError> {
        let geometry = BladeGeometry::uniform(settings.num_elements(), settings.rotor_radius())?;
        let num_elements = geometry.num_elements();
        let lift_coefficients = vec![settings.lift_coefficient(); num_elements];
        let chords = vec![settings.chord(); num_elements];

        let thrust = ThrustCalculator::new(settings.chord_fraction_formula()).compute(&ThrustInput {
            num_elements,
            node_positions: geometry.node_positions(),
            element_widths: geometry.element_widths(),
            element_radii: geometry.element_radii(),
            cutout_radius: settings.cutout_radius(),
            lift_coefficients: &lift_coefficients,
            chords: &chords,
            air_density: settings.air_density(),
            angular_velocity: settings.angular_velocity()
        })?;

        let induced = InducedVelocityCalculator::new().compute(&InducedVelocityInput {
            num_elements,
            element_radii: geometry.element_radii(),
            element_widths: geometry.element_widths(),
            rotor_radius: settings.rotor_radius(),
            blade_count: settings.blade_count(),
            height: settings.height(),
            climb_velocity: settings.climb_velocity(),
            air_density: settings.air_density(),
            thrust: &thrust.thrust
        })?;

        let analysis = RotorAnalysis { geometry, thrust, induced };
        info!("Analysed {} elements out to {} m. Total thrust {} N, peak induced velocity {} m/s",
              num_elements, analysis.geometry().tip_radius(), analysis.total_thrust(),
              analysis.max_induced_velocity());
        Ok(analysis)
    }

    pub fn geometry(&self) -> &BladeGeometry {
        &self.geometry
    }

    pub fn thrust(&self) -> &ThrustOutput {
        &self.thrust
    }

    pub fn induced(&self) -> &InducedVelocityOutput {
        &self.induced
    }

    /// Thrust from a single blade, summed over every element
    pub fn total_thrust(&self) -> f64 {
        self.thrust.thrust.iter().sum()
    }

    pub fn max_induced_velocity(&self) -> f64 {
        self.induced.induced_velocity.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn report(&self) -> String {
        let round = |v: f64| round_float_to(v, REPORT_DECIMAL_PLACES);
        let header = format!("{:>4} {:>10} {:>10} {:>12} {:>12} {:>12}",
                             "s", "r", "dr", "chord_frac", "dT", "vi");
        let (geometry, thrust, induced) = (self.geometry(), self.thrust(), self.induced());
        let rows = izip!(geometry.element_radii(),
                         geometry.element_widths(),
                         &thrust.chord_fraction,
                         &thrust.thrust,
                         &induced.induced_velocity)
            .enumerate()
            .map(|(s, (r, dr, frac, dt, vi))| {
                format!("{:>4} {:>10} {:>10} {:>12} {:>12} {:>12}",
                        s, round(*r), round(*dr), round(*frac), round(*dt), round(*vi))
            });
        let summary = [
            format!("transition element: {}", thrust.transition_element),
            format!("ground effect factor: {}", round(induced.ground_effect_factor)),
            format!("total thrust: {}", round(self.total_thrust())),
            format!("max induced velocity: {}", round(self.max_induced_velocity()))
        ];
        std::iter::once(header).chain(rows).chain(summary).join("\n")
    }
}
