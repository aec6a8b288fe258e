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

use std::fmt::{Display, Formatter};
use itertools::{izip, Itertools};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utils::numeric::is_strictly_increasing;

use crate::error::{check_element_count, check_len, check_positive, Result, RotorError};

/// Selects how the partial element straddling the cutout radius is scaled.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordFractionFormula {
    /// `yN[s+1] - ycmax / (yN[s+1] - yN[s])`
    ///
    /// The division only applies to `ycmax`. This almost certainly isn't the intended
    /// fraction but it is what existing rotor models produce, so it stays the default
    /// until a caller explicitly opts into [`ChordFractionFormula::WholeNumerator`].
    AsWritten,
    /// `(yN[s+1] - ycmax) / (yN[s+1] - yN[s])`, the share of the element outside the cutout
    WholeNumerator
}

impl ChordFractionFormula {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordFractionFormula::AsWritten => "as_written",
            ChordFractionFormula::WholeNumerator => "whole_numerator"
        }
    }

    pub fn apply(&self, inner_node: f64, outer_node: f64, cutout_radius: f64) -> f64 {
        match self {
            // Precedence intentionally left as-is, see the variant docs
            ChordFractionFormula::AsWritten => outer_node - cutout_radius / (outer_node - inner_node),
            ChordFractionFormula::WholeNumerator => (outer_node - cutout_radius) / (outer_node - inner_node)
        }
    }
}

impl Default for ChordFractionFormula {
    fn default() -> Self {
        ChordFractionFormula::AsWritten
    }
}

impl Display for ChordFractionFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThrustInput<'a> {
    pub num_elements: usize,
    /// `yN`, length `num_elements + 1`
    pub node_positions: &'a [f64],
    /// `dr`
    pub element_widths: &'a [f64],
    /// `r`
    pub element_radii: &'a [f64],
    /// `ycmax`
    pub cutout_radius: f64,
    /// `Cl`
    pub lift_coefficients: &'a [f64],
    /// `c`
    pub chords: &'a [f64],
    pub air_density: f64,
    /// `Omega` in rad/s
    pub angular_velocity: f64
}

impl<'a> ThrustInput<'a> {
    fn validate(&self) -> Result<()> {
        check_element_count(self.num_elements)?;
        check_len("node_positions", self.node_positions, self.num_elements + 1)?;
        check_len("element_widths", self.element_widths, self.num_elements)?;
        check_len("element_radii", self.element_radii, self.num_elements)?;
        check_len("lift_coefficients", self.lift_coefficients, self.num_elements)?;
        check_len("chords", self.chords, self.num_elements)?;
        check_positive("air_density", self.air_density)?;
        if !is_strictly_increasing(self.node_positions) {
            return Err(RotorError::InvalidInput(String::from("node positions must be strictly increasing")));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrustOutput {
    /// `dT` per element
    pub thrust: Vec<f64>,
    pub chord_fraction: Vec<f64>,
    /// Index of the element partially inside the cutout radius
    pub transition_element: usize
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThrustCalculator {
    chord_fraction_formula: ChordFractionFormula
}

impl ThrustCalculator {
    pub fn new(chord_fraction_formula: ChordFractionFormula) -> ThrustCalculator {
        ThrustCalculator { chord_fraction_formula }
    }

    pub fn chord_fraction_formula(&self) -> ChordFractionFormula {
        self.chord_fraction_formula
    }

    /// Blade element thrust assuming small inflow angles.
    ///
    /// Every element gets `0.5 * rho * (Omega * r)^2 * Cl * c * dr`, scaled by its chord
    /// fraction. Only the transition element has a chord fraction other than 1.
    pub fn compute(&self, input: &ThrustInput) -> Result<ThrustOutput> {
        input.validate()?;
        let n = input.num_elements;
        let nodes = input.node_positions;

        let transition_element = find_transition_element(&nodes[..n], input.cutout_radius)
            .ok_or_else(|| RotorError::InvalidConfiguration(
                format!("cutout radius {} isn't above any element boundary (first node at {})",
                        input.cutout_radius, nodes[0])))?;
        debug!("Transition element is {} of {}", transition_element, n);

        let mut chord_fraction = vec![1.0; n];
        let fraction = self.chord_fraction_formula.apply(nodes[transition_element],
                                                         nodes[transition_element + 1],
                                                         input.cutout_radius);
        if !(0.0..=1.0).contains(&fraction) {
            warn!("Chord fraction {} for element {} is outside [0, 1] using the {} formula",
                  fraction, transition_element, self.chord_fraction_formula);
        }
        chord_fraction[transition_element] = fraction;

        let half_rho = 0.5 * input.air_density;
        let thrust = izip!(&chord_fraction,
                           input.element_radii,
                           input.lift_coefficients,
                           input.chords,
                           input.element_widths)
            .map(|(frac, r, cl, c, dr)| {
                frac * half_rho * (input.angular_velocity * r).powi(2) * cl * c * dr
            })
            .collect();

        Ok(ThrustOutput { thrust, chord_fraction, transition_element })
    }
}

/// Highest index whose node lies strictly inside the cutout radius.
fn find_transition_element(lower_nodes: &[f64], cutout_radius: f64) -> Option<usize> {
    lower_nodes.iter().positions(|&y| y < cutout_radius).max()
}
