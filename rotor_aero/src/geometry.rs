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

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utils::numeric::{is_strictly_increasing, linspace};

use crate::error::{check_element_count, check_positive, Result, RotorError};

/// Radial discretisation of a blade into annular elements.
///
/// Element `i` is bounded by nodes `i` and `i + 1`, so there is always one more node than
/// there are elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BladeGeometry {
    node_positions: Vec<f64>,
    element_widths: Vec<f64>,
    element_radii: Vec<f64>
}

impl BladeGeometry {
    /// Splits `0..=rotor_radius` into `num_elements` equal-width elements
    pub fn uniform(num_elements: usize, rotor_radius: f64) -> Result<BladeGeometry> {
        check_element_count(num_elements)?;
        check_positive("rotor_radius", rotor_radius)?;
        BladeGeometry::from_nodes(linspace(0.0, rotor_radius, num_elements + 1))
    }

    pub fn from_nodes(node_positions: Vec<f64>) -> Result<BladeGeometry> {
        if node_positions.len() < 2 {
            return Err(RotorError::InvalidInput(
                format!("at least 2 nodes are needed to bound an element, got {}", node_positions.len())));
        }
        if !is_strictly_increasing(&node_positions) {
            return Err(RotorError::InvalidInput(String::from("node positions must be strictly increasing")));
        }
        let (element_widths, element_radii): (Vec<f64>, Vec<f64>) = node_positions
            .iter()
            .tuple_windows()
            .map(|(inner, outer)| (outer - inner, 0.5 * (inner + outer)))
            .unzip();
        Ok(BladeGeometry { node_positions, element_widths, element_radii })
    }

    pub fn num_elements(&self) -> usize {
        self.element_widths.len()
    }

    pub fn node_positions(&self) -> &[f64] {
        &self.node_positions
    }

    pub fn element_widths(&self) -> &[f64] {
        &self.element_widths
    }

    pub fn element_radii(&self) -> &[f64] {
        &self.element_radii
    }

    pub fn tip_radius(&self) -> f64 {
        self.node_positions[self.node_positions.len() - 1]
    }
}
