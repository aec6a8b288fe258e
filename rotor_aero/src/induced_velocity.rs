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

use std::f64::consts::PI;
use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_element_count, check_len, check_positive, Result, RotorError};

#[derive(Debug, Clone, Copy)]
pub struct InducedVelocityInput<'a> {
    pub num_elements: usize,
    /// `r`
    pub element_radii: &'a [f64],
    /// `dr`
    pub element_widths: &'a [f64],
    /// `R`
    pub rotor_radius: f64,
    /// `b`
    pub blade_count: u32,
    /// Rotor height above the ground, `h`
    pub height: f64,
    /// Vertical (climb) velocity, `vc`
    pub climb_velocity: f64,
    pub air_density: f64,
    /// `dT` per element
    pub thrust: &'a [f64]
}

impl<'a> InducedVelocityInput<'a> {
    fn validate(&self) -> Result<()> {
        check_element_count(self.num_elements)?;
        check_len("element_radii", self.element_radii, self.num_elements)?;
        check_len("element_widths", self.element_widths, self.num_elements)?;
        check_len("thrust", self.thrust, self.num_elements)?;
        check_positive("air_density", self.air_density)?;
        for (s, (r, dr)) in self.element_radii.iter().zip(self.element_widths).enumerate() {
            if !(*r > 0.0) || !(*dr > 0.0) {
                return Err(RotorError::InvalidInput(
                    format!("element {} needs a positive radius and width, got r={} dr={}", s, r, dr)));
            }
        }
        if !self.height.is_finite() || self.height == 0.0 {
            return Err(RotorError::InvalidInput(
                format!("rotor height must be finite and non-zero, got {}", self.height)));
        }
        if !self.rotor_radius.is_finite() {
            return Err(RotorError::InvalidInput(
                format!("rotor radius must be finite, got {}", self.rotor_radius)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InducedVelocityOutput {
    /// Ground effect corrected downwash `vi` per element
    pub induced_velocity: Vec<f64>,
    /// Divisor applied to every element, `1 + (R / 4h)^2`
    pub ground_effect_factor: f64
}

/// Induced velocity from annular ring actuator disk theory.
#[derive(Debug, Clone, Copy, Default)]
pub struct InducedVelocityCalculator;

impl InducedVelocityCalculator {
    pub fn new() -> InducedVelocityCalculator {
        InducedVelocityCalculator
    }

    pub fn compute(&self, input: &InducedVelocityInput) -> Result<InducedVelocityOutput> {
        input.validate()?;
        let mut induced_velocity = Vec::with_capacity(input.num_elements);
        for (s, (r, dr, dt)) in izip!(input.element_radii, input.element_widths, input.thrust).enumerate() {
            let radicand = annulus_radicand(input.climb_velocity,
                                            input.blade_count,
                                            *dt,
                                            input.air_density,
                                            *r,
                                            *dr);
            // negated so that NaN is rejected too
            if !(radicand >= 0.0) {
                return Err(RotorError::NumericDomain { element: s, radicand });
            }
            induced_velocity.push(-0.5 * input.climb_velocity + radicand.sqrt());
        }

        // Cheeseman & Bennett, applied once the whole distribution is known
        let ground_effect_factor = ground_effect_factor(input.rotor_radius, input.height);
        debug!("Ground effect factor {} for R={} h={}", ground_effect_factor, input.rotor_radius, input.height);
        induced_velocity.iter_mut().for_each(|vi| *vi /= ground_effect_factor);

        Ok(InducedVelocityOutput { induced_velocity, ground_effect_factor })
    }
}

fn annulus_radicand(climb_velocity: f64, blade_count: u32, thrust: f64, air_density: f64, radius: f64, width: f64) -> f64 {
    0.25 * climb_velocity.powi(2)
        + 0.25 * blade_count as f64 * thrust / (PI * air_density * radius * width)
}

pub fn ground_effect_factor(rotor_radius: f64, height: f64) -> f64 {
    1.0 + (rotor_radius / (4.0 * height)).powi(2)
}
