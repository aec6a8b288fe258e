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

//! Blade element thrust and annular ring actuator disk induced velocity for a rotor.
//!
//! Both calculators are pure: they borrow their input arrays and return freshly allocated
//! outputs. Chaining them (and any iteration between the two) is left to the caller.

pub mod error;
pub mod geometry;
pub mod thrust;
pub mod induced_velocity;

pub use error::{Result, RotorError};
pub use geometry::BladeGeometry;
pub use thrust::{ChordFractionFormula, ThrustCalculator, ThrustInput, ThrustOutput};
pub use induced_velocity::{InducedVelocityCalculator, InducedVelocityInput, InducedVelocityOutput};
