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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Returns `num_points` evenly spaced values from `start` to `end` inclusive.
///
/// The final value is set to `end` exactly rather than accumulated so callers can rely
/// on the last point matching the requested bound.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_points - 1) as f64;
            let mut points: Vec<f64> = (0..num_points).map(|i| start + step * i as f64).collect();
            points[num_points - 1] = end;
            points
        }
    }
}

pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
