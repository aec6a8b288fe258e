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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RotorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotorError {
    #[error("invalid input. {0}")]
    InvalidInput(String),
    #[error("invalid configuration. {0}")]
    InvalidConfiguration(String),
    #[error("numeric domain error at element {element}. radicand {radicand} is negative")]
    NumericDomain {
        element: usize,
        radicand: f64
    }
}

impl RotorError {
    pub(crate) fn length_mismatch(name: &str, expected: usize, actual: usize) -> RotorError {
        RotorError::InvalidInput(
            format!("`{}` has {} entries, expected {}", name, actual, expected))
    }
}

pub(crate) fn check_len(name: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(RotorError::length_mismatch(name, expected, values.len()));
    }
    Ok(())
}

pub(crate) fn check_element_count(num_elements: usize) -> Result<()> {
    if num_elements < 1 {
        return Err(RotorError::InvalidInput(String::from("at least one blade element is required")));
    }
    Ok(())
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(RotorError::InvalidInput(format!("`{}` must be positive, got {}", name, value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::{check_element_count, check_len, check_positive, RotorError};

    #[test]
    fn length_check() {
        assert!(check_len("dr", &[1.0, 2.0], 2).is_ok());
        assert_eq!(check_len("dr", &[1.0], 2),
                   Err(RotorError::InvalidInput(String::from("`dr` has 1 entries, expected 2"))));
    }

    #[test]
    fn positive_check() {
        assert!(check_positive("rho", 1.225).is_ok());
        assert!(check_positive("rho", 0.0).is_err());
        assert!(check_positive("rho", -1.0).is_err());
        assert!(check_positive("rho", f64::NAN).is_err());
    }

    #[test]
    fn element_count_check() {
        assert!(check_element_count(0).is_err());
        assert!(check_element_count(1).is_ok());
    }

    #[test]
    fn domain_error_message() {
        let e = RotorError::NumericDomain { element: 3, radicand: -2.5 };
        assert_eq!(e.to_string(), "numeric domain error at element 3. radicand -2.5 is negative");
    }
}
