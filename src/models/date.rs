// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calendar date cell backed by `chrono::NaiveDate`.
//!
//! pyo3's chrono integration converts `datetime.date` to and from
//! `NaiveDate` at the boundary, so Python sees plain date objects.

use chrono::NaiveDate;
use pyo3::prelude::*;

/// Mutable date cell for the date picker button.
#[pyclass]
pub struct Date {
    #[pyo3(get, set)]
    pub value: NaiveDate,
}

#[pymethods]
impl Date {
    #[new]
    fn new(value: NaiveDate) -> Self {
        Self { value }
    }

    fn __repr__(&self) -> String {
        format!("Date({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_uses_iso_format() {
        let date = Date::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(date.__repr__(), "Date(2024-06-15)");
    }
}
