// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Scalar reference cells.
//!
//! Python has no way to pass an `int` or `str` by mutable reference, so
//! stateful widgets (text edits, sliders, checkboxes) take one of these
//! cells instead and write the new value back into its `value` attribute.

use pyo3::prelude::*;

/// Mutable string cell for text-editing widgets.
#[pyclass]
pub struct Str {
    #[pyo3(get, set)]
    pub value: String,
}

#[pymethods]
impl Str {
    #[new]
    fn new(value: String) -> Self {
        Self { value }
    }

    fn __repr__(&self) -> String {
        format!("Str({:?})", self.value)
    }
}

/// Mutable boolean cell for checkboxes and toggles.
#[pyclass]
pub struct Bool {
    #[pyo3(get, set)]
    pub value: bool,
}

#[pymethods]
impl Bool {
    #[new]
    fn new(value: bool) -> Self {
        Self { value }
    }

    fn __repr__(&self) -> String {
        format!("Bool({})", if self.value { "True" } else { "False" })
    }
}

/// Mutable integer cell for sliders, radio groups, and combo boxes.
#[pyclass]
pub struct Int {
    #[pyo3(get, set)]
    pub value: i32,
}

#[pymethods]
impl Int {
    #[new]
    fn new(value: i32) -> Self {
        Self { value }
    }

    fn __repr__(&self) -> String {
        format!("Int({})", self.value)
    }
}

/// Mutable float cell for sliders and drag values.
#[pyclass]
pub struct Float {
    #[pyo3(get, set)]
    pub value: f32,
}

#[pymethods]
impl Float {
    #[new]
    fn new(value: f32) -> Self {
        Self { value }
    }

    fn __repr__(&self) -> String {
        format!("Float({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprs_round_trip_the_constructor_syntax() {
        assert_eq!(Str::new("hi \"there\"".into()).__repr__(), "Str(\"hi \\\"there\\\"\")");
        assert_eq!(Bool::new(true).__repr__(), "Bool(True)");
        assert_eq!(Int::new(-3).__repr__(), "Int(-3)");
        assert_eq!(Float::new(1.5).__repr__(), "Float(1.5)");
    }
}
