// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Flat widget functions exposed to Python.
//!
//! Each function resolves the currently active `Ui` through
//! [`crate::runtime`] and calls the matching egui API. Grouped by concern
//! the way the widgets read in a script: text, controls, numeric ranges,
//! nested containers, and display elements.

pub mod containers;
pub mod controls;
pub mod display;
pub mod sliders;
pub mod text;

use pyo3::prelude::*;

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    text::register(m)?;
    controls::register(m)?;
    sliders::register(m)?;
    containers::register(m)?;
    display::register(m)?;
    Ok(())
}
