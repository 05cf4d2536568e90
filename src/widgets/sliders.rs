// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Numeric range widgets: sliders and draggable numbers.

use eframe::egui;
use pyo3::prelude::*;

use crate::models::{Float, Int};
use crate::runtime::with_current_ui;

/// Control a Float cell with a slider.
///
/// Example:
/// volume = Float(5.0)
/// # inside the update callback
/// slider_float(volume, 0.0, 50.0, "volume")
#[pyfunction]
pub fn slider_float(value: &mut Float, min: f32, max: f32, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(egui::Slider::new(&mut value.value, min..=max).text(text));
        Ok(())
    })?;
    Ok(())
}

/// Control an Int cell with a slider.
#[pyfunction]
pub fn slider_int(value: &mut Int, min: i32, max: i32, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(egui::Slider::new(&mut value.value, min..=max).text(text));
        Ok(())
    })?;
    Ok(())
}

/// Control a Float cell by dragging the number.
///
/// `speed` is the change per dragged point.
///
/// Example:
/// threshold = Float(5.0)
/// # inside the update callback
/// drag_float(threshold, 0.0, 50.0, 1.5)
#[pyfunction]
pub fn drag_float(value: &mut Float, min: f32, max: f32, speed: f32) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(
            egui::DragValue::new(&mut value.value)
                .speed(speed)
                .range(min..=max),
        );
        Ok(())
    })?;
    Ok(())
}

/// Control an Int cell by dragging the number.
#[pyfunction]
pub fn drag_int(value: &mut Int, min: i32, max: i32, speed: f32) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(
            egui::DragValue::new(&mut value.value)
                .speed(speed)
                .range(min..=max),
        );
        Ok(())
    })?;
    Ok(())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(slider_float, m)?)?;
    m.add_function(wrap_pyfunction!(slider_int, m)?)?;
    m.add_function(wrap_pyfunction!(drag_float, m)?)?;
    m.add_function(wrap_pyfunction!(drag_int, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_widgets_fail_without_an_active_ui() {
        let mut int_cell = Int { value: 7 };
        let mut float_cell = Float { value: 0.5 };
        assert!(slider_int(&mut int_cell, 0, 10, "n").is_err());
        assert!(drag_float(&mut float_cell, 0.0, 1.0, 0.1).is_err());
        // Cells stay untouched on failure.
        assert_eq!(int_cell.value, 7);
        assert_eq!(float_cell.value, 0.5);
    }
}
