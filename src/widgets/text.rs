// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static text and text-editing widgets.

use pyo3::prelude::*;

use crate::models::Str;
use crate::runtime::with_current_ui;

/// Show large text.
///
/// Example:
/// heading("hello")
#[pyfunction]
pub fn heading(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.heading(text);
        Ok(())
    })?;
    Ok(())
}

/// Show monospace (fixed width) text.
#[pyfunction]
pub fn monospace(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.monospace(text);
        Ok(())
    })?;
    Ok(())
}

/// Show small text.
#[pyfunction]
pub fn small(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.small(text);
        Ok(())
    })?;
    Ok(())
}

/// Show text that stands out a bit (e.g. slightly brighter).
#[pyfunction]
pub fn strong(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.strong(text);
        Ok(())
    })?;
    Ok(())
}

/// Show text with a fainter color.
#[pyfunction]
pub fn weak(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.weak(text);
        Ok(())
    })?;
    Ok(())
}

/// Show some text.
///
/// Example:
/// label("some text")
#[pyfunction]
pub fn label(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.label(text);
        Ok(())
    })?;
    Ok(())
}

/// Show text as monospace with a gray background.
///
/// Example:
/// code("print(42 + 27)")
#[pyfunction]
pub fn code(text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.code(text);
        Ok(())
    })?;
    Ok(())
}

/// Show a singleline text field editing the cell in place.
///
/// Example:
/// text = Str("editable")
/// # inside the update callback
/// text_edit_singleline(text)
#[pyfunction]
pub fn text_edit_singleline(text: &mut Str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.text_edit_singleline(&mut text.value);
        Ok(())
    })?;
    Ok(())
}

/// Show a multiline text field editing the cell in place.
#[pyfunction]
pub fn text_edit_multiline(text: &mut Str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.text_edit_multiline(&mut text.value);
        Ok(())
    })?;
    Ok(())
}

/// Show a multiline text field styled for code editing.
///
/// Example:
/// source = Str("print(42 + 27)")
/// # inside the update callback
/// code_editor(source)
#[pyfunction]
pub fn code_editor(text: &mut Str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.code_editor(&mut text.value);
        Ok(())
    })?;
    Ok(())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(heading, m)?)?;
    m.add_function(wrap_pyfunction!(monospace, m)?)?;
    m.add_function(wrap_pyfunction!(small, m)?)?;
    m.add_function(wrap_pyfunction!(strong, m)?)?;
    m.add_function(wrap_pyfunction!(weak, m)?)?;
    m.add_function(wrap_pyfunction!(label, m)?)?;
    m.add_function(wrap_pyfunction!(code, m)?)?;
    m.add_function(wrap_pyfunction!(text_edit_singleline, m)?)?;
    m.add_function(wrap_pyfunction!(text_edit_multiline, m)?)?;
    m.add_function(wrap_pyfunction!(code_editor, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every text widget shares the same failure mode outside a frame.
    #[test]
    fn text_widgets_fail_without_an_active_ui() {
        assert!(heading("x").is_err());
        assert!(label("x").is_err());
        let mut cell = Str {
            value: "x".into(),
        };
        assert!(text_edit_singleline(&mut cell).is_err());
        assert_eq!(cell.value, "x");
    }
}
