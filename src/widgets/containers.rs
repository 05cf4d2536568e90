// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Nested layout containers.
//!
//! Each function opens an egui child layout, makes the child `Ui` current
//! for the duration of the Python callable, and restores the parent
//! afterwards. Exceptions raised by the callable are logged and swallowed,
//! matching the frame-loop policy: a scripting error must not abort the
//! surrounding layout.

use pyo3::prelude::*;
use pyo3::types::PyFunction;

use crate::runtime::{UiScope, with_current_ui};

/// Make `ui` current and invoke the Python callable.
fn run_nested(update_fun: &Bound<'_, PyFunction>, ui: &mut eframe::egui::Ui) {
    let _scope = UiScope::enter(ui);
    if let Err(err) = update_fun.call0() {
        tracing::error!("layout callback raised: {err}");
    }
}

/// Lay out the contents of `update_fun` horizontally.
///
/// Elements are centered on the Y axis, which is almost always what you
/// want when mixing widgets of different heights. Use horizontal_top when
/// the contents should align with the top edge instead.
///
/// Example:
/// def row():
///     label("name:")
///     text_edit_singleline(name)
///
/// horizontal(row)
#[pyfunction]
pub fn horizontal(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.horizontal(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// Like horizontal, but allocates the full available height and centers
/// elements vertically within it.
#[pyfunction]
pub fn horizontal_centered(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.horizontal_centered(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// Like horizontal, but aligns contents with the top edge.
#[pyfunction]
pub fn horizontal_top(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.horizontal_top(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// Horizontal layout that wraps to a new row at the right edge.
#[pyfunction]
pub fn horizontal_wrapped(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.horizontal_wrapped(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// A collapsing header that starts out collapsed.
///
/// While collapsed the body callable is simply not invoked.
///
/// Example:
/// def details():
///     label("hidden until expanded")
///
/// collapsing("details", details)
#[pyfunction]
pub fn collapsing(heading: &str, update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.collapsing(heading, |ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// A child layout indented to the right.
#[pyfunction]
pub fn indent(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.indent("indent", |ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// Visually group the contents together with a frame.
#[pyfunction]
pub fn group(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.group(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// A scoped child layout.
///
/// Style changes made inside (opacity, disabled state) end with the scope.
///
/// Example:
/// def faded():
///     set_opacity(0.5)
///     label("half transparent")
///
/// scope(faded)
/// label("normal opacity")
#[pyfunction]
pub fn scope(update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.scope(|ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

/// A section that is greyed out and non-interactive when `enabled` is
/// False. Nested inside an already disabled section the contents stay
/// disabled regardless of `enabled`.
///
/// Example:
/// add_enabled(False, lambda: button_clicked("you can't click me"))
#[pyfunction]
pub fn add_enabled(enabled: bool, update_fun: Bound<'_, PyFunction>) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add_enabled_ui(enabled, |ui| run_nested(&update_fun, ui));
        Ok(())
    })?;
    Ok(())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(horizontal, m)?)?;
    m.add_function(wrap_pyfunction!(horizontal_centered, m)?)?;
    m.add_function(wrap_pyfunction!(horizontal_top, m)?)?;
    m.add_function(wrap_pyfunction!(horizontal_wrapped, m)?)?;
    m.add_function(wrap_pyfunction!(collapsing, m)?)?;
    m.add_function(wrap_pyfunction!(indent, m)?)?;
    m.add_function(wrap_pyfunction!(group, m)?)?;
    m.add_function(wrap_pyfunction!(scope, m)?)?;
    m.add_function(wrap_pyfunction!(add_enabled, m)?)?;
    Ok(())
}
