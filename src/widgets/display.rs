// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Display elements: indicators, media, spacing, and Ui-wide switches.

use eframe::egui;
use egui_extras::DatePickerButton;
use pyo3::prelude::*;

use crate::models::{Date, RGB};
use crate::runtime::with_current_ui;

/// A simple progress bar showing a percentage.
///
/// `value` is in the [0, 1] range, where 1 means completed.
///
/// Example:
/// progress(0.5)
#[pyfunction]
pub fn progress(value: f32) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(egui::ProgressBar::new(value).show_percentage());
        Ok(())
    })?;
    Ok(())
}

/// A spinner used to indicate loading.
#[pyfunction]
pub fn spinner() -> PyResult<()> {
    with_current_ui(|ui| {
        ui.spinner();
        Ok(())
    })?;
    Ok(())
}

/// A button showing the current color; clicking opens a full color picker.
///
/// Example:
/// color = RGB(0.3, 0.3, 0.9)
/// # inside the update callback
/// color_edit_button_rgb(color)
/// label(f"r:{color.r} g:{color.g} b:{color.b}")
#[pyfunction]
pub fn color_edit_button_rgb(rgb: &mut RGB) -> PyResult<()> {
    with_current_ui(|ui| {
        let mut channels = rgb.channels();
        ui.color_edit_button_rgb(&mut channels);
        rgb.set_channels(channels);
        Ok(())
    })?;
    Ok(())
}

/// Show the image available at the given uri.
///
/// Example:
/// image("https://picsum.photos/480")
/// image("file://assets/ferris.png")
#[pyfunction]
pub fn image(source: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.image(source);
        Ok(())
    })?;
    Ok(())
}

/// A button with an image to the left of the text; returns True when
/// clicked this frame.
#[pyfunction]
pub fn image_and_text_clicked(source: &str, text: &str) -> PyResult<bool> {
    Ok(with_current_ui(|ui| {
        Ok(ui.add(egui::Button::image_and_text(source, text)).clicked())
    })?)
}

/// Show the selected date; clicking opens a date picker popup.
///
/// Example:
/// when = Date(datetime.date.today())
/// # inside the update callback
/// date_picker_button(when)
#[pyfunction]
pub fn date_picker_button(selection: &mut Date) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add(DatePickerButton::new(&mut selection.value));
        Ok(())
    })?;
    Ok(())
}

/// A horizontal or vertical separator line, depending on the layout.
#[pyfunction]
pub fn separator() -> PyResult<()> {
    with_current_ui(|ui| {
        ui.separator();
        Ok(())
    })?;
    Ok(())
}

/// Add extra space before the next widget. The direction depends on the
/// layout.
#[pyfunction]
pub fn add_space(amount: f32) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.add_space(amount);
        Ok(())
    })?;
    Ok(())
}

/// Make all further widgets in this Ui semi-transparent.
///
/// `opacity` ranges from 0.0 (invisible) to 1.0 (opaque). Combine with
/// scope() to limit the effect to a sub-region.
#[pyfunction]
pub fn set_opacity(opacity: f32) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.set_opacity(opacity);
        Ok(())
    })?;
    Ok(())
}

/// Make all further widgets invisible while still allocating space.
///
/// Implies disable(); there is no way to make the Ui visible again within
/// the same scope.
#[pyfunction]
pub fn set_invisible() -> PyResult<()> {
    with_current_ui(|ui| {
        ui.set_invisible();
        Ok(())
    })?;
    Ok(())
}

/// Deny all further interaction in this Ui and draw widgets greyed out.
///
/// There is no way to re-enable within the same scope; prefer add_enabled
/// for a section that toggles.
#[pyfunction]
pub fn disable() -> PyResult<()> {
    with_current_ui(|ui| {
        ui.disable();
        Ok(())
    })?;
    Ok(())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(progress, m)?)?;
    m.add_function(wrap_pyfunction!(spinner, m)?)?;
    m.add_function(wrap_pyfunction!(color_edit_button_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(self::image, m)?)?;
    m.add_function(wrap_pyfunction!(image_and_text_clicked, m)?)?;
    m.add_function(wrap_pyfunction!(date_picker_button, m)?)?;
    m.add_function(wrap_pyfunction!(separator, m)?)?;
    m.add_function(wrap_pyfunction!(add_space, m)?)?;
    m.add_function(wrap_pyfunction!(set_opacity, m)?)?;
    m.add_function(wrap_pyfunction!(set_invisible, m)?)?;
    m.add_function(wrap_pyfunction!(disable, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::UiScope;

    // Color channels must survive a frame where the picker is shown but
    // not interacted with.
    #[test]
    fn color_button_preserves_channels_without_interaction() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let _scope = UiScope::enter(ui);
                let mut color = RGB {
                    r: 0.25,
                    g: 0.5,
                    b: 0.75,
                };
                color_edit_button_rgb(&mut color).unwrap();
                assert_eq!(color.channels(), [0.25, 0.5, 0.75]);
            });
        });
    }

    #[test]
    fn display_widgets_fail_without_an_active_ui() {
        assert!(progress(0.5).is_err());
        assert!(spinner().is_err());
        assert!(separator().is_err());
    }
}
