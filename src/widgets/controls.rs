// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Clickable and selection widgets: buttons, links, checkboxes, radio
//! groups, and the combo box.

use eframe::egui;
use pyo3::prelude::*;

use crate::models::{Bool, Int};
use crate::runtime::with_current_ui;

/// Show a button; returns True if it was clicked this frame.
///
/// Example:
/// if button_clicked("click me"):
///     print("clicked")
#[pyfunction]
pub fn button_clicked(text: &str) -> PyResult<bool> {
    Ok(with_current_ui(|ui| Ok(ui.button(text).clicked()))?)
}

/// Show a small button; returns True if it was clicked this frame.
#[pyfunction]
pub fn small_button_clicked(text: &str) -> PyResult<bool> {
    Ok(with_current_ui(|ui| Ok(ui.small_button(text).clicked()))?)
}

/// A clickable hyperlink opening the url in the browser.
///
/// Example:
/// hyperlink("https://github.com/emilk/egui")
#[pyfunction]
pub fn hyperlink(url: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.hyperlink(url);
        Ok(())
    })?;
    Ok(())
}

/// A clickable hyperlink showing `label` instead of the url.
///
/// Example:
/// hyperlink_to("egui on GitHub", "https://www.github.com/emilk/egui/")
#[pyfunction]
pub fn hyperlink_to(label: &str, url: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.hyperlink_to(label, url);
        Ok(())
    })?;
    Ok(())
}

/// Clickable text that looks like a hyperlink but goes nowhere on its own;
/// returns True when clicked. To open a web page use hyperlink or
/// hyperlink_to.
#[pyfunction]
pub fn link_clicked(label: &str) -> PyResult<bool> {
    Ok(with_current_ui(|ui| Ok(ui.link(label).clicked()))?)
}

/// Show a checkbox bound to a Bool cell.
///
/// Example:
/// accepted = Bool(False)
/// # inside the update callback
/// checkbox(accepted, "accept the terms")
#[pyfunction]
pub fn checkbox(checked: &mut Bool, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.checkbox(&mut checked.value, text);
        Ok(())
    })?;
    Ok(())
}

/// Acts like a checkbox but looks like a selectable label.
#[pyfunction]
pub fn toggle_value(selected: &mut Bool, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.toggle_value(&mut selected.value, text);
        Ok(())
    })?;
    Ok(())
}

/// Show a radio button. Selected when the cell equals `alternative`;
/// clicking assigns `alternative` to the cell.
///
/// Example:
/// RED, GREEN, BLUE = 0, 1, 2
/// color = Int(RED)
/// # inside the update callback
/// radio_value(color, RED, "red")
/// radio_value(color, GREEN, "green")
/// radio_value(color, BLUE, "blue")
#[pyfunction]
pub fn radio_value(current_value: &mut Int, alternative: i32, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.radio_value(&mut current_value.value, alternative, text);
        Ok(())
    })?;
    Ok(())
}

/// Show selectable text. Selected when the cell equals `alternative`;
/// clicking assigns `alternative` to the cell.
#[pyfunction]
pub fn selectable_value(current_value: &mut Int, alternative: i32, text: &str) -> PyResult<()> {
    with_current_ui(|ui| {
        ui.selectable_value(&mut current_value.value, alternative, text);
        Ok(())
    })?;
    Ok(())
}

/// Show a drop-down over paired `alternatives` and `names`.
///
/// The closed combo box shows the name paired with the currently selected
/// alternative; picking an entry assigns its alternative to the cell.
///
/// Example:
/// RED, GREEN, BLUE = 0, 1, 2
/// color = Int(RED)
/// # inside the update callback
/// combo_box(color, [RED, GREEN, BLUE], ["red", "green", "blue"], "pick a color")
#[pyfunction]
pub fn combo_box(
    current_value: &mut Int,
    alternatives: Vec<i32>,
    names: Vec<String>,
    label: &str,
) -> PyResult<()> {
    with_current_ui(|ui| {
        egui::ComboBox::from_label(label)
            .selected_text(selected_name(&alternatives, &names, current_value.value))
            .show_ui(ui, |ui| {
                for (alternative, name) in alternatives.iter().zip(&names) {
                    ui.selectable_value(&mut current_value.value, *alternative, name);
                }
            });
        Ok(())
    })?;
    Ok(())
}

/// Name paired with `current` in the alternatives list, or "Unknown" when
/// the value is absent or the name list is too short.
fn selected_name<'a>(alternatives: &[i32], names: &'a [String], current: i32) -> &'a str {
    alternatives
        .iter()
        .position(|&alternative| alternative == current)
        .and_then(|index| names.get(index))
        .map_or("Unknown", String::as_str)
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(button_clicked, m)?)?;
    m.add_function(wrap_pyfunction!(small_button_clicked, m)?)?;
    m.add_function(wrap_pyfunction!(hyperlink, m)?)?;
    m.add_function(wrap_pyfunction!(hyperlink_to, m)?)?;
    m.add_function(wrap_pyfunction!(link_clicked, m)?)?;
    m.add_function(wrap_pyfunction!(checkbox, m)?)?;
    m.add_function(wrap_pyfunction!(toggle_value, m)?)?;
    m.add_function(wrap_pyfunction!(radio_value, m)?)?;
    m.add_function(wrap_pyfunction!(selectable_value, m)?)?;
    m.add_function(wrap_pyfunction!(combo_box, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn selected_name_pairs_by_position() {
        let alternatives = [10, 20, 30];
        let labels = names(&["ten", "twenty", "thirty"]);
        assert_eq!(selected_name(&alternatives, &labels, 20), "twenty");
        assert_eq!(selected_name(&alternatives, &labels, 10), "ten");
    }

    #[test]
    fn selected_name_falls_back_for_values_not_in_the_list() {
        let alternatives = [10, 20, 30];
        let labels = names(&["ten", "twenty", "thirty"]);
        assert_eq!(selected_name(&alternatives, &labels, 99), "Unknown");
    }

    #[test]
    fn selected_name_falls_back_when_names_run_short() {
        let alternatives = [10, 20, 30];
        let labels = names(&["ten"]);
        assert_eq!(selected_name(&alternatives, &labels, 30), "Unknown");
    }

    #[test]
    fn selection_widgets_fail_without_an_active_ui() {
        let mut cell = Int { value: 0 };
        assert!(radio_value(&mut cell, 1, "one").is_err());
        assert!(combo_box(&mut cell, vec![0, 1], names(&["a", "b"]), "pick").is_err());
        assert_eq!(cell.value, 0);
    }
}
