//! Python bindings for the egui immediate mode GUI library.
//!
//! A Python script defines an update callback and hands it to
//! [`app::run_native`]; the extension opens a native window through eframe
//! and re-invokes the callback every frame. Inside the callback, flat
//! widget functions (`heading`, `button_clicked`, `slider_int`, ...) render
//! into the currently active `Ui`, and mutable widget state crosses the
//! language boundary through small reference cells (`Str`, `Bool`, `Int`,
//! `Float`, `RGB`, `Date`).

mod app;
mod error;
mod models;
mod runtime;
mod widgets;

pub use error::GuiError;

use pyo3::prelude::*;

#[pymodule]
fn pyegui(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    models::register(m)?;
    app::register(m)?;
    widgets::register(m)?;
    Ok(())
}
