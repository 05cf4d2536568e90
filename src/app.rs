// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Window bootstrap: wires eframe to the Python update callback.

use std::sync::{Mutex, TryLockError};

use eframe::egui;
use pyo3::prelude::*;
use pyo3::types::PyFunction;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::GuiError;
use crate::runtime::UiScope;

/// Guards against a second event loop while one is already running.
static EVENT_LOOP: Mutex<()> = Mutex::new(());

/// Handle to the egui context of the running frame.
///
/// Passed to the update callback every frame.
#[pyclass]
pub struct Context(pub(crate) egui::Context);

#[pymethods]
impl Context {
    /// Request a new frame even if no input event arrives.
    ///
    /// Useful when state changes outside the UI (e.g. a background thread)
    /// and the window should redraw to show it.
    fn request_repaint(&self) {
        self.0.request_repaint();
    }
}

/// Optional window configuration for [`run_native`].
///
/// Every field defaults to `None`, leaving the decision to the backend.
///
/// Example:
/// options = WindowOptions(inner_size=(800, 600), resizable=False)
/// run_native("My app", update_func, options)
#[pyclass]
#[derive(Clone, Default)]
pub struct WindowOptions {
    #[pyo3(get, set)]
    pub inner_size: Option<(f32, f32)>,
    #[pyo3(get, set)]
    pub min_inner_size: Option<(f32, f32)>,
    #[pyo3(get, set)]
    pub resizable: Option<bool>,
    #[pyo3(get, set)]
    pub maximized: Option<bool>,
}

#[pymethods]
impl WindowOptions {
    #[new]
    #[pyo3(signature = (inner_size=None, min_inner_size=None, resizable=None, maximized=None))]
    fn new(
        inner_size: Option<(f32, f32)>,
        min_inner_size: Option<(f32, f32)>,
        resizable: Option<bool>,
        maximized: Option<bool>,
    ) -> Self {
        Self {
            inner_size,
            min_inner_size,
            resizable,
            maximized,
        }
    }
}

impl WindowOptions {
    pub(crate) fn to_native(&self) -> eframe::NativeOptions {
        let mut viewport = egui::ViewportBuilder::default();
        if let Some((width, height)) = self.inner_size {
            viewport = viewport.with_inner_size([width, height]);
        }
        if let Some((width, height)) = self.min_inner_size {
            viewport = viewport.with_min_inner_size([width, height]);
        }
        if let Some(resizable) = self.resizable {
            viewport = viewport.with_resizable(resizable);
        }
        if let Some(maximized) = self.maximized {
            viewport = viewport.with_maximized(maximized);
        }

        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}

/// The eframe application: one central panel, one Python callback per frame.
struct CallbackApp {
    update_fun: Py<PyFunction>,
}

impl eframe::App for CallbackApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let _scope = UiScope::enter(ui);
        let handle = Context(ui.ctx().clone());

        Python::with_gil(|py| {
            if let Err(err) = self.update_fun.bind(py).call1((handle,)) {
                // A scripting error must not tear down the window;
                // report it and render the next frame normally.
                tracing::error!("update callback raised: {err}");
            }
        });
    }
}

/// Create a native window and run `update_fun` every frame until it closes.
///
/// This is the entry point of a pyegui application. The callback receives a
/// `Context` handle and calls widget functions to build the frame:
///
/// name = Str("")
///
/// def update_func(ctx):
///     heading(f"Hello, {name.value}!")
///     text_edit_singleline(name)
///     if button_clicked("click me"):
///         print("clicked")
///
/// run_native("My app", update_func)
///
/// Raises RuntimeError if an event loop is already running in this process
/// or if the window cannot be created.
#[pyfunction]
#[pyo3(signature = (app_name, update_fun, options = None))]
pub fn run_native(
    app_name: &str,
    update_fun: Bound<'_, PyFunction>,
    options: Option<&WindowOptions>,
) -> PyResult<()> {
    init_tracing();

    let _guard = match EVENT_LOOP.try_lock() {
        Ok(guard) => guard,
        // A previous run that panicked poisons the lock; the loop itself is
        // gone, so the guard is still safe to take.
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => return Err(GuiError::EventLoopRunning.into()),
    };

    let native_options = options.map(WindowOptions::to_native).unwrap_or_default();
    let app = CallbackApp {
        update_fun: update_fun.unbind(),
    };

    eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| GuiError::WindowCreation(err.to_string()))?;

    Ok(())
}

/// Best-effort tracing setup; a no-op when the host process already set a
/// global subscriber.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyegui=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init();
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Context>()?;
    m.add_class::<WindowOptions>()?;
    m.add_function(wrap_pyfunction!(run_native, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use eframe::egui;

    use super::WindowOptions;

    #[test]
    fn default_options_leave_the_viewport_untouched() {
        let native = WindowOptions::default().to_native();
        assert_eq!(native.viewport.inner_size, None);
        assert_eq!(native.viewport.min_inner_size, None);
        assert_eq!(native.viewport.resizable, None);
        assert_eq!(native.viewport.maximized, None);
    }

    #[test]
    fn set_options_reach_the_viewport_builder() {
        let options = WindowOptions {
            inner_size: Some((800.0, 600.0)),
            min_inner_size: Some((400.0, 300.0)),
            resizable: Some(false),
            maximized: Some(true),
        };
        let native = options.to_native();
        assert_eq!(native.viewport.inner_size, Some(egui::vec2(800.0, 600.0)));
        assert_eq!(
            native.viewport.min_inner_size,
            Some(egui::vec2(400.0, 300.0))
        );
        assert_eq!(native.viewport.resizable, Some(false));
        assert_eq!(native.viewport.maximized, Some(true));
    }
}
