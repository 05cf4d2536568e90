// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Crate-level error type surfaced to Python as `RuntimeError`.

use pyo3::PyErr;
use pyo3::exceptions::PyRuntimeError;
use thiserror::Error;

/// Failure modes of the GUI bridge.
#[derive(Debug, Error)]
pub enum GuiError {
    #[error(
        "UI functions may only be called from inside the update callback, \
         on the thread that is running run_native"
    )]
    NoActiveUi,

    #[error("run_native is already driving an event loop in this process")]
    EventLoopRunning,

    #[error("cannot create a window: {0}")]
    WindowCreation(String),
}

pub type Result<T, E = GuiError> = std::result::Result<T, E>;

impl From<GuiError> for PyErr {
    fn from(err: GuiError) -> Self {
        PyRuntimeError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::GuiError;

    // Messages must tell the caller what to fix, not where the crate broke.
    #[test]
    fn error_messages_name_the_misuse() {
        assert!(GuiError::NoActiveUi.to_string().contains("update callback"));
        assert!(
            GuiError::EventLoopRunning
                .to_string()
                .contains("already driving an event loop")
        );
        assert_eq!(
            GuiError::WindowCreation("no display".into()).to_string(),
            "cannot create a window: no display"
        );
    }
}
