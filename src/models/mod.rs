// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Python-visible value cells that widgets read and mutate in place.

pub mod cells;
pub mod color;
pub mod date;

pub use cells::{Bool, Float, Int, Str};
pub use color::RGB;
pub use date::Date;

use pyo3::prelude::*;

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Str>()?;
    m.add_class::<Bool>()?;
    m.add_class::<Int>()?;
    m.add_class::<Float>()?;
    m.add_class::<RGB>()?;
    m.add_class::<Date>()?;
    Ok(())
}
