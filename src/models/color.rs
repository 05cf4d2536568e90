// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! RGB color cell for the color picker button.

use pyo3::prelude::*;

/// Mutable RGB color with float channels in the `0.0..=1.0` range.
#[pyclass]
pub struct RGB {
    #[pyo3(get, set)]
    pub r: f32,
    #[pyo3(get, set)]
    pub g: f32,
    #[pyo3(get, set)]
    pub b: f32,
}

#[pymethods]
impl RGB {
    #[new]
    fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn __repr__(&self) -> String {
        format!("RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl RGB {
    /// View the channels as the array egui's color widgets edit in place.
    pub(crate) fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub(crate) fn set_channels(&mut self, channels: [f32; 3]) {
        self.r = channels[0];
        self.g = channels[1];
        self.b = channels[2];
    }
}

#[cfg(test)]
mod tests {
    use super::RGB;

    #[test]
    fn channel_array_round_trips() {
        let mut color = RGB::new(0.1, 0.2, 0.3);
        let mut channels = color.channels();
        channels[1] = 0.9;
        color.set_channels(channels);
        assert_eq!(color.channels(), [0.1, 0.9, 0.3]);
    }
}
