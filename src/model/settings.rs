use std::{
    cell::{Ref, RefCell},
    path::Path,
    rc::Rc,
};

use crate::foundation::error::{PlotError, PlotResult};

/// Plot configuration, as edited by a settings panel and serialized with camelCase keys.
///
/// Every plot re-reads its settings at the start of each frame, so edits take effect on the next
/// frame after `draw()`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Settings {
    /// Side length of the square plot surface in pixels.
    pub canvas_size: u32,
    /// Visibility cutoff in percent, compared against `amount * 100`.
    pub color_threshold: f64,
    /// Target radius of a screenshot's connection circle.
    pub screenshot_circle_size: f64,
    /// Largest target radius of a swatch circle.
    pub color_circle_max_size: f64,
    /// Size swatches by saturation instead of a fixed radius.
    pub plot_saturation: bool,
    /// Pull swatches toward the center as they get lighter.
    pub plot_lightness: bool,
    /// Draw connection lines and circles.
    pub show_color_connections: bool,
    /// Draw the hue wheel behind the plot.
    pub show_color_wheel: bool,
    /// Alpha of the hue wheel's tick gradients.
    pub ticks_alpha: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: 500,
            color_threshold: 0.0,
            screenshot_circle_size: 2.0,
            color_circle_max_size: 15.0,
            plot_saturation: false,
            plot_lightness: false,
            show_color_connections: true,
            show_color_wheel: false,
            ticks_alpha: 0.04,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| PlotError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> PlotResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| PlotError::io(format!("read settings '{}': {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Reject values the plot cannot be laid out with.
    pub fn validate(&self) -> PlotResult<()> {
        if self.canvas_size == 0 || self.canvas_size > u32::from(u16::MAX) {
            return Err(PlotError::validation(format!(
                "canvasSize must be in 1..={}, got {}",
                u16::MAX,
                self.canvas_size
            )));
        }
        if !(0.0..=100.0).contains(&self.color_threshold) {
            return Err(PlotError::validation(format!(
                "colorThreshold must be in 0..=100, got {}",
                self.color_threshold
            )));
        }
        for (name, v) in [
            ("screenshotCircleSize", self.screenshot_circle_size),
            ("colorCircleMaxSize", self.color_circle_max_size),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(PlotError::validation(format!(
                    "{name} must be a finite non-negative number, got {v}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.ticks_alpha) {
            return Err(PlotError::validation(format!(
                "ticksAlpha must be in 0..=1, got {}",
                self.ticks_alpha
            )));
        }
        Ok(())
    }

    /// Visibility cutoff as an `amount` fraction.
    pub fn threshold_fraction(&self) -> f64 {
        self.color_threshold / 100.0
    }

    /// Whether a color covering `amount` of its screenshot clears the visibility cutoff.
    pub fn is_visible(&self, amount: f64) -> bool {
        self.threshold_fraction() < amount
    }
}

/// Settings shared between a settings source and every plot reading them.
///
/// Plots are single-threaded, so this is a plain `Rc<RefCell<_>>`. Writers mutate through
/// [`SharedSettings::update`] and then call `draw()` on the plots that should react.
#[derive(Clone, Debug, Default)]
pub struct SharedSettings(Rc<RefCell<Settings>>);

impl SharedSettings {
    /// Wrap an initial value.
    pub fn new(settings: Settings) -> Self {
        Self(Rc::new(RefCell::new(settings)))
    }

    /// Borrow the current value.
    pub fn borrow(&self) -> Ref<'_, Settings> {
        self.0.borrow()
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Settings {
        self.0.borrow().clone()
    }

    /// Mutate in place.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) {
        f(&mut self.0.borrow_mut());
    }

    /// Replace the whole value.
    pub fn replace(&self, settings: Settings) -> Settings {
        self.0.replace(settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/settings.rs"]
mod tests;
