use std::f64::consts::PI;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::signal::model::{SignalParams, SAMPLE_COUNT};

// ---------------------------------------------------------------------------
// Slider bounds
// ---------------------------------------------------------------------------

/// Bounds and step of one dashboard slider. Only the UI uses these; the
/// signal core accepts values outside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            bail!("{name} slider: bounds must be finite");
        }
        if self.min > self.max {
            bail!("{name} slider: min {} is greater than max {}", self.min, self.max);
        }
        if self.step <= 0.0 {
            bail!("{name} slider: step must be positive, got {}", self.step);
        }
        Ok(())
    }
}

/// One slider as written in a config file; missing fields keep that
/// slider's default.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct PartialRange {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

impl PartialRange {
    fn over(self, base: SliderRange) -> SliderRange {
        SliderRange {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            step: self.step.unwrap_or(base.step),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct SliderBoundsFile {
    amplitude: PartialRange,
    frequency: PartialRange,
    phase: PartialRange,
    noise_mean: PartialRange,
    noise_spread: PartialRange,
    window_size: PartialRange,
}

impl From<SliderBoundsFile> for SliderBounds {
    fn from(file: SliderBoundsFile) -> Self {
        let base = SliderBounds::default();
        Self {
            amplitude: file.amplitude.over(base.amplitude),
            frequency: file.frequency.over(base.frequency),
            phase: file.phase.over(base.phase),
            noise_mean: file.noise_mean.over(base.noise_mean),
            noise_spread: file.noise_spread.over(base.noise_spread),
            window_size: file.window_size.over(base.window_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SliderBoundsFile")]
pub struct SliderBounds {
    pub amplitude: SliderRange,
    pub frequency: SliderRange,
    pub phase: SliderRange,
    pub noise_mean: SliderRange,
    pub noise_spread: SliderRange,
    pub window_size: SliderRange,
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            amplitude: SliderRange::new(0.0, 5.0, 0.1),
            frequency: SliderRange::new(1.0, 20.0, 0.1),
            phase: SliderRange::new(-PI, PI, 0.1),
            noise_mean: SliderRange::new(-1.0, 1.0, 0.1),
            noise_spread: SliderRange::new(0.0, 1.0, 0.1),
            window_size: SliderRange::new(1.0, 20.0, 1.0),
        }
    }
}

impl SliderBounds {
    /// Integer range for the window-size slider.
    pub fn window_range(&self) -> RangeInclusive<usize> {
        let lo = self.window_size.min.round().max(1.0) as usize;
        let hi = (self.window_size.max.round() as usize).max(lo);
        lo..=hi
    }

    fn validate(&self) -> Result<()> {
        self.amplitude.validate("amplitude")?;
        self.frequency.validate("frequency")?;
        self.phase.validate("phase")?;
        self.noise_mean.validate("noise mean")?;
        self.noise_spread.validate("noise spread")?;
        self.window_size.validate("window size")?;
        if self.window_size.min < 1.0 {
            bail!("window size slider: min must be at least 1");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub heading: String,
    pub chart_title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub raw_trace: String,
    pub filtered_trace: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            heading: "Harmonic Signal Generator".to_string(),
            chart_title: "Harmonic Signal with Noise and Filtering".to_string(),
            x_axis: "Time".to_string(),
            y_axis: "Amplitude".to_string(),
            raw_trace: "Noisy Signal".to_string(),
            filtered_trace: "Filtered Signal".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Immutable startup configuration handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Values restored by the Reset button and used on startup.
    pub defaults: SignalParams,
    pub sliders: SliderBounds,
    pub labels: Labels,
    /// Fixed seed for the noise generator; OS entropy when absent.
    pub seed: Option<u64>,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        self.sliders.validate()?;

        let d = &self.defaults;
        for (name, v) in [
            ("amplitude", d.harmonic.amplitude),
            ("frequency", d.harmonic.frequency),
            ("phase", d.harmonic.phase),
            ("noise mean", d.noise.mean),
            ("noise spread", d.noise.spread),
        ] {
            if !v.is_finite() {
                bail!("default {name} must be finite");
            }
        }
        if d.noise.spread < 0.0 {
            bail!("default noise spread must be non-negative");
        }
        if d.filter.window_size == 0 {
            bail!("default window size must be at least 1");
        }
        if d.filter.window_size > SAMPLE_COUNT {
            bail!(
                "default window size {} exceeds the {SAMPLE_COUNT} samples per trace",
                d.filter.window_size
            );
        }
        Ok(())
    }
}

/// Parse and validate a JSON configuration string.
pub fn parse_config(text: &str) -> Result<DashboardConfig> {
    let config: DashboardConfig = serde_json::from_str(text).context("parsing config JSON")?;
    config.validate().context("validating config")?;
    Ok(config)
}

/// Load a dashboard configuration from a JSON file.
///
/// Every field is optional; anything missing keeps its default:
///
/// ```json
/// {
///   "defaults": { "harmonic": { "frequency": 3.0 }, "filter": { "window_size": 9 } },
///   "sliders":  { "frequency": { "min": 0.5, "max": 40.0, "step": 0.5 } },
///   "seed": 42
/// }
/// ```
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading {}", path.display()))
}
