use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Number of samples on every time axis and trace.
pub const SAMPLE_COUNT: usize = 1000;

/// Evenly spaced sample times over the closed interval [0, 1].
pub type TimeAxis = Vec<f64>;

/// Amplitude at each sample of a [`TimeAxis`].
pub type SignalTrace = Vec<f64>;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Shape of the clean sinusoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonicParams {
    pub amplitude: f64,
    pub frequency: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Default for HarmonicParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 5.0,
            phase: 0.0,
        }
    }
}

/// Additive Gaussian noise.
///
/// `spread` is handed to the normal sampler as its standard deviation, even
/// though the dashboard labels it "Noise Covariance".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub mean: f64,
    pub spread: f64,
    pub enabled: bool,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            spread: 0.1,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub window_size: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self { window_size: 5 }
    }
}

/// The full set of values the dashboard collects before each recompute.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    pub harmonic: HarmonicParams,
    pub noise: NoiseParams,
    pub filter: FilterParams,
}

// ---------------------------------------------------------------------------
// Pipeline output
// ---------------------------------------------------------------------------

/// One computation's worth of data for the chart. All three sequences share
/// the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub time: TimeAxis,
    pub raw: SignalTrace,
    pub filtered: SignalTrace,
}

impl PipelineOutput {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
