/// Signal core: synthesis, smoothing, and the pipeline that chains them.
///
/// Architecture:
/// ```text
///   SignalParams (7 values from the dashboard)
///        │
///        ▼
///   ┌──────────┐
///   │  synth    │  harmonic + optional Gaussian noise → (TimeAxis, raw)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  centered moving average → filtered
///   └──────────┘
///        │
///        ▼
///   PipelineOutput (time, raw, filtered) → plot
/// ```

pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod synth;
