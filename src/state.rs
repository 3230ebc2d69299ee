use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DashboardConfig;
use crate::signal::model::{PipelineOutput, SignalParams};
use crate::signal::pipeline;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Widgets edit `params` directly. Once per frame [`AppState::update`]
/// compares it with the parameters of the last computation and reruns the
/// pipeline if anything changed.
pub struct AppState {
    /// Startup configuration (slider bounds, defaults, labels).
    pub config: DashboardConfig,

    /// Current widget values.
    pub params: SignalParams,

    /// Parameters the current `output` (or `status_message`) came from.
    computed_params: Option<SignalParams>,

    /// Latest successful pipeline result, shown by the plot.
    pub output: Option<PipelineOutput>,

    /// Error from the latest computation or config load, shown in the top bar.
    pub status_message: Option<String>,

    /// Number of pipeline invocations so far.
    pub recompute_count: u64,

    /// Noise source owned by this session.
    rng: StdRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    /// Build the state from a configuration and run the first computation.
    pub fn new(config: DashboardConfig) -> Self {
        let rng = make_rng(config.seed);
        let mut state = Self {
            params: config.defaults,
            config,
            computed_params: None,
            output: None,
            status_message: None,
            recompute_count: 0,
            rng,
        };
        state.recompute();
        state
    }

    /// Recompute if the widgets changed any parameter since the last run.
    /// Returns whether a computation happened.
    pub fn update(&mut self) -> bool {
        if self.computed_params == Some(self.params) {
            return false;
        }
        self.recompute();
        true
    }

    /// Restore the configured defaults and recompute once.
    pub fn reset(&mut self) {
        log::info!("Resetting parameters to defaults");
        self.params = self.config.defaults;
        self.recompute();
    }

    /// Swap in a new configuration, e.g. one loaded from disk.
    pub fn set_config(&mut self, config: DashboardConfig) {
        if config.seed.is_some() {
            self.rng = make_rng(config.seed);
        }
        self.config = config;
        self.reset();
    }

    /// Run the pipeline with the current parameters and publish the result.
    ///
    /// On failure the previous output stays on screen and the error is
    /// recorded in `status_message`.
    fn recompute(&mut self) {
        self.computed_params = Some(self.params);
        self.recompute_count += 1;

        match pipeline::run(&self.params, &mut self.rng) {
            Ok(output) => {
                self.output = Some(output);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Signal computation failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::info!("Seeding noise generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
