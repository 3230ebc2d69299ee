use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::config::load_config;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – parameter widgets
// ---------------------------------------------------------------------------

/// Render the parameter sliders, the noise toggle and the reset button.
///
/// Widgets only write into `state.params`; the app calls
/// [`AppState::update`] after the frame's panels have run.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(&state.config.labels.heading);
    ui.separator();

    let bounds = state.config.sliders.clone();
    let params = &mut state.params;

    ui.strong("Harmonic");
    ui.label("Amplitude");
    ui.add(Slider::new(&mut params.harmonic.amplitude, bounds.amplitude.range()).step_by(bounds.amplitude.step));
    ui.label("Frequency");
    ui.add(Slider::new(&mut params.harmonic.frequency, bounds.frequency.range()).step_by(bounds.frequency.step));
    ui.label("Phase");
    ui.add(Slider::new(&mut params.harmonic.phase, bounds.phase.range()).step_by(bounds.phase.step));
    ui.separator();

    ui.strong("Noise");
    ui.label("Noise Mean");
    ui.add(Slider::new(&mut params.noise.mean, bounds.noise_mean.range()).step_by(bounds.noise_mean.step));
    ui.label("Noise Covariance");
    ui.add(
        Slider::new(&mut params.noise.spread, bounds.noise_spread.range())
            .step_by(bounds.noise_spread.step),
    );
    ui.checkbox(&mut params.noise.enabled, "Show Noise");
    ui.separator();

    ui.strong("Filter");
    ui.label("Filter Window Size");
    ui.add(
        Slider::new(&mut params.filter.window_size, bounds.window_range())
            .step_by(bounds.window_size.step),
    );
    ui.separator();

    if ui.button("Reset").clicked() {
        state.reset();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open config…").clicked() {
                open_config_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(out) = &state.output {
            ui.label(format!(
                "{} samples, {} updates",
                out.len(),
                state.recompute_count
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_config_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dashboard config")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match load_config(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                state.set_config(config);
            }
            Err(e) => {
                log::error!("Failed to load config: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
