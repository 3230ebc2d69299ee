use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::TraceColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal chart (central panel)
// ---------------------------------------------------------------------------

fn points(x: &[f64], y: &[f64]) -> PlotPoints<'static> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect()
}

/// Render the raw and filtered traces as two overlaid lines.
pub fn signal_plot(ui: &mut Ui, state: &AppState, colors: &TraceColors) {
    let labels = &state.config.labels;

    let output = match &state.output {
        Some(out) if !out.is_empty() => out,
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No signal computed yet.");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&labels.chart_title);
    });

    Plot::new("signal_plot")
        .legend(Legend::default())
        .x_axis_label(labels.x_axis.as_str())
        .y_axis_label(labels.y_axis.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points(&output.time, &output.raw))
                    .name(&labels.raw_trace)
                    .color(colors.raw)
                    .width(1.0),
            );
            plot_ui.line(
                Line::new(points(&output.time, &output.filtered))
                    .name(&labels.filtered_trace)
                    .color(colors.filtered)
                    .width(2.0),
            );
        });
}
