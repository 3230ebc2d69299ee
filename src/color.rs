use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// `n` evenly spaced hues starting at `start_hue` degrees.
pub fn hue_palette(n: usize, start_hue: f32) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = start_hue + (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colours for the raw and filtered lines.
#[derive(Debug, Clone, Copy)]
pub struct TraceColors {
    pub raw: Color32,
    pub filtered: Color32,
}

impl Default for TraceColors {
    fn default() -> Self {
        // blue-ish raw trace, orange filtered trace
        let colors = hue_palette(2, 210.0);
        Self {
            raw: colors[0].gamma_multiply(0.6),
            filtered: colors[1],
        }
    }
}
