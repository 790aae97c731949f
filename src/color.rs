use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Colours of the plotted items
// ---------------------------------------------------------------------------

/// One colour per kind of plotted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub values: Color32,
    pub mean: Color32,
    pub spread: Color32,
    pub autocorrelation: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let p = generate_palette(4);
        SeriesColors {
            values: p[0],
            mean: p[1],
            spread: p[2],
            autocorrelation: p[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn series_colours_are_distinct() {
        let c = SeriesColors::default();
        let all = [c.values, c.mean, c.spread, c.autocorrelation];
        for i in 0..all.len() {
            for j in i + 1..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
}
