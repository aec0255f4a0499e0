// File: crates/rates-chart/src/lib.rs
// Summary: Minimal software line-chart surface backing the chart export pipeline.

use rates_core::{Bitmap, ChartSurface, ExchangeRates, RasterOptions};

/// Stroke color for the plotted series.
const STROKE: [u8; 4] = [64, 160, 255, 255];
/// On-screen theme backdrop (near-black); exports swap in their own.
const SCREEN_BACKGROUND: [u8; 4] = [18, 18, 20, 255];
/// Breathing room around the plotted line, in logical pixels.
const INSET: f64 = 8.0;

/// A retained-data line chart.
///
/// The surface keeps its series so it can re-render at any capture scale,
/// which is what [`ChartSurface::rasterize`] requires. Its "on-screen"
/// raster is a deterministic 1x render over the screen theme.
pub struct PlotSurface {
    width: u32,
    height: u32,
    series: Vec<(f64, f64)>,
}

impl PlotSurface {
    /// Plot one currency's buy quotes over time, x being the day index in
    /// date order. Days without a buy quote for `currency` are skipped.
    pub fn from_rates(data: &ExchangeRates, currency: &str, width: u32, height: u32) -> Self {
        let series = data
            .values()
            .enumerate()
            .filter_map(|(i, day)| {
                day.get(currency)
                    .and_then(|entry| entry.buy)
                    .map(|buy| (i as f64, buy))
            })
            .collect();
        Self {
            width,
            height,
            series,
        }
    }

    /// Plot an already prepared (x, y) series.
    pub fn from_series(series: Vec<(f64, f64)>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            series,
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    fn render(&self, scale: f32, background: [u8; 4]) -> Bitmap {
        let width = ((self.width as f32 * scale).round() as u32).max(1);
        let height = ((self.height as f32 * scale).round() as u32).max(1);
        let mut bitmap = Bitmap::filled(width, height, background);

        if self.series.len() < 2 {
            return bitmap;
        }

        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &self.series {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let xspan = (x_max - x_min).max(1e-9);
        let yspan = (y_max - y_min).max(1e-9);

        let inset = INSET * f64::from(scale);
        let plot_w = f64::from(width) - inset * 2.0;
        let plot_h = f64::from(height) - inset * 2.0;
        let sx = |x: f64| inset + (x - x_min) / xspan * plot_w;
        let sy = |y: f64| f64::from(height) - inset - (y - y_min) / yspan * plot_h;

        for pair in self.series.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            draw_line(&mut bitmap, sx(x0), sy(y0), sx(x1), sy(y1), STROKE);
        }
        bitmap
    }
}

impl ChartSurface for PlotSurface {
    fn rasterize(&self, options: &RasterOptions) -> anyhow::Result<Bitmap> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("surface has no area");
        }
        Ok(self.render(options.scale, options.background))
    }

    fn raster(&self) -> Option<Bitmap> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.render(1.0, SCREEN_BACKGROUND))
    }
}

/// Plain DDA stroke; good enough for a capture source.
fn draw_line(bitmap: &mut Bitmap, x0: f64, y0: f64, x1: f64, y1: f64, color: [u8; 4]) {
    let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        if x >= 0.0 && y >= 0.0 {
            bitmap.put_pixel(x.round() as u32, y.round() as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_render_as_plain_background() {
        let surface = PlotSurface::from_series(vec![(0.0, 1.0)], 10, 10);
        let bitmap = surface.raster().unwrap();
        assert!(bitmap
            .pixels
            .chunks_exact(4)
            .all(|px| px == SCREEN_BACKGROUND));
    }

    #[test]
    fn flat_series_do_not_divide_by_zero() {
        let surface = PlotSurface::from_series(vec![(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)], 32, 16);
        let bitmap = surface.raster().unwrap();
        assert!(bitmap.pixels.chunks_exact(4).any(|px| px == STROKE));
    }
}
