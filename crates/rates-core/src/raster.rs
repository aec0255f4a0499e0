// File: crates/rates-core/src/raster.rs
// Summary: Chart surface capture and PNG/SVG/PDF export orchestration.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Local;
use image::{ImageBuffer, Rgba};
use log::error;

use crate::error::{ExportError, Result};
use crate::payload::{chart_filename, content_type, Payload};
use crate::pdf::PdfEngine;

/// Opaque white, the capture backdrop for image exports.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Capture policy for offscreen rasterization.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Supersampling factor applied to the surface's logical size.
    pub scale: f32,
    /// Backdrop composited behind the chart.
    pub background: [u8; 4],
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: WHITE,
        }
    }
}

/// A captured raster: tightly packed RGBA8 rows, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Allocate a bitmap filled with `background`.
    pub fn filled(width: u32, height: u32, background: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&background);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.pixels.clone()).ok_or_else(
                || ExportError::Raster(anyhow::anyhow!("pixel buffer does not match dimensions")),
            )?;
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )?;
        Ok(bytes)
    }

    /// Repack as tightly packed RGB8 rows (alpha dropped), for PDF
    /// embedding.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

/// A rendered chart whose pixels can be captured for export.
///
/// Implemented by whatever draws the on-screen chart; the export pipeline
/// only needs pixel access, never drawing commands.
pub trait ChartSurface {
    /// Re-render offscreen under `options`: logical size multiplied by
    /// `options.scale`, composited over `options.background`.
    fn rasterize(&self, options: &RasterOptions) -> anyhow::Result<Bitmap>;

    /// The surface's current on-screen raster, if it is raster-backed.
    /// SVG export requires one and fails with "canvas not found" otherwise.
    fn raster(&self) -> Option<Bitmap>;
}

/// The closed set of chart export encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    /// Current raster wrapped as a base64 PNG data URI inside an `<svg>`
    /// shell. An embedded-raster stand-in, not true vector output.
    Svg,
    Pdf,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
            ChartFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ChartFormat::Png => content_type::PNG,
            ChartFormat::Svg => content_type::SVG,
            ChartFormat::Pdf => content_type::PDF,
        }
    }
}

/// Chart export service: a capture policy plus a lazily built PDF engine.
///
/// Construct one per consumer and share it by reference; there is no
/// global instance.
#[derive(Debug, Default)]
pub struct ChartExporter {
    options: RasterOptions,
    pdf: OnceLock<PdfEngine>,
}

impl ChartExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RasterOptions) -> Self {
        Self {
            options,
            pdf: OnceLock::new(),
        }
    }

    /// Export `surface`, naming the file from the current local time.
    pub fn export(&self, surface: &dyn ChartSurface, format: ChartFormat) -> Result<Payload> {
        self.export_named(
            surface,
            format,
            chart_filename(Local::now(), format.extension()),
        )
    }

    /// Export `surface` under an explicit filename.
    pub fn export_named(
        &self,
        surface: &dyn ChartSurface,
        format: ChartFormat,
        filename: String,
    ) -> Result<Payload> {
        let encoded = match format {
            ChartFormat::Png => self.encode_png(surface),
            ChartFormat::Svg => self.encode_svg(surface),
            ChartFormat::Pdf => self.encode_pdf(surface),
        };
        match encoded {
            Ok(bytes) => Ok(Payload::new(filename, format.content_type(), bytes)),
            Err(err) => {
                error!("{} chart export failed: {err}", format.extension());
                Err(err)
            }
        }
    }

    fn capture(&self, surface: &dyn ChartSurface) -> Result<Bitmap> {
        surface.rasterize(&self.options).map_err(ExportError::Raster)
    }

    fn encode_png(&self, surface: &dyn ChartSurface) -> Result<Vec<u8>> {
        self.capture(surface)?.encode_png()
    }

    fn encode_svg(&self, surface: &dyn ChartSurface) -> Result<Vec<u8>> {
        let raster = surface.raster().ok_or(ExportError::CanvasNotFound)?;
        let png = raster.encode_png()?;
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{}\" height=\"{}\">\n",
            raster.width, raster.height
        ));
        svg.push_str(&format!(
            "  <image xlink:href=\"data:image/png;base64,{}\" width=\"{}\" height=\"{}\"/>\n",
            BASE64.encode(&png),
            raster.width,
            raster.height
        ));
        svg.push_str("</svg>\n");
        Ok(svg.into_bytes())
    }

    fn encode_pdf(&self, surface: &dyn ChartSurface) -> Result<Vec<u8>> {
        let bitmap = self.capture(surface)?;
        let engine = self.pdf.get_or_init(PdfEngine::landscape_a4);
        engine.single_image_page(&bitmap)
    }
}
