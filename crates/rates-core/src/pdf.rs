// File: crates/rates-core/src/pdf.rs
// Summary: Single-page PDF assembly placing a captured chart bitmap.

use std::io::BufWriter;

use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};

use crate::error::{ExportError, Result};
use crate::raster::Bitmap;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Page geometry for chart PDFs. Built once per exporter and cached; the
/// document itself is assembled fresh for every export.
#[derive(Clone, Copy, Debug)]
pub struct PdfEngine {
    page_width: Mm,
    page_height: Mm,
    /// Offset of the image from the page's top and left edges, in points.
    margin_pt: f64,
    /// Width the image is scaled to, in points.
    image_width_pt: f64,
}

impl PdfEngine {
    /// A4 landscape with the reference layout: 15pt margin, 280pt image.
    pub fn landscape_a4() -> Self {
        Self {
            page_width: Mm(297.0),
            page_height: Mm(210.0),
            margin_pt: 15.0,
            image_width_pt: 280.0,
        }
    }

    /// Lay `bitmap` onto a single page, preserving its aspect ratio.
    pub fn single_image_page(&self, bitmap: &Bitmap) -> Result<Vec<u8>> {
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(ExportError::Pdf("empty bitmap".to_string()));
        }

        let (doc, page, layer) = PdfDocument::new(
            "rial-exchange-chart",
            self.page_width,
            self.page_height,
            "chart",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let xobject = ImageXObject {
            width: Px(bitmap.width as usize),
            height: Px(bitmap.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: bitmap.to_rgb(),
            image_filter: None,
            clipping_bbox: None,
        };

        // At 72 dpi the natural image size equals its pixel count in
        // points, so one uniform scale pins the width to `image_width_pt`
        // without distorting the aspect ratio.
        let scale = self.image_width_pt / f64::from(bitmap.width);
        let image_height_pt = f64::from(bitmap.height) * scale;
        // PDF user space grows upward; the margin is specified from the top.
        let y_pt = self.page_height.0 / PT_TO_MM - self.margin_pt - image_height_pt;

        Image::from(xobject).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(self.margin_pt * PT_TO_MM)),
                translate_y: Some(Mm(y_pt * PT_TO_MM)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(72.0),
                ..Default::default()
            },
        );

        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}
