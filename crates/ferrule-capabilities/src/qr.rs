//! QR code raster encoder producing PNG images.
//!
//! The symbol is rendered with the largest whole-pixel module size that fits
//! the configured edge length (quiet zone included), then centred on a white
//! canvas of exactly `size × size` pixels. Output is deterministic: the same
//! text always yields byte-identical PNG data.

use std::io::Cursor;

use ferrule_core::{EcTier, RasterEncoder, RasterError, RasterParams};
use image::{imageops, DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

/// Quiet-zone width, in modules, on each side of a standard QR symbol.
const QUIET_ZONE_MODULES: u32 = 4;

const WHITE: Luma<u8> = Luma([255]);

/// Encodes text as a fixed-size greyscale PNG QR code.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrEncoder {
    params: RasterParams,
}

impl QrEncoder {
    /// Create an encoder with the given parameters.
    pub fn new(params: RasterParams) -> Self {
        Self { params }
    }

    fn render(&self, text: &str) -> Result<GrayImage, RasterError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(self.params.ec_tier))
            .map_err(|e| RasterError::Encode {
                reason: e.to_string(),
            })?;

        let modules = code.width() as u32 + 2 * QUIET_ZONE_MODULES;
        let size = self.params.size;
        let module_px = size / modules;
        if module_px == 0 {
            return Err(RasterError::ExceedsResolution {
                required: modules,
                size,
            });
        }

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(module_px, module_px)
            .build();

        let mut canvas = GrayImage::from_pixel(size, size, WHITE);
        let x = i64::from((size - symbol.width()) / 2);
        let y = i64::from((size - symbol.height()) / 2);
        imageops::overlay(&mut canvas, &symbol, x, y);
        Ok(canvas)
    }
}

impl RasterEncoder for QrEncoder {
    fn params(&self) -> RasterParams {
        self.params
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, RasterError> {
        if text.is_empty() {
            return Err(RasterError::EmptyPayload);
        }
        let canvas = self.render(text)?;
        let mut png = Vec::new();
        DynamicImage::ImageLuma8(canvas)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| RasterError::Write {
                reason: e.to_string(),
            })?;
        Ok(png)
    }
}

fn ec_level(tier: EcTier) -> EcLevel {
    match tier {
        EcTier::Low => EcLevel::L,
        EcTier::Medium => EcLevel::M,
        EcTier::Quartile => EcLevel::Q,
        EcTier::High => EcLevel::H,
    }
}
