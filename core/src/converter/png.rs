use std::path::{Path, PathBuf};

use image::{imageops, GenericImageView, Rgba, RgbaImage};

use crate::config::ConversionConfig;
use crate::converter::{write_webp, ConversionRequest, Converter};
use crate::error::ConvertError;
use crate::mime::Mime;

pub struct PngConverter;

impl Converter for PngConverter {
    fn supported_types(&self) -> &[Mime] {
        &[Mime::Png]
    }

    fn dest_dir<'a>(&self, config: &'a ConversionConfig) -> &'a Path {
        &config.png_dir
    }

    fn convert(
        &self,
        input: &[u8],
        request: &ConversionRequest,
        dest_dir: &Path,
    ) -> Result<PathBuf, ConvertError> {
        // Step 1: Decode to RGBA pixels
        let img = image::load_from_memory_with_format(input, image::ImageFormat::Png)
            .map_err(|e| ConvertError::Decode {
                name: request.base_name.to_string(),
                reason: e.to_string(),
            })?;

        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();

        log::debug!(
            "Converting PNG {}: {}x{} pixels at quality {}",
            request.source.display(),
            width,
            height,
            request.quality
        );

        // Step 2: Copy onto a fresh fully-transparent canvas at full scale.
        // `replace` stores pixels without blending, so source alpha values
        // land in the canvas unchanged instead of being composited.
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
        imageops::replace(&mut canvas, &rgba, 0, 0);

        // Step 3: Encode the canvas as lossy WebP
        let encoder = webp::Encoder::from_rgba(canvas.as_raw(), width, height);
        let encoded = encoder
            .encode_simple(false, request.quality as f32)
            .map_err(|e| ConvertError::Encode {
                name: request.base_name.to_string(),
                reason: format!("{e:?}"),
            })?;

        write_webp(&encoded, dest_dir, request.base_name)
    }
}
