use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::config::ConversionConfig;
use crate::converter::{write_webp, ConversionRequest, Converter};
use crate::error::ConvertError;
use crate::mime::Mime;

pub struct JpegConverter;

impl Converter for JpegConverter {
    fn supported_types(&self) -> &[Mime] {
        &[Mime::Jpeg]
    }

    fn dest_dir<'a>(&self, config: &'a ConversionConfig) -> &'a Path {
        &config.jpeg_dir
    }

    // JPEG carries no alpha channel, so the decoded image re-encodes
    // directly without a canvas pass.
    fn convert(
        &self,
        input: &[u8],
        request: &ConversionRequest,
        dest_dir: &Path,
    ) -> Result<PathBuf, ConvertError> {
        let img = image::load_from_memory_with_format(input, image::ImageFormat::Jpeg)
            .map_err(|e| ConvertError::Decode {
                name: request.base_name.to_string(),
                reason: e.to_string(),
            })?;

        let (width, height) = img.dimensions();
        let rgb = img.to_rgb8();

        log::debug!(
            "Converting JPEG {}: {}x{} pixels at quality {}",
            request.source.display(),
            width,
            height,
            request.quality
        );

        let encoder = webp::Encoder::from_rgb(rgb.as_raw(), width, height);
        let encoded = encoder
            .encode_simple(false, request.quality as f32)
            .map_err(|e| ConvertError::Encode {
                name: request.base_name.to_string(),
                reason: format!("{e:?}"),
            })?;

        write_webp(&encoded, dest_dir, request.base_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn sample_jpeg() -> Vec<u8> {
        let img = RgbImage::from_fn(48, 32, |x, y| {
            Rgb([(x * 5) as u8, (y * 7) as u8, ((x + y) * 3) as u8])
        });
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
            .unwrap();
        buf
    }

    fn request<'a>(base_name: &'a str, quality: u8) -> ConversionRequest<'a> {
        ConversionRequest {
            source: Path::new("unused"),
            base_name,
            quality,
        }
    }

    #[test]
    fn test_convert_writes_webp() {
        let dest = tempfile::tempdir().unwrap();
        let output = JpegConverter
            .convert(&sample_jpeg(), &request("photo", 85), dest.path())
            .unwrap();

        assert_eq!(output, dest.path().join("photo.webp"));
        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(Mime::sniff(&bytes), Mime::Webp);
    }

    #[test]
    fn test_dimensions_unchanged() {
        let dest = tempfile::tempdir().unwrap();
        let output = JpegConverter
            .convert(&sample_jpeg(), &request("photo", 85), dest.path())
            .unwrap();

        let bytes = std::fs::read(&output).unwrap();
        let decoded =
            image::load_from_memory_with_format(&bytes, image::ImageFormat::WebP).unwrap();
        assert_eq!(decoded.dimensions(), (48, 32));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dest = tempfile::tempdir().unwrap();
        let result = JpegConverter.convert(
            &[0xFF, 0xD8, 0xFF, 0x00, 0x00],
            &request("broken", 85),
            dest.path(),
        );
        assert!(matches!(result, Err(ConvertError::Decode { .. })));
        assert!(!dest.path().join("broken.webp").exists());
    }
}
