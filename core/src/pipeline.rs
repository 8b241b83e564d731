use std::fs;
use std::path::Path;

use crate::config::ConversionConfig;
use crate::converter::jpeg::JpegConverter;
use crate::converter::png::PngConverter;
use crate::converter::{ConversionRequest, Converter};
use crate::error::ConvertError;
use crate::mime::Mime;

pub struct Pipeline {
    converters: Vec<Box<dyn Converter>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Pipeline with the PNG and JPEG converters registered.
    pub fn with_defaults() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(PngConverter));
        pipeline.register(Box::new(JpegConverter));
        pipeline
    }

    pub fn register(&mut self, converter: Box<dyn Converter>) {
        self.converters.push(converter);
    }

    /// Find a converter that supports the given MIME type.
    fn find_converter(&self, mime: Mime) -> Option<&dyn Converter> {
        self.converters
            .iter()
            .find(|c| c.supported_types().contains(&mime))
            .map(|c| c.as_ref())
    }

    /// Classify a single file, dispatch it to the matching converter, and
    /// return its base name on success. Every failure is per-file; nothing
    /// here aborts a batch.
    pub fn process_file(
        &self,
        path: &Path,
        config: &ConversionConfig,
    ) -> Result<String, ConvertError> {
        let base_name = base_name(path);

        let data = fs::read(path).map_err(|e| ConvertError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mime = Mime::sniff(&data);
        if !mime.is_supported() {
            return Err(ConvertError::UnsupportedMime {
                name: base_name,
                mime: mime.as_str().to_string(),
            });
        }

        let converter = match self.find_converter(mime) {
            Some(c) => c,
            None => {
                // The allow-list and the registry must agree; a gap here is
                // an internal invariant violation, surfaced as a per-file
                // failure rather than a panic.
                log::error!("no converter registered for supported mime type {mime}");
                return Err(ConvertError::UnsupportedMime {
                    name: base_name,
                    mime: mime.as_str().to_string(),
                });
            }
        };

        let request = ConversionRequest {
            source: path,
            base_name: &base_name,
            quality: config.quality,
        };
        let output = converter.convert(&data, &request, converter.dest_dir(config))?;
        log::debug!("{} -> {}", path.display(), output.display());

        Ok(base_name)
    }
}

/// File name without its extension.
fn base_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
