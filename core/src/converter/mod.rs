pub mod jpeg;
pub mod png;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::mime::Mime;

/// One file's conversion parameters. Built by the pipeline, consumed once.
#[derive(Debug)]
pub struct ConversionRequest<'a> {
    pub source: &'a Path,
    pub base_name: &'a str,
    /// WebP encoder quality 0-100
    pub quality: u8,
}

pub trait Converter: Send + Sync {
    /// MIME types this converter accepts.
    fn supported_types(&self) -> &[Mime];

    /// Destination directory for this converter's outputs.
    fn dest_dir<'a>(&self, config: &'a ConversionConfig) -> &'a Path;

    /// Decode `input`, re-encode it as WebP at the request quality, and
    /// write `<dest_dir>/<base_name>.webp`. Returns the written path.
    fn convert(
        &self,
        input: &[u8],
        request: &ConversionRequest,
        dest_dir: &Path,
    ) -> Result<PathBuf, ConvertError>;
}

/// Write encoded WebP bytes to `<dest_dir>/<base_name>.webp`. The
/// destination directory is expected to exist; an existing output file is
/// overwritten.
pub(crate) fn write_webp(
    bytes: &[u8],
    dest_dir: &Path,
    base_name: &str,
) -> Result<PathBuf, ConvertError> {
    let output = dest_dir.join(format!("{base_name}.webp"));
    fs::write(&output, bytes).map_err(|e| ConvertError::WriteFile {
        path: output.clone(),
        source: e,
    })?;
    Ok(output)
}
