use std::path::PathBuf;

/// Encoder quality used when the caller does not supply one.
pub const DEFAULT_QUALITY: u8 = 85;

#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// WebP encoder quality 0-100 (higher = larger file, better fidelity)
    pub quality: u8,
    /// Destination directory for converted PNG sources
    pub png_dir: PathBuf,
    /// Destination directory for converted JPEG sources
    pub jpeg_dir: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            png_dir: PathBuf::from("processed-png"),
            jpeg_dir: PathBuf::from("processed-jpeg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConversionConfig::default();
        assert_eq!(config.quality, 85);
        assert_eq!(config.png_dir, PathBuf::from("processed-png"));
        assert_eq!(config.jpeg_dir, PathBuf::from("processed-jpeg"));
    }
}
