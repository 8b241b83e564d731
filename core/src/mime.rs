use std::fmt;

/// MIME types the conversion pipeline accepts. `image/jpg` is not a
/// registered type and the sniffer never produces it; it stays in the list
/// as a compatibility alias for callers that pass it.
pub const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mime {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
    Tiff,
    Text,
    Binary,
}

impl Mime {
    /// Classify file content by its leading magic bytes. Printable UTF-8
    /// falls back to `text/plain`, everything else to
    /// `application/octet-stream`.
    pub fn sniff(bytes: &[u8]) -> Self {
        // PNG: \x89PNG
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Mime::Png;
        }

        // JPEG: \xFF\xD8\xFF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Mime::Jpeg;
        }

        // GIF: GIF87a or GIF89a
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Mime::Gif;
        }

        // WebP: RIFF....WEBP
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            return Mime::Webp;
        }

        // BMP
        if bytes.starts_with(b"BM") {
            return Mime::Bmp;
        }

        // TIFF, little- and big-endian
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Mime::Tiff;
        }

        if looks_like_text(bytes) {
            return Mime::Text;
        }

        Mime::Binary
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mime::Png => "image/png",
            Mime::Jpeg => "image/jpeg",
            Mime::Gif => "image/gif",
            Mime::Webp => "image/webp",
            Mime::Bmp => "image/bmp",
            Mime::Tiff => "image/tiff",
            Mime::Text => "text/plain",
            Mime::Binary => "application/octet-stream",
        }
    }

    /// Whether this type is in the conversion allow-list.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_MIME_TYPES.contains(&self.as_str())
    }
}

impl fmt::Display for Mime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample the first 512 bytes; valid UTF-8 without control characters
/// (other than whitespace) counts as text.
fn looks_like_text(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }

    let sample = &bytes[..bytes.len().min(512)];
    let text = match std::str::from_utf8(sample) {
        Ok(s) => s,
        // A multi-byte sequence may be cut at the sample boundary.
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&sample[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return false,
    };

    !text
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
}
