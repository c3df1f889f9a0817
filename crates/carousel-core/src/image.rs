//! Embedding raw image bytes as data URIs for image elements.

use crate::error::{CoreError, CoreResult};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
    Avif,
    Svg,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Avif => "image/avif",
            ImageFormat::Svg => "image/svg+xml",
        }
    }

    /// Format for a MIME type, as found in a data URI header.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::WebP),
            "image/bmp" => Some(ImageFormat::Bmp),
            "image/avif" => Some(ImageFormat::Avif),
            "image/svg+xml" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G']) {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(ImageFormat::Gif);
        }
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        if data.len() >= 12 && &data[4..8] == b"ftyp" && (&data[8..12] == b"avif" || &data[8..12] == b"avis") {
            return Some(ImageFormat::Avif);
        }
        if data.starts_with(b"BM") {
            return Some(ImageFormat::Bmp);
        }
        if is_svg(data) {
            return Some(ImageFormat::Svg);
        }
        None
    }
}

/// Encode image bytes as a base64 data URI, sniffing the format.
pub fn data_uri_from_bytes(data: &[u8]) -> CoreResult<String> {
    if data.is_empty() {
        return Err(CoreError::EmptyImage);
    }
    let format = ImageFormat::from_magic_bytes(data).ok_or(CoreError::UnsupportedImage)?;
    Ok(format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data)))
}

/// Decode a base64 image data URI back into its format and bytes.
pub fn decode_data_uri(uri: &str) -> CoreResult<(ImageFormat, Vec<u8>)> {
    let malformed = || CoreError::MalformedDataUri(truncate(uri));
    let rest = uri.strip_prefix("data:").ok_or_else(malformed)?;
    let (header, payload) = rest.split_once(',').ok_or_else(malformed)?;
    let mime = header.strip_suffix(";base64").ok_or_else(malformed)?;
    let format = ImageFormat::from_mime_type(mime).ok_or(CoreError::UnsupportedImage)?;
    let bytes = STANDARD.decode(payload.trim()).map_err(|_| malformed())?;
    if bytes.is_empty() {
        return Err(CoreError::EmptyImage);
    }
    Ok((format, bytes))
}

/// Whether an image source is embedded rather than fetched.
pub fn is_data_uri(url: &str) -> bool {
    url.starts_with("data:")
}

/// SVG is text: an optional BOM and XML prolog, then an `<svg` root early on.
fn is_svg(data: &[u8]) -> bool {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    let start = data.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(data.len());
    let head = &data[start..data.len().min(start + 1024)];
    if head.starts_with(b"<svg") {
        return true;
    }
    (head.starts_with(b"<?xml") || head.starts_with(b"<!--") || head.starts_with(b"<!DOCTYPE"))
        && head.windows(4).any(|w| w == b"<svg")
}

fn truncate(uri: &str) -> String {
    uri.chars().take(32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_magic_bytes() {
        assert_eq!(ImageFormat::from_magic_bytes(PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_magic_bytes(b"GIF89a.."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_magic_bytes(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_magic_bytes(b"BM6\0\0\0"), Some(ImageFormat::Bmp));
        assert_eq!(
            ImageFormat::from_magic_bytes(b"\0\0\0\x1cftypavif\0\0"),
            Some(ImageFormat::Avif)
        );
        assert_eq!(ImageFormat::from_magic_bytes(b"hello"), None);
    }

    #[test]
    fn test_svg_detection() {
        let plain = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert_eq!(ImageFormat::from_magic_bytes(plain), Some(ImageFormat::Svg));

        let prolog = b"\xEF\xBB\xBF  <?xml version=\"1.0\"?>\n<svg viewBox=\"0 0 1 1\"></svg>";
        assert_eq!(ImageFormat::from_magic_bytes(prolog), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::from_magic_bytes(b"<?xml version=\"1.0\"?><feed/>"), None);

        let uri = data_uri_from_bytes(plain).unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap().0, ImageFormat::Svg);
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = data_uri_from_bytes(PNG_HEADER).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(is_data_uri(&uri));
        assert!(!is_data_uri("https://example.com/a.png"));
    }

    #[test]
    fn test_decode_data_uri() {
        let uri = data_uri_from_bytes(PNG_HEADER).unwrap();
        let (format, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(bytes, PNG_HEADER);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(data_uri_from_bytes(&[]), Err(CoreError::EmptyImage)));
        assert!(matches!(data_uri_from_bytes(b"plain text"), Err(CoreError::UnsupportedImage)));
        assert!(matches!(
            decode_data_uri("https://example.com/a.png"),
            Err(CoreError::MalformedDataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,!!!"),
            Err(CoreError::MalformedDataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:text/plain;base64,aGk="),
            Err(CoreError::UnsupportedImage)
        ));
    }
}
