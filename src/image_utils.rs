use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Screenshot payload in the shape the provider expects: bare base64 plus a
/// MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

/// Accepts either a bare base64 string or a `data:<mime>;base64,<data>` URL
/// as produced by a FileReader in the browser. The decoded bytes are thrown
/// away; decoding only proves the payload is well-formed before it goes out
/// to the provider. Bare base64 is assumed to be JPEG.
pub fn parse_image_payload(image: &str) -> Result<ImagePayload> {
    let (mime_type, data) = match image.strip_prefix("data:") {
        Some(rest) => {
            let (mime, data) = rest
                .split_once(";base64,")
                .ok_or_else(|| anyhow!("data URL is not base64-encoded"))?;
            if !mime.starts_with("image/") {
                return Err(anyhow!("unsupported MIME type: {mime}"));
            }
            (mime.to_string(), data)
        }
        None => ("image/jpeg".to_string(), image),
    };

    BASE64
        .decode(data)
        .map_err(|e| anyhow!("invalid base64 image data: {e}"))?;

    Ok(ImagePayload {
        mime_type,
        data: data.to_string(),
    })
}
