//! Photo attachments: local files are embedded as data URIs,
//! remote URLs are stored as-is.

use crate::errors::{AppError, AppResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fs;
use std::path::Path;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

pub fn is_remote(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.starts_with("data:")
}

/// Turn the `--image` argument into the value stored in `imageUrl`.
pub fn to_image_url(value: &str) -> AppResult<String> {
    if is_remote(value) {
        return Ok(value.to_string());
    }

    let path = Path::new(value);
    let mime = mime_for(path).ok_or_else(|| {
        AppError::InvalidImage(format!("unsupported image type: {}", path.display()))
    })?;
    let bytes = fs::read(path)
        .map_err(|e| AppError::InvalidImage(format!("{}: {}", path.display(), e)))?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Short description for tables: never print a whole data URI.
pub fn describe(image_url: Option<&str>) -> String {
    match image_url {
        None => "--".to_string(),
        Some(v) if v.starts_with("data:") => {
            let mime = v
                .trim_start_matches("data:")
                .split(';')
                .next()
                .unwrap_or("image");
            format!("[{}]", mime)
        }
        Some(v) => v.to_string(),
    }
}
