use crate::{Error, Result};
use axum::{extract::Multipart, http::StatusCode};
use tracing::{debug, warn};

pub const IMAGE_FIELD: &str = "image";

/// Used when the uploaded part does not declare a content type.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Pulls the file uploaded under the `image` form field.
///
/// Only parts with a file name count as uploads. Any failure while draining
/// the part's content stream, truncation included, is a read failure.
pub async fn read_image(mut multipart: Multipart) -> Result<UploadedImage> {
    loop {
        let mut field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!(
                    "Upload exceeds the configured server.max_upload_bytes limit: {}",
                    e.body_text()
                );
                return Err(Error::MissingFile);
            }
            Err(e) => {
                warn!("Failed to parse multipart form: {}", e.body_text());
                return Err(Error::MissingFile);
            }
        };

        if field.name() != Some(IMAGE_FIELD) {
            debug!("Skipping form field {:?}", field.name());
            continue;
        }

        if field.file_name().is_none() {
            warn!("Form field '{}' is not a file upload", IMAGE_FIELD);
            return Err(Error::MissingFile);
        }

        let mime_type = match field.content_type() {
            Some(content_type) => content_type.to_string(),
            None => {
                warn!(
                    "Uploaded image has no content type, defaulting to {}",
                    DEFAULT_MIME_TYPE
                );
                DEFAULT_MIME_TYPE.to_string()
            }
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| Error::Read(e.body_text()))?
        {
            bytes.extend_from_slice(&chunk);
        }

        debug!("Read uploaded image: {} bytes, {}", bytes.len(), mime_type);

        return Ok(UploadedImage { bytes, mime_type });
    }

    Err(Error::MissingFile)
}
