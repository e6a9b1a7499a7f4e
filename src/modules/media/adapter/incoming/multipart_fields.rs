use actix_multipart::form::{bytes::Bytes, text::Text};

use crate::media::application::ports::outgoing::UploadFile;

/// Unwraps an optional multipart text part.
pub fn text_field(field: Option<Text<String>>) -> Option<String> {
    field.map(|t| t.into_inner())
}

/// Converts an in-memory multipart file part; zero-byte parts count as absent.
pub fn upload_field(field: Option<Bytes>) -> Option<UploadFile> {
    field
        .filter(|f| !f.data.is_empty())
        .map(|f| {
            UploadFile::new(
                f.file_name,
                f.content_type.map(|m| m.to_string()),
                f.data.to_vec(),
            )
        })
}
