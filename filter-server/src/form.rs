use crate::error::{ApiError, ApiResult};
use axum::extract::Multipart;
use bytes::Bytes;
use std::collections::HashMap;

pub const IMAGE_FIELD: &str = "image";
pub const FILTER_FIELD: &str = "filter";

/// The parts of one multipart upload this service cares about.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub image: Option<Bytes>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// First value of a text field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Fill in fields the body did not carry from the URL query string.
    pub fn merge_query(&mut self, query: HashMap<String, String>) {
        for (name, value) in query {
            if name != IMAGE_FIELD {
                self.fields.entry(name).or_insert(value);
            }
        }
    }

    pub fn take_image(&mut self) -> ApiResult<Bytes> {
        self.image.take().ok_or(ApiError::ReadImage)
    }
}

/// Drain a multipart body. The first `image` part is kept as raw bytes and the
/// first value of every other named part as text. A malformed or oversized
/// body is reported as an unreadable image.
pub async fn read_upload_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let mut form = UploadForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                log::warn!("read multipart field failed: {e}");
                return Err(ApiError::ReadImage);
            }
        };

        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let data = field.bytes().await.map_err(|e| {
                log::warn!("read `{IMAGE_FIELD}` field failed: {e}");
                ApiError::ReadImage
            })?;

            if form.image.is_none() {
                form.image = Some(data);
            }
            continue;
        }

        let text = field.text().await.map_err(|e| {
            log::warn!("read `{name}` field failed: {e}");
            ApiError::ReadImage
        })?;
        form.fields.entry(name).or_insert(text);
    }

    Ok(form)
}
