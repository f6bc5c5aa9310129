use crate::{
    config::ServerConfig,
    error::{ApiError, ApiResult},
    form::{FILTER_FIELD, UploadForm, read_upload_form},
    headers::IMAGE_JPEG,
    image_codec,
};
use axum::{
    extract::{
        Multipart, Query, State, multipart::MultipartRejection, rejection::QueryRejection,
    },
    response::{IntoResponse, Response},
};
use http::{Method, StatusCode, header};
use image::RgbaImage;
use image_effect::{EffectParameters, ImageEffectResult, NamedFilter};
use std::{collections::HashMap, sync::Arc};

pub type SharedConfig = Arc<ServerConfig>;
type QueryFields = Result<Query<HashMap<String, String>>, QueryRejection>;

/// `POST /upload`: apply one filter chosen by the `filter` field.
pub async fn upload(
    State(config): State<SharedConfig>,
    query: QueryFields,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Response> {
    let form = read_form(query, multipart).await?;
    let filter = NamedFilter::from_name(form.field(FILTER_FIELD).unwrap_or_default());
    log::debug!("upload with filter: {}", filter.name());

    let response = process(form, config.jpeg_quality, move |image| filter.apply(image)).await?;
    log::info!("Image filtered and returned successfully");
    Ok(response)
}

/// `POST /realtime-edit`: apply the slider pipeline.
pub async fn realtime_edit(
    State(config): State<SharedConfig>,
    query: QueryFields,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Response> {
    let form = read_form(query, multipart).await?;

    let mut params = EffectParameters::from_lookup(|name| form.field(name));
    if params.blur > config.max_blur_radius {
        log::info!(
            "blur {} capped to {}",
            params.blur,
            config.max_blur_radius
        );
        params.blur = config.max_blur_radius;
    }
    log::debug!("realtime edit with {params:?}");

    let response = process(form, config.jpeg_quality, move |image| params.apply(image)).await?;
    log::info!("Real-time effects applied successfully");
    Ok(response)
}

/// CORS preflight; the headers themselves are added by the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    log::debug!("reject method: {method}");
    ApiError::MethodNotAllowed
}

/// Read the multipart body, then take fields it lacks from the query string.
async fn read_form(
    query: QueryFields,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadForm> {
    let multipart = multipart.map_err(|e| {
        log::warn!("request is not a multipart form: {e}");
        ApiError::ReadImage
    })?;

    let mut form = read_upload_form(multipart).await?;
    match query {
        Ok(Query(query)) => form.merge_query(query),
        Err(e) => log::warn!("ignore malformed query string: {e}"),
    }

    Ok(form)
}

/// Decode the uploaded image, run `effects` on it and encode the result as
/// JPEG. The CPU bound work runs on the blocking thread pool.
async fn process<F>(mut form: UploadForm, jpeg_quality: u8, effects: F) -> ApiResult<Response>
where
    F: FnOnce(RgbaImage) -> ImageEffectResult<RgbaImage> + Send + 'static,
{
    let data = form.take_image()?;

    let jpeg = tokio::task::spawn_blocking(move || -> ApiResult<Vec<u8>> {
        let image = image_codec::decode(&data)?;
        let image = effects(image)?;
        image_codec::encode_jpeg(image, jpeg_quality)
    })
    .await??;

    Ok(([(header::CONTENT_TYPE, IMAGE_JPEG)], jpeg).into_response())
}
