use derive_setters::Setters;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;
pub const DEFAULT_MAX_BLUR_RADIUS: f32 = 20.0;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[non_exhaustive]
#[derive(Debug, Setters, Clone)]
#[setters[prefix = "with_"]]
pub struct ServerConfig {
    pub address: String,

    /// Upper bound for a whole multipart request body.
    pub max_upload_bytes: usize,

    /// Blur sigma requested by the real-time editor is capped to this value.
    pub max_blur_radius: f32,

    /// 1..=100
    pub jpeg_quality: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_blur_radius: DEFAULT_MAX_BLUR_RADIUS,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ServerConfig {
    pub fn new(address: String) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }
}
