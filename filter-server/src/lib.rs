//! Image filter HTTP service
//!
//! Accepts a multipart image upload, runs it through an effect pipeline from
//! `image-effect` and answers with the JPEG encoded result.
//!
//! # Endpoints
//! - `POST /upload`: one named filter selected by the `filter` field
//! - `POST /realtime-edit`: eight slider fields combined into an effect pipeline
//! - `OPTIONS` on both paths: CORS preflight
//!
//! # Architecture
//! - `app`: router, body limit and CORS layer
//! - `handlers`: request handlers sharing one decode/process/encode path
//! - `form`: multipart reading
//! - `image_codec`: raster decoding and JPEG encoding
//! - `server`: listener bootstrap

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod headers;
pub mod image_codec;
pub mod server;

pub use app::create_app;
pub use config::ServerConfig;
pub use server::FilterServer;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
