use clap::Parser;
use filter_server::{
    FilterServer, ServerConfig,
    config::{
        DEFAULT_ADDRESS, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_BLUR_RADIUS, DEFAULT_MAX_UPLOAD_BYTES,
    },
};

const MIB: usize = 1024 * 1024;

#[derive(Parser, Debug)]
#[command(version, about = "Apply image filters over HTTP")]
struct Args {
    /// Listen address
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Largest accepted request body, in MiB
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES / MIB)]
    max_upload_mb: usize,

    /// Cap for the real-time editor blur slider
    #[arg(long, default_value_t = DEFAULT_MAX_BLUR_RADIUS)]
    max_blur_radius: f32,

    /// JPEG quality of the responses
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,
}

#[tokio::main]
async fn main() {
    filter_server::init_logger();

    let args = Args::parse();
    let config = ServerConfig::new(args.address)
        .with_max_upload_bytes(args.max_upload_mb * MIB)
        .with_max_blur_radius(args.max_blur_radius)
        .with_jpeg_quality(args.jpeg_quality);

    if let Err(e) = FilterServer::new(config).run().await {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
