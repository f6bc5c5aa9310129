use image::ImageReader;
use image_effect::NamedFilter;
use std::{fs, path::Path, time::Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp/named");
    fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let sample_image = ImageReader::open(img_path)?.decode()?.to_rgba8();

    println!(
        "Test image size: {}x{}",
        sample_image.width(),
        sample_image.height()
    );
    println!("{}", "=".repeat(60));
    println!("{:<15} {:>12} {:>25}", "Filter", "Time (ms)", "Status");
    println!("{}", "-".repeat(60));

    for filter in NamedFilter::all_filters() {
        let start = Instant::now();
        let result = filter.apply(sample_image.clone());
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let status = match result {
            Ok(output_image) => {
                let filename = format!("{}.png", filter.name());
                match output_image.save(output_dir.join(&filename)) {
                    Ok(_) => format!("Saved: {filename}"),
                    Err(e) => format!("Error: {e}"),
                }
            }
            Err(e) => format!("Failed: {e}"),
        };

        println!("{:<15} {:>12.3} {:>25}", filter.name(), time_ms, status);
    }

    Ok(())
}
