use image::ImageReader;
use image_effect::EffectParameters;
use std::{fs, path::Path};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let output_dir = Path::new("tmp/realtime");
    fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?.to_rgba8();

    let presets = [
        ("warm_bright", EffectParameters::new().with_brightness(130.0).with_sepia(40.0)),
        ("faded", EffectParameters::new().with_contrast(70.0).with_saturation(60.0)),
        ("dreamy", EffectParameters::new().with_blur(3.0).with_hue(45.0)),
        ("negative", EffectParameters::new().with_invert(100.0).with_grayscale(100.0)),
    ];

    for (name, params) in presets {
        let output = params.apply(img.clone())?;
        let path = output_dir.join(format!("{name}.png"));
        output.save(&path)?;
        println!("{name}: {} effects -> {}", params.effects().len(), path.display());
    }

    Ok(())
}
