pub mod base_effect;
pub mod blur_effect;
pub mod filter_effect;
pub mod named_filter;
pub mod parametric;
pub mod stylized_effect;

use image::RgbaImage;

pub use named_filter::NamedFilter;
pub use parametric::EffectParameters;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A single raster operation. The input image is consumed and a new one returned.
pub trait Effect {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageEffect {
    // Base effects
    Grayscale,
    Invert,
    Brightness(base_effect::BrightnessConfig),
    Contrast(base_effect::ContrastConfig),

    // Blur effects
    GaussianBlur(blur_effect::GaussianBlurConfig),

    // Filter effects
    ColorMatrix(filter_effect::ColorMatrixConfig),

    // Stylized effects
    Convolve(stylized_effect::ConvolveConfig),
}

impl ImageEffect {
    pub fn name(&self) -> &'static str {
        match self {
            ImageEffect::Grayscale => "Grayscale",
            ImageEffect::Invert => "Invert",
            ImageEffect::Brightness(_) => "Brightness",
            ImageEffect::Contrast(_) => "Contrast",
            ImageEffect::GaussianBlur(_) => "Gaussian Blur",
            ImageEffect::ColorMatrix(_) => "Color Matrix",
            ImageEffect::Convolve(_) => "Convolve",
        }
    }
}

impl Effect for ImageEffect {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        match self {
            // Base effects
            ImageEffect::Grayscale => base_effect::grayscale(image),
            ImageEffect::Invert => base_effect::invert(image),
            ImageEffect::Brightness(config) => config.apply(image),
            ImageEffect::Contrast(config) => config.apply(image),

            // Blur effects
            ImageEffect::GaussianBlur(config) => config.apply(image),

            // Filter effects
            ImageEffect::ColorMatrix(config) => config.apply(image),

            // Stylized effects
            ImageEffect::Convolve(config) => config.apply(image),
        }
    }
}

/// Run `effects` in order, each one replacing the raster produced by the previous.
pub fn apply_all(effects: &[ImageEffect], image: RgbaImage) -> ImageEffectResult<RgbaImage> {
    effects.iter().try_fold(image, |image, effect| {
        log::debug!("apply effect: {}", effect.name());
        effect.apply(image)
    })
}
