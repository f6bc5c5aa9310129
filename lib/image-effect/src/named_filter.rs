use crate::{
    ImageEffect, ImageEffectResult, apply_all,
    base_effect::{BrightnessConfig, ContrastConfig},
    blur_effect::GaussianBlurConfig,
    stylized_effect::ConvolveConfig,
};
use image::RgbaImage;

/// A single discrete filter selected by name, as used by the simple upload mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedFilter {
    #[default]
    None,
    Grayscale,
    Blur,
    Invert,
    Sepia,
    Special,
}

impl NamedFilter {
    /// Case-insensitive lookup. Empty and unknown names, including padded
    /// ones, select [`NamedFilter::None`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "grayscale" => NamedFilter::Grayscale,
            "blur" => NamedFilter::Blur,
            "invert" => NamedFilter::Invert,
            "sepia" => NamedFilter::Sepia,
            "special" => NamedFilter::Special,
            _ => NamedFilter::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedFilter::None => "none",
            NamedFilter::Grayscale => "grayscale",
            NamedFilter::Blur => "blur",
            NamedFilter::Invert => "invert",
            NamedFilter::Sepia => "sepia",
            NamedFilter::Special => "special",
        }
    }

    pub fn effects(&self) -> Vec<ImageEffect> {
        match self {
            NamedFilter::None => vec![],
            NamedFilter::Grayscale => vec![ImageEffect::Grayscale],
            NamedFilter::Blur => vec![ImageEffect::GaussianBlur(
                GaussianBlurConfig::new().with_sigma(2.0),
            )],
            NamedFilter::Invert => vec![ImageEffect::Invert],

            // A warm tone approximation, not the matrix sepia of the parametric mode
            NamedFilter::Sepia => vec![
                ImageEffect::Contrast(ContrastConfig::new().with_percentage(20.0)),
                ImageEffect::Brightness(BrightnessConfig::new().with_percentage(20.0)),
            ],

            NamedFilter::Special => vec![ImageEffect::Convolve(ConvolveConfig::special())],
        }
    }

    pub fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        apply_all(&self.effects(), image)
    }

    pub fn all_filters() -> &'static [NamedFilter] {
        &[
            NamedFilter::Grayscale,
            NamedFilter::Blur,
            NamedFilter::Invert,
            NamedFilter::Sepia,
            NamedFilter::Special,
        ]
    }
}
