//! Slider driven effect pipeline used by the real-time editor.
//!
//! Eight independent sliders are mapped onto a fixed sequence of raster
//! operations. Every slider has a neutral value that produces no operation,
//! so an all-neutral request leaves the image untouched.
//!
//! The partial-intensity branches of sepia, invert, grayscale and saturation
//! are coarse brightness/contrast stand-ins rather than blends between the
//! original and the fully transformed image.

use crate::{
    ImageEffect, ImageEffectResult, apply_all,
    base_effect::{BrightnessConfig, ContrastConfig},
    blur_effect::GaussianBlurConfig,
    filter_effect::ColorMatrixConfig,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

pub const NEUTRAL_PERCENT: f32 = 100.0;
pub const NEUTRAL_AMOUNT: f32 = 0.0;

/// Form field names, in pipeline order.
pub const PARAMETER_NAMES: [&str; 8] = [
    "brightness",
    "contrast",
    "saturation",
    "blur",
    "hue",
    "sepia",
    "invert",
    "grayscale",
];

#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
pub struct EffectParameters {
    /// Percentage, neutral at 100.
    #[derivative(Default(value = "NEUTRAL_PERCENT"))]
    pub brightness: f32,

    /// Percentage, neutral at 100.
    #[derivative(Default(value = "NEUTRAL_PERCENT"))]
    pub contrast: f32,

    /// Percentage, neutral at 100. Only reductions have an effect.
    #[derivative(Default(value = "NEUTRAL_PERCENT"))]
    pub saturation: f32,

    /// Gaussian sigma, neutral at 0.
    #[derivative(Default(value = "NEUTRAL_AMOUNT"))]
    pub blur: f32,

    /// Degrees, neutral at 0.
    #[derivative(Default(value = "NEUTRAL_AMOUNT"))]
    pub hue: f32,

    /// Intensity 0..=100, neutral at 0.
    #[derivative(Default(value = "NEUTRAL_AMOUNT"))]
    pub sepia: f32,

    /// Intensity 0..=100, neutral at 0.
    #[derivative(Default(value = "NEUTRAL_AMOUNT"))]
    pub invert: f32,

    /// Intensity 0..=100, neutral at 0.
    #[derivative(Default(value = "NEUTRAL_AMOUNT"))]
    pub grayscale: f32,
}

/// Parse a slider value, falling back to `neutral` when it is missing or not a
/// finite number. Surrounding whitespace makes a value unparsable.
pub fn parse_slider(raw: Option<&str>, neutral: f32) -> f32 {
    raw.and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(neutral)
}

impl EffectParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the parameters from named string values. Lookup misses and
    /// unparsable values resolve to the neutral value of that slider.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        Self {
            brightness: parse_slider(lookup("brightness"), NEUTRAL_PERCENT),
            contrast: parse_slider(lookup("contrast"), NEUTRAL_PERCENT),
            saturation: parse_slider(lookup("saturation"), NEUTRAL_PERCENT),
            blur: parse_slider(lookup("blur"), NEUTRAL_AMOUNT),
            hue: parse_slider(lookup("hue"), NEUTRAL_AMOUNT),
            sepia: parse_slider(lookup("sepia"), NEUTRAL_AMOUNT),
            invert: parse_slider(lookup("invert"), NEUTRAL_AMOUNT),
            grayscale: parse_slider(lookup("grayscale"), NEUTRAL_AMOUNT),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.effects().is_empty()
    }

    /// The operations these parameters select, in application order.
    pub fn effects(&self) -> Vec<ImageEffect> {
        let mut effects = vec![];

        if self.brightness != NEUTRAL_PERCENT {
            let adjustment = (self.brightness - 100.0) / 100.0;
            effects.push(brightness(adjustment * 50.0));
        }

        if self.contrast != NEUTRAL_PERCENT {
            let adjustment = (self.contrast - 100.0) / 100.0;
            effects.push(contrast(adjustment * 50.0));
        }

        // Increasing saturation is not supported
        if self.saturation < NEUTRAL_PERCENT {
            let adjustment = (self.saturation - 100.0) / 100.0;
            effects.push(contrast(adjustment * 30.0));
        }

        if self.blur > NEUTRAL_AMOUNT {
            effects.push(ImageEffect::GaussianBlur(
                GaussianBlurConfig::new().with_sigma(self.blur),
            ));
        }

        if self.hue != NEUTRAL_AMOUNT {
            effects.push(ImageEffect::ColorMatrix(ColorMatrixConfig::hue_rotate(
                self.hue,
            )));
        }

        if self.sepia > NEUTRAL_AMOUNT {
            effects.push(ImageEffect::ColorMatrix(ColorMatrixConfig::sepia()));

            let intensity = self.sepia / 100.0;
            if intensity < 1.0 {
                effects.push(brightness(-10.0 * intensity));
            }
        }

        if self.invert >= 100.0 {
            effects.push(ImageEffect::Invert);
        } else if self.invert > NEUTRAL_AMOUNT {
            effects.push(brightness(-20.0 * self.invert / 100.0));
        }

        if self.grayscale >= 100.0 {
            effects.push(ImageEffect::Grayscale);
        } else if self.grayscale > NEUTRAL_AMOUNT {
            effects.push(contrast(-10.0 * self.grayscale / 100.0));
        }

        effects
    }

    pub fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        apply_all(&self.effects(), image)
    }
}

fn brightness(percentage: f32) -> ImageEffect {
    ImageEffect::Brightness(BrightnessConfig::new().with_percentage(percentage))
}

fn contrast(percentage: f32) -> ImageEffect {
    ImageEffect::Contrast(ContrastConfig::new().with_percentage(percentage))
}
