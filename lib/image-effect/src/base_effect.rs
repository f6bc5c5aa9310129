use crate::{Effect, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Round and saturate a channel value into `u8`.
pub(crate) fn clamp_channel(value: f32) -> u8 {
    (value.clamp(0.0, 255.0) + 0.5) as u8
}

fn apply_lut(mut image: RgbaImage, lut: &[u8; 256]) -> RgbaImage {
    for pixel in image.pixels_mut() {
        for i in 0..3 {
            pixel[i] = lut[pixel[i] as usize];
        }
    }

    image
}

/// Invert the colors of an image
pub fn invert(mut image: RgbaImage) -> ImageEffectResult<RgbaImage> {
    for pixel in image.pixels_mut() {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }

    Ok(image)
}

/// Fully desaturate an image using luminance weights
pub fn grayscale(mut image: RgbaImage) -> ImageEffectResult<RgbaImage> {
    for pixel in image.pixels_mut() {
        // Human perception: 0.299*R + 0.587*G + 0.114*B
        let gray = clamp_channel(
            0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32,
        );

        pixel[0] = gray;
        pixel[1] = gray;
        pixel[2] = gray;
    }

    Ok(image)
}

/// Brightness adjustment configuration.
///
/// `percentage` is clamped to `-100..=100`; each channel is shifted by
/// `255 * percentage / 100`.
#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "0.0"))]
    percentage: f32,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percentage(&self) -> f32 {
        self.percentage
    }

    fn lut(&self) -> [u8; 256] {
        let shift = 255.0 * self.percentage.clamp(-100.0, 100.0) / 100.0;
        std::array::from_fn(|i| clamp_channel(i as f32 + shift))
    }
}

impl Effect for BrightnessConfig {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        if self.percentage == 0.0 {
            return Ok(image);
        }

        Ok(apply_lut(image, &self.lut()))
    }
}

/// Contrast adjustment configuration.
///
/// `percentage` is clamped to `-100..=100`. Negative values pull channels
/// towards mid-gray, positive values push them away; `100` thresholds every
/// channel to 0 or 255.
#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ContrastConfig {
    #[derivative(Default(value = "0.0"))]
    percentage: f32,
}

impl ContrastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percentage(&self) -> f32 {
        self.percentage
    }

    fn lut(&self) -> [u8; 256] {
        let v = (100.0 + self.percentage.clamp(-100.0, 100.0)) / 100.0;

        std::array::from_fn(|i| {
            let c = i as f32 / 255.0;
            if v <= 1.0 {
                clamp_channel((0.5 + (c - 0.5) * v) * 255.0)
            } else if v < 2.0 {
                clamp_channel((0.5 + (c - 0.5) / (2.0 - v)) * 255.0)
            } else if c + 0.5 >= 1.0 {
                255
            } else {
                0
            }
        })
    }
}

impl Effect for ContrastConfig {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        if self.percentage == 0.0 {
            return Ok(image);
        }

        Ok(apply_lut(image, &self.lut()))
    }
}
