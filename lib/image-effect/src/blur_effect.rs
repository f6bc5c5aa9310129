use crate::{Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Below this sigma the kernel collapses to a single tap, and its variance
/// underflows for subnormal values.
pub const MIN_SIGMA: f32 = 1e-3;

/// Gaussian blur configuration (using imageproc)
#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurConfig {
    #[derivative(Default(value = "2.0"))]
    sigma: f32,
}

impl GaussianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl Effect for GaussianBlurConfig {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        if !self.sigma.is_finite() {
            return Err(ImageEffectError::InvalidParameter(format!(
                "blur sigma must be finite, got {}",
                self.sigma
            )));
        }

        // imageproc panics on a non-positive sigma
        if self.sigma < MIN_SIGMA || image.width() == 0 || image.height() == 0 {
            return Ok(image);
        }

        Ok(imageproc::filter::gaussian_blur_f32(&image, self.sigma))
    }
}
