use crate::{Effect, ImageEffectError, ImageEffectResult, base_effect::clamp_channel};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};

/// Row-major 3x3 kernel.
pub type Kernel3x3 = [f32; 9];

pub const IDENTITY_KERNEL: Kernel3x3 = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];

/// Directional relief kernel used by the `special` named filter.
pub const SPECIAL_KERNEL: Kernel3x3 = [-1.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 1.0];

/// 3x3 spatial convolution (manual convolution implementation).
///
/// Neighbours outside the image are clamped to the nearest edge pixel. The
/// kernel is applied as-is: no normalisation and no bias. Alpha is copied from
/// the centre pixel.
#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ConvolveConfig {
    #[derivative(Default(value = "IDENTITY_KERNEL"))]
    kernel: Kernel3x3,
}

impl ConvolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn special() -> Self {
        Self::new().with_kernel(SPECIAL_KERNEL)
    }

    pub fn kernel(&self) -> &Kernel3x3 {
        &self.kernel
    }
}

impl Effect for ConvolveConfig {
    fn apply(&self, image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        if self.kernel.iter().any(|v| !v.is_finite()) {
            return Err(ImageEffectError::InvalidParameter(format!(
                "convolution kernel must be finite: {:?}",
                self.kernel
            )));
        }

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Ok(image);
        }

        let max_x = width as i64 - 1;
        let max_y = height as i64 - 1;

        let result = RgbaImage::from_fn(width, height, |x, y| {
            let mut sum = [0.0f32; 3];

            for ky in -1i64..=1 {
                for kx in -1i64..=1 {
                    let k = self.kernel[((ky + 1) * 3 + (kx + 1)) as usize];
                    if k == 0.0 {
                        continue;
                    }

                    let px = (x as i64 + kx).clamp(0, max_x) as u32;
                    let py = (y as i64 + ky).clamp(0, max_y) as u32;
                    let pixel = image.get_pixel(px, py);

                    for (i, s) in sum.iter_mut().enumerate() {
                        *s += pixel[i] as f32 * k;
                    }
                }
            }

            Rgba([
                clamp_channel(sum[0]),
                clamp_channel(sum[1]),
                clamp_channel(sum[2]),
                image.get_pixel(x, y)[3],
            ])
        });

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_kernel() {
        let source = RgbaImage::from_fn(3, 3, |x, y| Rgba([(x * 40) as u8, (y * 40) as u8, 7, 9]));
        let image = ConvolveConfig::new().apply(source.clone()).unwrap();
        assert_eq!(image, source);
    }

    #[test]
    fn test_special_kernel_keeps_flat_regions() {
        // The kernel sums to 1, so a flat image is unchanged
        let source = RgbaImage::from_pixel(4, 4, Rgba([80, 120, 160, 255]));
        let image = ConvolveConfig::special().apply(source.clone()).unwrap();
        assert_eq!(image, source);
    }

    #[test]
    fn test_special_kernel_highlights_edges() {
        let source = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([100, 100, 100, 255])
            }
        });

        let image = ConvolveConfig::special().apply(source).unwrap();

        // Left neighbours are dark and weighted negatively, right ones bright and positive
        assert_eq!(image.get_pixel(0, 1)[0], 0);
        assert_eq!(image.get_pixel(1, 1)[0], 200);
        assert_eq!(image.get_pixel(3, 1)[0], 100);
    }
}
