use crate::{Effect, ImageEffectError, ImageEffectResult, base_effect::clamp_channel};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

pub type ColorMatrix = [[f32; 3]; 3];

pub const IDENTITY_MATRIX: ColorMatrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

pub const SEPIA_MATRIX: ColorMatrix = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Hue rotation around the luminance axis, using the NTSC weights
/// 0.213 / 0.715 / 0.072 for red / green / blue.
pub fn hue_rotation_matrix(degrees: f32) -> ColorMatrix {
    let (sin, cos) = degrees.to_radians().sin_cos();

    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

/// Linear color transform applied to the RGB channels of every pixel:
/// `[r', g', b'] = matrix * [r, g, b]`. Alpha is left untouched.
#[derive(Debug, Clone, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ColorMatrixConfig {
    #[derivative(Default(value = "IDENTITY_MATRIX"))]
    matrix: ColorMatrix,
}

impl ColorMatrixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sepia() -> Self {
        Self::new().with_matrix(SEPIA_MATRIX)
    }

    pub fn hue_rotate(degrees: f32) -> Self {
        Self::new().with_matrix(hue_rotation_matrix(degrees))
    }

    pub fn matrix(&self) -> &ColorMatrix {
        &self.matrix
    }
}

impl Effect for ColorMatrixConfig {
    fn apply(&self, mut image: RgbaImage) -> ImageEffectResult<RgbaImage> {
        if self.matrix.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ImageEffectError::InvalidParameter(format!(
                "color matrix must be finite: {:?}",
                self.matrix
            )));
        }

        let m = &self.matrix;
        for pixel in image.pixels_mut() {
            let r = pixel[0] as f32;
            let g = pixel[1] as f32;
            let b = pixel[2] as f32;

            pixel[0] = clamp_channel(m[0][0] * r + m[0][1] * g + m[0][2] * b);
            pixel[1] = clamp_channel(m[1][0] * r + m[1][1] * g + m[1][2] * b);
            pixel[2] = clamp_channel(m[2][0] * r + m[2][1] * g + m[2][2] * b);
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_sepia_matrix() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([100, 100, 100, 200]));
        let image = ColorMatrixConfig::sepia().apply(source).unwrap();

        // 100 * (0.393 + 0.769 + 0.189) = 135.1
        assert_eq!(image.get_pixel(0, 0), &Rgba([135, 120, 94, 200]));
    }

    #[test]
    fn test_sepia_saturates() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let image = ColorMatrixConfig::sepia().apply(source).unwrap();
        assert_eq!(image.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_hue_rotation_zero_is_identity() {
        let matrix = hue_rotation_matrix(0.0);
        for (row, expected) in matrix.iter().zip(IDENTITY_MATRIX.iter()) {
            for (v, e) in row.iter().zip(expected.iter()) {
                assert!((v - e).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_hue_rotation_keeps_gray() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([90, 90, 90, 255]));
        let image = ColorMatrixConfig::hue_rotate(120.0).apply(source).unwrap();
        let pixel = image.get_pixel(0, 0);

        for i in 0..3 {
            assert!((pixel[i] as i32 - 90).abs() <= 1);
        }
    }

    #[test]
    fn test_hue_rotation_shifts_red() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([200, 30, 30, 255]));
        let image = ColorMatrixConfig::hue_rotate(120.0).apply(source).unwrap();
        let pixel = image.get_pixel(0, 0);

        assert!(pixel[1] > pixel[0]);
    }
}
