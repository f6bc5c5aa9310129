use crate::error::{ApiError, ApiResult};
use image::{Rgb, RgbImage, RgbaImage, codecs::jpeg::JpegEncoder};

/// Decode any supported raster format, guessing the format from the content.
pub fn decode(data: &[u8]) -> ApiResult<RgbaImage> {
    let image = image::load_from_memory(data).map_err(ApiError::DecodeImage)?;
    Ok(image.to_rgba8())
}

/// Blend every pixel over black: colour channels are scaled by alpha.
pub fn flatten_on_black(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

/// JPEG has no alpha channel, so translucent pixels are flattened onto black
/// before encoding.
pub fn encode_jpeg(image: RgbaImage, quality: u8) -> ApiResult<Vec<u8>> {
    let rgb = flatten_on_black(&image);
    let mut buffer = Vec::with_capacity(rgb.as_raw().len() / 4);

    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(ApiError::EncodeImage)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut data = Cursor::new(vec![]);
        image.write_to(&mut data, ImageFormat::Png).unwrap();
        data.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let source = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        let image = decode(&png_bytes(&source)).unwrap();
        assert_eq!(image, source);
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(ApiError::DecodeImage(_))));
    }

    #[test]
    fn test_encode_jpeg() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
        let data = encode_jpeg(source, 95).unwrap();

        assert_eq!(&data[..2], &[0xFF, 0xD8]);
        assert_eq!(
            image::guess_format(&data).unwrap(),
            ImageFormat::Jpeg
        );

        let decoded = decode(&data).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert!((decoded.get_pixel(4, 4)[0] as i32 - 200).abs() <= 3);
    }

    #[test]
    fn test_flatten_on_black() {
        let image = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([250, 250, 250, 0]),
            1 => Rgba([200, 100, 50, 128]),
            _ => Rgba([200, 100, 50, 255]),
        });
        let rgb = flatten_on_black(&image);

        assert_eq!(rgb.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([100, 50, 25]));
        assert_eq!(rgb.get_pixel(2, 0), &Rgb([200, 100, 50]));
    }

    #[test]
    fn test_encode_transparent_pixels_as_black() {
        let transparent = RgbaImage::from_pixel(8, 8, Rgba([250, 250, 250, 0]));
        let decoded = decode(&encode_jpeg(transparent, 95).unwrap()).unwrap();

        for pixel in decoded.pixels() {
            assert!(pixel[0] <= 3 && pixel[1] <= 3 && pixel[2] <= 3, "{pixel:?}");
            assert_eq!(pixel[3], 255);
        }

        let half = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 128]));
        let decoded = decode(&encode_jpeg(half, 95).unwrap()).unwrap();
        assert!((decoded.get_pixel(4, 4)[0] as i32 - 100).abs() <= 4);
    }
}
