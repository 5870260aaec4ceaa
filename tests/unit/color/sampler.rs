//! Tests for mean color sampling

#[cfg(test)]
mod tests {
    use crate::solid;
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::color::{Color, mean_color};

    // Tests a uniform buffer reproduces its color exactly
    // Verified by rounding up in the division
    #[test]
    fn test_uniform_buffer_mean_is_exact() {
        for rgb in [[0, 0, 0], [255, 255, 255], [17, 128, 254]] {
            let image = solid(7, 5, rgb);

            let mean = mean_color(&image).unwrap_or_default();
            assert_eq!(mean.channels(), rgb);
        }
    }

    // Tests channel means are truncated rather than rounded
    // Verified by switching to rounded division
    #[test]
    fn test_mean_truncates() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([0, 0, 0]));
        image.put_pixel(1, 0, Rgb([1, 3, 255]));

        let mean = mean_color(&image).unwrap_or_default();
        assert_eq!(mean, Color::new(0, 1, 127));
    }

    // Tests the mean is taken over every pixel
    #[test]
    fn test_mean_over_halves() {
        let mut image = solid(4, 2, [200, 0, 0]);
        for x in 0..4 {
            image.put_pixel(x, 1, Rgb([0, 0, 100]));
        }

        let mean = mean_color(&image).unwrap_or_default();
        assert_eq!(mean, Color::new(100, 0, 50));
    }

    // Tests an empty buffer is reported instead of dividing by zero
    // Verified by removing the zero-pixel guard
    #[test]
    fn test_empty_buffer_is_error() {
        let image = RgbImage::new(0, 0);

        let result = mean_color(&image);
        assert!(matches!(result, Err(MosaicError::EmptyBuffer { .. })));
    }
}
