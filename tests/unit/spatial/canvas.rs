//! Tests for canvas placement and band splitting

#[cfg(test)]
mod tests {
    use crate::solid;
    use image::Rgb;
    use photomosaic::MosaicError;
    use photomosaic::color::Color;
    use photomosaic::spatial::{Block, MosaicCanvas};

    fn block(x: u32, y: u32, width: u32, height: u32) -> Block {
        Block {
            x,
            y,
            width,
            height,
            color: Color::default(),
        }
    }

    // Tests placement overwrites exactly the block rectangle
    // Verified by offsetting the destination row
    #[test]
    fn test_place_writes_only_block_rectangle() {
        let mut canvas = MosaicCanvas::blank(6, 5);
        let target = block(2, 1, 3, 2);

        let result = canvas.place(&target, &solid(3, 2, [9, 8, 7]));
        assert!(result.is_ok());

        let image = canvas.as_image();
        for (x, y, pixel) in image.enumerate_pixels() {
            let inside = (2..5).contains(&x) && (1..3).contains(&y);
            let expected = if inside { Rgb([9, 8, 7]) } else { Rgb([0, 0, 0]) };
            assert_eq!(*pixel, expected, "pixel ({x}, {y})");
        }
    }

    // Tests a tile with the wrong size is rejected
    // Verified by removing the dimension check
    #[test]
    fn test_place_rejects_mismatched_tile() {
        let mut canvas = MosaicCanvas::blank(4, 4);

        let result = canvas.place(&block(0, 0, 2, 2), &solid(3, 2, [1, 1, 1]));
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "tile",
                ..
            })
        ));
    }

    // Tests a block reaching past the canvas is rejected
    #[test]
    fn test_place_rejects_out_of_bounds_block() {
        let mut canvas = MosaicCanvas::blank(4, 4);

        let result = canvas.place(&block(3, 3, 2, 2), &solid(2, 2, [1, 1, 1]));
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "block",
                ..
            })
        ));
    }

    // Tests bands cover the canvas with a clipped last band
    // Verified by rounding the band count down
    #[test]
    fn test_bands_cover_canvas() {
        let mut canvas = MosaicCanvas::blank(7, 25);

        let bands = canvas.bands_mut(10);
        let layout: Vec<_> = bands.iter().map(|b| (b.top(), b.height())).collect();
        assert_eq!(layout, vec![(0, 10), (10, 10), (20, 5)]);
    }

    // Tests bands write into their own rows of the shared canvas
    // Verified by ignoring the band top offset
    #[test]
    fn test_band_place_lands_in_canvas() {
        let mut canvas = MosaicCanvas::blank(4, 6);
        {
            let mut bands = canvas.bands_mut(3);
            if let Some(band) = bands.get_mut(1) {
                assert!(band.place(&block(1, 4, 2, 2), &solid(2, 2, [50, 60, 70])).is_ok());
            }
        }

        let image = canvas.as_image();
        assert_eq!(*image.get_pixel(1, 4), Rgb([50, 60, 70]));
        assert_eq!(*image.get_pixel(2, 5), Rgb([50, 60, 70]));
        assert_eq!(*image.get_pixel(1, 3), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(0, 4), Rgb([0, 0, 0]));
    }

    // Tests a band refuses blocks belonging to another band
    // Verified by removing the containment check
    #[test]
    fn test_band_rejects_foreign_block() {
        let mut canvas = MosaicCanvas::blank(4, 6);
        let mut bands = canvas.bands_mut(3);

        if let Some(band) = bands.get_mut(0) {
            assert!(!band.contains(&block(0, 2, 2, 2)));
            let result = band.place(&block(0, 2, 2, 2), &solid(2, 2, [1, 1, 1]));
            assert!(result.is_err());
        }
    }

    // Tests the canvas starts as a copy of the reference
    #[test]
    fn test_from_reference_copies_pixels() {
        let reference = solid(3, 2, [4, 5, 6]);
        let canvas = MosaicCanvas::from_reference(&reference);

        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.into_image(), reference);
    }
}
