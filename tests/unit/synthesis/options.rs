//! Tests for generation options, rounding and pattern width

#[cfg(test)]
mod tests {
    use autostereogram::StereogramError;
    use autostereogram::io::configuration::{
        DEFAULT_IMAGE_COLOR_DISPARITY, DEFAULT_SHAPE_COLOR_DISPARITY,
    };
    use autostereogram::synthesis::options::{
        AlignmentKind, GenerationOptions, PatternWidth, ViewingMode, round_half_up,
    };

    // Tests halves round towards positive infinity
    // Verified by using f64::round, which rounds -2.5 away from zero
    #[test]
    fn test_round_half_up() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(2.49) - 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) + 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(71.5) - 72.0).abs() < f64::EPSILON);
    }

    // Tests the pattern width is the rounded eye separation times 1.2
    #[test]
    fn test_pattern_width() {
        assert_eq!(PatternWidth::from_eye_separation(60).pixels(), 72);
        assert_eq!(PatternWidth::from_eye_separation(0).pixels(), 0);
        assert_eq!(PatternWidth::from_eye_separation(10).pixels(), 12);
        assert_eq!(PatternWidth::from_eye_separation(100).pixels(), 120);
        assert_eq!(PatternWidth::from_eye_separation(60).to_string(), "72px");
    }

    // Tests the shift sign for each viewing mode
    #[test]
    fn test_viewing_mode_sign() {
        assert_eq!(ViewingMode::default(), ViewingMode::Parallel);
        assert_eq!(ViewingMode::Parallel.shift_sign(), 1);
        assert_eq!(ViewingMode::CrossEyed.shift_sign(), -1);
        assert_eq!(AlignmentKind::default(), AlignmentKind::Dots);
    }

    // Tests defaults differ only in color disparity between source kinds
    // Verified by swapping the two disparity constants
    #[test]
    fn test_defaults() {
        let image = GenerationOptions::for_image();
        let shape = GenerationOptions::for_shape();

        assert_eq!(image, GenerationOptions::default());
        assert_eq!((image.width, image.height), (800, 600));
        assert_eq!(image.eye_separation, 60);
        assert!((image.depth_scale - 0.3).abs() < f64::EPSILON);
        assert!((image.color_disparity - DEFAULT_IMAGE_COLOR_DISPARITY).abs() < f64::EPSILON);
        assert!((shape.color_disparity - DEFAULT_SHAPE_COLOR_DISPARITY).abs() < f64::EPSILON);
        assert_eq!(
            GenerationOptions {
                color_disparity: image.color_disparity,
                ..shape
            },
            image
        );
        assert_eq!(image.pattern_width().pixels(), 72);
    }

    // Tests degenerate but meaningful values pass validation
    #[test]
    fn test_validate_accepts_edge_values() {
        let options = GenerationOptions {
            eye_separation: 0,
            depth_scale: -1.0,
            color_disparity: 1.0,
            ..GenerationOptions::default()
        };
        assert!(options.validate().is_ok());
        assert!(
            GenerationOptions {
                color_disparity: 0.0,
                depth_scale: 0.0,
                ..options
            }
            .validate()
            .is_ok()
        );
    }

    // Tests invalid canvases and parameters are rejected
    // Verified by removing the disparity range check
    #[test]
    fn test_validate_rejects() {
        let base = GenerationOptions::default();

        assert!(matches!(
            GenerationOptions { width: 0, ..base }.validate(),
            Err(StereogramError::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            GenerationOptions {
                height: 20_000,
                ..base
            }
            .validate(),
            Err(StereogramError::InvalidDimensions { .. })
        ));

        for disparity in [-0.1, 1.5, f64::NAN] {
            let result = GenerationOptions {
                color_disparity: disparity,
                ..base
            }
            .validate();
            assert!(matches!(
                result,
                Err(StereogramError::InvalidParameter {
                    parameter: "color_disparity",
                    ..
                })
            ));
        }

        assert!(matches!(
            GenerationOptions {
                depth_scale: f64::INFINITY,
                ..base
            }
            .validate(),
            Err(StereogramError::InvalidParameter {
                parameter: "depth_scale",
                ..
            })
        ));
    }
}
