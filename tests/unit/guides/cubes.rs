//! Tests for cube projection and drawing

#[cfg(test)]
mod tests {
    use autostereogram::color::base::ColorSample;
    use autostereogram::guides::cubes::{
        CUBE_FACES, Eye, cube_centers, cubes_caption, draw_cubes, project_cube,
    };
    use autostereogram::guides::raster::{Canvas, Point};
    use autostereogram::synthesis::buffer::PixelBuffer;
    use autostereogram::synthesis::options::{PatternWidth, ViewingMode};

    // Tests each eye skews the opposite way and cross-eyed viewing swaps them
    // Verified by ignoring the viewing mode
    #[test]
    fn test_eye_skew() {
        assert!((Eye::Left.skew(ViewingMode::Parallel) + 2.0).abs() < f64::EPSILON);
        assert!((Eye::Right.skew(ViewingMode::Parallel) - 2.0).abs() < f64::EPSILON);
        assert!((Eye::Left.skew(ViewingMode::CrossEyed) - 2.0).abs() < f64::EPSILON);
        assert!((Eye::Right.skew(ViewingMode::CrossEyed) + 2.0).abs() < f64::EPSILON);
    }

    // Tests the back face projects larger than the front face
    // Verified by flipping the perspective divisor sign
    #[test]
    fn test_projection_perspective() {
        let center = Point::new(0.0, 0.0);
        let corners = project_cube(center, 20.0, Eye::Right, ViewingMode::Parallel);

        let [back, .., front_top_left, _, _, _] = corners;
        assert!(back.y.abs() > front_top_left.y.abs());
        assert!((back.y + 10.0 / 0.9).abs() < 1e-9);
        assert!((front_top_left.y + 10.0 / 1.1).abs() < 1e-9);
    }

    // Tests the eyes see horizontally offset cubes
    #[test]
    fn test_projection_eye_offset() {
        let center = Point::new(50.0, 50.0);
        let left = project_cube(center, 20.0, Eye::Left, ViewingMode::Parallel);
        let right = project_cube(center, 20.0, Eye::Right, ViewingMode::Parallel);
        let swapped = project_cube(center, 20.0, Eye::Left, ViewingMode::CrossEyed);

        for ((l, r), s) in left.iter().zip(&right).zip(&swapped) {
            assert!(r.x > l.x);
            assert!((l.y - r.y).abs() < f64::EPSILON);
            assert_eq!(s, r);
        }
    }

    // Tests cube anchors and caption
    #[test]
    fn test_cube_centers_and_caption() {
        let pattern_width = PatternWidth::from_eye_separation(60);
        let [left, right] = cube_centers(800, pattern_width);

        assert_eq!(left, Point::new(364.0, 30.0));
        assert_eq!(right, Point::new(436.0, 30.0));
        assert_eq!(cubes_caption(pattern_width), "Align these cubes (72px apart)");
    }

    // Tests faces are shaded and the background elsewhere is untouched
    #[test]
    fn test_draw_cubes() {
        let background = ColorSample::new(1, 2, 3);
        let mut buffer = PixelBuffer::new(800, 200);
        for y in 0..200 {
            buffer.write_row(y, &[background; 800]);
        }

        let mut canvas = Canvas::new(buffer.width(), buffer.height()).unwrap();
        draw_cubes(&mut canvas, PatternWidth::from_eye_separation(60), ViewingMode::Parallel);
        canvas.composite(&mut buffer);

        let back_face = CUBE_FACES[0].1;
        assert_eq!(buffer.color(364, 30), Some(back_face));
        assert_eq!(buffer.color(436, 30), Some(back_face));
        assert_eq!(buffer.color(400, 30), Some(background));
        assert_eq!(buffer.color(364, 150), Some(background));
    }
}
