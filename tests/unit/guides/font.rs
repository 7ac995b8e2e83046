//! Tests for caption markup and rendering

#[cfg(test)]
mod tests {
    use autostereogram::guides::font::{caption_svg, draw_caption};
    use autostereogram::guides::raster::Canvas;
    use autostereogram::synthesis::buffer::PixelBuffer;

    // Tests the caption is centered on its anchor and sized to the canvas
    #[test]
    fn test_caption_svg_layout() {
        let markup = caption_svg(800, 600, "Align these dots (72px apart)", 400.0, 50.0);

        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="800" height="600""#));
        assert!(markup.contains(r#"x="400" y="50""#));
        assert!(markup.contains(r#"text-anchor="middle""#));
        assert!(markup.contains(">Align these dots (72px apart)</text>"));
    }

    // Tests glyphs are white over a black outline painted first
    // Verified by dropping the paint order
    #[test]
    fn test_caption_svg_colors() {
        let markup = caption_svg(10, 10, "x", 5.0, 5.0);

        assert!(markup.contains(r##"fill="#ffffff""##));
        assert!(markup.contains(r##"stroke="#000000""##));
        assert!(markup.contains(r#"paint-order="stroke""#));
        assert!(markup.contains(r#"font-weight="bold""#));
    }

    // Tests markup characters in the text are escaped
    // Verified by inserting the text verbatim
    #[test]
    fn test_caption_svg_escapes() {
        let markup = caption_svg(10, 10, "a<b & \"c\">", 5.0, 5.0);
        assert!(markup.contains(">a&lt;b &amp; &quot;c&quot;&gt;</text>"));
    }

    // Tests captions stay on their own line of the canvas
    // Verified by anchoring the text at the top of the canvas
    #[test]
    fn test_draw_caption_stays_near_baseline() {
        let mut canvas = Canvas::new(200, 60).unwrap();
        draw_caption(&mut canvas, "Align", 100.0, 30.0);

        for y in (0..12).chain(45..60) {
            for x in 0..200 {
                assert!(canvas.pixel(x, y).is_none(), "caption ink at ({x}, {y})");
            }
        }

        // Hosts without fonts render nothing; otherwise the glyphs are there
        let mut buffer = PixelBuffer::new(200, 60);
        canvas.composite(&mut buffer);
        let inked = (0..60)
            .flat_map(|y| (0..200).map(move |x| (x, y)))
            .any(|(x, y)| canvas.pixel(x, y).is_some());
        if inked {
            assert_ne!(buffer, PixelBuffer::new(200, 60));
        }
    }
}
