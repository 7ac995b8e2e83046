//! Guide overlay dispatch

use log::debug;

use crate::guides::cubes::draw_cubes;
use crate::guides::dots::draw_dots;
use crate::guides::frames::draw_frames;
use crate::guides::raster::Canvas;
use crate::synthesis::buffer::PixelBuffer;
use crate::synthesis::options::{AlignmentKind, PatternWidth, ViewingMode};

/// Draw the requested alignment guide onto a finished stereogram
///
/// `pattern_width` must be the width the synthesizer used for this buffer.
pub fn render_alignment(
    buffer: &mut PixelBuffer,
    alignment: AlignmentKind,
    pattern_width: PatternWidth,
    mode: ViewingMode,
) {
    if alignment == AlignmentKind::None {
        return;
    }
    let Some(mut canvas) = Canvas::new(buffer.width(), buffer.height()) else {
        debug!("no room for a guide on an empty canvas");
        return;
    };

    debug!("drawing {alignment:?} guide at {pattern_width} spacing");
    match alignment {
        AlignmentKind::None => {}
        AlignmentKind::Dots => draw_dots(&mut canvas, pattern_width),
        AlignmentKind::Frames => draw_frames(&mut canvas, pattern_width),
        AlignmentKind::Cubes => draw_cubes(&mut canvas, pattern_width, mode),
    }
    canvas.composite(buffer);
}
