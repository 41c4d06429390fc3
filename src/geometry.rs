//! The geometry palette cards are built against.
//!
//! Everything here is plain arithmetic: the renderer that owns SVG elements,
//! clipping, and the image well consumes these values.

use crate::error::Result;
use crate::layout::blocks::group_slices;
use crate::layout::divvy::divvy_heights;

/// Inner unit size of the standard 16:9 card.
pub const CARD_SIZE: (f64, f64) = (256.0, 144.0);

/// Width of the thin white border around the card.
pub const PAD: f64 = 1.0;

/// Space between the image well and the color blocks, and between blocks.
pub const PALETTE_GAP: f64 = 1.2;

/// Radius of the card's rounded corners.
pub const CORNER_RADIUS: f64 = 4.0;

/// The space a layout call divides: width and height only. Callers own the
/// card origin and any offset of the column within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The block column of the standard card.
    ///
    /// Sized so that stacks of five blocks are made of squares, and padded
    /// by one gap in each dimension; rows first tile this frame edge to
    /// edge, then [`Rect::inset`] by half the gap opens the seams.
    pub fn block_column() -> Self {
        let content_height = CARD_SIZE.1 - PAD * 2.0;
        let blocks_wide = (content_height - PALETTE_GAP * 4.0) / 5.0;
        Self {
            width: blocks_wide + PALETTE_GAP,
            height: content_height + PALETTE_GAP,
        }
    }
}

/// A positioned rectangle in the block column, origin at the frame's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Shrink by `amount` on every side. Renderers inset each block by half
    /// the palette gap so neighboring blocks read as separate.
    pub fn inset(self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: self.w - amount * 2.0,
            h: self.h - amount * 2.0,
        }
    }
}

/// One rectangle per slice of `partition`, rows top to bottom.
///
/// Each row spans the full frame width, split evenly among the row's slices
/// (a sliver pair becomes two half-width rects). Row heights come from
/// [`divvy_heights`] with the default locks, so the rows tile `frame`
/// exactly.
pub fn position_blocks(frame: &Frame, partition: &[u32]) -> Result<Vec<Rect>> {
    let groups = group_slices(partition);
    let heights = divvy_heights(frame, &groups, None)?;

    let mut rects = Vec::with_capacity(partition.len());
    let mut at_y = 0.0;
    for (group, &height) in groups.iter().zip(&heights) {
        let width = frame.width / group.slice_count() as f64;
        let mut at_x = 0.0;
        for _ in 0..group.slice_count() {
            rects.push(Rect {
                x: at_x,
                y: at_y,
                w: width,
                h: height,
            });
            at_x += width;
        }
        at_y += height;
    }
    Ok(rects)
}
