//! Fixed geometry and palette of the playfield.
//!
//! The canvas is four 50 pixel lanes separated by one pixel lines. Block coordinates use a
//! bottom-up vertical axis; drawing converts back to the top-down canvas.

use engine::graphics::Color;
use engine::surface::SurfaceSize;

pub const LANE_COUNT: usize = 4;
pub const LANE_WIDTH: u32 = 50;
/// Lane width plus the separator line.
pub const LANE_STRIDE: u32 = LANE_WIDTH + 1;

pub const CANVAS_WIDTH: u32 = LANE_COUNT as u32 * LANE_WIDTH + (LANE_COUNT as u32 - 1);
pub const CANVAS_HEIGHT: u32 = 300;
pub const SCORE_BAR_HEIGHT: u32 = 25;

pub const BACKGROUND: Color = [255, 255, 255, 255];
pub const ACCENT: Color = [255, 0, 0, 255];
pub const SEPARATOR: Color = [0, 0, 0, 255];
pub const BLOCK_FILL: Color = [0, 0, 0, 255];
pub const BLOCK_OUTLINE: Color = [255, 0, 255, 255];
pub const SCORE_TEXT: Color = [0, 0, 255, 255];

pub const fn canvas_size() -> SurfaceSize {
    SurfaceSize::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

pub fn lane_origin_x(lane: usize) -> u32 {
    lane as u32 * LANE_STRIDE
}

/// X positions of the lines between lanes.
pub fn separator_xs() -> impl Iterator<Item = u32> {
    (1..LANE_COUNT).map(|lane| lane_origin_x(lane) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_lanes_fill_the_canvas_width() {
        assert_eq!(CANVAS_WIDTH, 203);
        assert_eq!(lane_origin_x(3) + LANE_WIDTH, CANVAS_WIDTH);
    }

    #[test]
    fn separators_sit_between_lanes() {
        let xs: Vec<u32> = separator_xs().collect();
        assert_eq!(xs, vec![50, 101, 152]);
        assert_eq!(
            (0..LANE_COUNT).map(lane_origin_x).collect::<Vec<_>>(),
            vec![0, 51, 102, 153]
        );
    }
}
