use engine::graphics::{Rect, Renderer2d};

use crate::playfield::{self, BLOCK_FILL, BLOCK_OUTLINE};

/// One falling tile.
///
/// `bottom` is measured upwards from the bottom edge of the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub lane: usize,
    pub bottom: f32,
    pub origin_x: u32,
}

impl Block {
    /// A block entering `lane` at the top of a playfield `playfield_height` pixels tall.
    pub fn spawn(lane: usize, playfield_height: u32) -> Self {
        Self {
            lane,
            bottom: playfield_height as f32,
            origin_x: playfield::lane_origin_x(lane),
        }
    }

    pub fn fall(&mut self, rate: f32) {
        self.bottom -= rate;
    }

    /// Hit test in bottom-up playfield coordinates. Both edges are inclusive and the right edge
    /// also takes the separator pixel.
    pub fn contains(&self, x: i32, y: i32, lane_width: u32, lane_height: u32) -> bool {
        let left = self.origin_x as i64;
        let right = left + lane_width as i64 + 1;
        let (x, y) = (x as i64, y as f32);
        (left..=right).contains(&x) && self.bottom <= y && y <= self.bottom + lane_height as f32
    }

    /// Canvas rect of the block, top-down. `None` once nothing of it is on the canvas.
    pub fn screen_rect(&self, lane_width: u32, lane_height: u32, playfield_height: u32) -> Option<Rect> {
        let top = playfield_height as i32 - self.bottom as i32 - lane_height as i32;
        Rect::from_signed(self.origin_x as i32, top, lane_width, lane_height)
    }

    pub fn draw(&self, gfx: &mut dyn Renderer2d, lane_width: u32, lane_height: u32, playfield_height: u32) {
        let Some(rect) = self.screen_rect(lane_width, lane_height, playfield_height) else {
            return;
        };
        gfx.fill_rect(rect, BLOCK_FILL);
        gfx.rect_outline(rect, BLOCK_OUTLINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_places_block_at_lane_origin_on_top() {
        let block = Block::spawn(2, 300);
        assert_eq!(block.origin_x, 102);
        assert_eq!(block.bottom, 300.0);
    }

    #[test]
    fn k_falls_lower_bottom_by_k_times_rate() {
        let mut block = Block::spawn(0, 300);
        for _ in 0..7 {
            block.fall(4.5);
        }
        assert_eq!(block.bottom, 300.0 - 7.0 * 4.5);
    }

    #[test]
    fn hit_box_edges_are_inclusive() {
        let block = Block {
            lane: 1,
            bottom: 40.0,
            origin_x: 51,
        };

        assert!(block.contains(51, 40, 50, 100));
        assert!(block.contains(102, 140, 50, 100));
        assert!(!block.contains(50, 60, 50, 100));
        assert!(!block.contains(103, 60, 50, 100));
        assert!(!block.contains(60, 39, 50, 100));
        assert!(!block.contains(60, 141, 50, 100));
    }

    #[test]
    fn screen_rect_flips_the_vertical_axis() {
        let block = Block::spawn(1, 300);
        assert_eq!(block.screen_rect(50, 100, 300), None);

        let mut block = block;
        block.bottom = 150.0;
        assert_eq!(block.screen_rect(50, 100, 300), Some(Rect::new(51, 50, 50, 100)));

        block.bottom = 260.0;
        assert_eq!(block.screen_rect(50, 100, 300), Some(Rect::new(51, 0, 50, 40)));
    }
}
