use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Windowed renderer built on `pixels`.
///
/// The pixel buffer stays at the app's logical canvas size; `pixels` scales it into the window
/// surface (integer scaling, letterboxed), so window resizes never touch game coordinates.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    canvas: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, canvas: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(canvas.width, canvas.height)?;
        Ok(Self { pixels, canvas })
    }

    pub fn resize_surface(&mut self, window: SurfaceSize) -> Result<(), pixels::Error> {
        if window.is_empty() {
            // Minimised; keep the last surface until we get a real size.
            return Ok(());
        }
        self.pixels.resize_surface(window.width, window.height)?;
        Ok(())
    }

    /// Maps a physical window position to canvas pixels. Positions in the letterbox are
    /// clamped to the nearest canvas edge.
    pub fn window_to_canvas(&self, position: (f32, f32)) -> (i32, i32) {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));
        (x as i32, y as i32)
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.canvas);
        cpu.begin_frame(self.canvas);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
