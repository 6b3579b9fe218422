pub mod app;
pub mod clock;
pub mod graphics;
pub mod input;
pub mod pixels_renderer;
pub mod surface;

use graphics::{Color, CpuRenderer, Renderer2d};
use input::InputEvent;
use surface::{RgbaBufferSurface, SurfaceSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Flow {
    pub fn is_exit(self) -> bool {
        matches!(self, Flow::Exit)
    }
}

/// A frame-stepped application: every frame delivers the queued input, advances the
/// simulation by exactly one tick and draws the result.
pub trait FrameApp {
    /// Logical size of the canvas the app draws into.
    fn canvas_size(&self) -> SurfaceSize;

    fn clear_color(&self) -> Color {
        [0, 0, 0, 255]
    }

    fn on_event(&mut self, event: InputEvent) -> Flow;
    fn on_update(&mut self) -> Flow;
    fn on_draw(&self, gfx: &mut dyn Renderer2d);
}

/// Runs one frame. Stops at the first `Flow::Exit`; nothing is drawn on an exiting frame.
pub fn step_frame<A, I>(app: &mut A, events: I, gfx: &mut dyn Renderer2d) -> Flow
where
    A: FrameApp + ?Sized,
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        if app.on_event(event).is_exit() {
            return Flow::Exit;
        }
    }
    if app.on_update().is_exit() {
        return Flow::Exit;
    }
    gfx.clear(app.clear_color());
    app.on_draw(gfx);
    Flow::Continue
}

/// Drives a `FrameApp` without a window, rendering into an in-memory buffer.
#[derive(Debug)]
pub struct HeadlessRunner<A: FrameApp> {
    app: A,
    surface: RgbaBufferSurface,
    frame: usize,
}

impl<A: FrameApp> HeadlessRunner<A> {
    pub fn new(app: A) -> Self {
        let surface = RgbaBufferSurface::new(app.canvas_size());
        Self {
            app,
            surface,
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn surface(&self) -> &RgbaBufferSurface {
        &self.surface
    }

    pub fn into_app(self) -> A {
        self.app
    }

    pub fn step<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let size = self.surface.size();
        let mut gfx = CpuRenderer::new(self.surface.frame_mut(), size);
        let flow = step_frame(&mut self.app, events, &mut gfx);
        self.frame += 1;
        flow
    }

    /// Runs up to `frames` frames without input. Returns early on exit.
    pub fn idle(&mut self, frames: usize) -> Flow {
        for _ in 0..frames {
            if self.step(std::iter::empty::<InputEvent>()).is_exit() {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }
}
