use std::time::Instant;

use pixels::{PixelsBuilder, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Fullscreen, WindowBuilder};

use crate::clock::{DEFAULT_TICK_RATE_HZ, FrameClock};
use crate::input::InputEvent;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;
use crate::{FrameApp, step_frame};

/// Failures that keep the window loop from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not open the window")]
    Window(#[from] winit::error::OsError),
    #[error("could not create the pixel buffer")]
    Pixels(#[from] pixels::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub desired_size: SurfaceSize,
    pub clamp_to_monitor: bool,
    pub fullscreen: bool,
    pub tick_rate_hz: u32,
}

impl AppConfig {
    pub fn new(title: impl Into<String>, desired_size: SurfaceSize) -> Self {
        Self {
            title: title.into(),
            desired_size,
            clamp_to_monitor: true,
            fullscreen: false,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
        }
    }
}

/// Opens a window and drives `app` at a fixed tick rate until it asks to exit.
///
/// Input arriving between ticks is queued and handed to the app at the start of the next frame,
/// so every frame is: events, update, draw, present, wait.
pub fn run_app<A: FrameApp + 'static>(config: AppConfig, mut app: A) -> Result<(), AppError> {
    let event_loop = EventLoop::new();
    let desired = PhysicalSize::new(
        config.desired_size.width.max(1),
        config.desired_size.height.max(1),
    );
    let initial_size = match event_loop.primary_monitor().map(|m| m.size()) {
        Some(monitor) if config.clamp_to_monitor => PhysicalSize::new(
            desired.width.min(monitor.width),
            desired.height.min(monitor.height),
        ),
        _ => desired,
    };

    let mut builder = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(initial_size)
        .with_resizable(true);
    if config.fullscreen {
        builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = builder.build(&event_loop)?;

    let window_size = window.inner_size();
    let canvas = app.canvas_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let pixels = PixelsBuilder::new(canvas.width, canvas.height, surface_texture).build()?;
    let mut renderer = PixelsRenderer2d::new(pixels, canvas)?;
    log::debug!(
        "window {}x{}, canvas {}x{}",
        window_size.width,
        window_size.height,
        canvas.width,
        canvas.height
    );

    let mut clock = FrameClock::new(config.tick_rate_hz);
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut cursor: Option<(f32, f32)> = None;

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => pending.push(InputEvent::Quit),
            WindowEvent::Resized(size) => {
                if let Err(err) = renderer.resize_surface(SurfaceSize::new(size.width, size.height)) {
                    log::error!("resize failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(code),
                        ..
                    },
                ..
            } => pending.push(InputEvent::KeyDown(code.into())),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let position = cursor.map(|pos| renderer.window_to_canvas(pos));
                match InputEvent::press_at(button.into(), position) {
                    Some(event) => pending.push(event),
                    None => log::debug!("mouse press before any cursor movement ignored"),
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            if clock.poll(Instant::now()) {
                window.request_redraw();
            }
            *control_flow = ControlFlow::WaitUntil(clock.next_tick());
        }
        Event::RedrawRequested(_) => {
            let events = std::mem::take(&mut pending);
            let flow = renderer.draw_frame(|gfx| step_frame(&mut app, events, gfx));
            if flow.is_exit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if let Err(err) = renderer.present() {
                log::error!("present failed: {err}");
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => {}
    });
}
