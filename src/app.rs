// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Interactive event loop
//!
//! Single-threaded and event-driven: the process blocks on the winit event
//! queue, applies at most one state mutation per key event, and recomposites
//! only when a mutation reported dirty (plus once at startup and after
//! window resizes). Frames are presented through a softbuffer surface.

use crate::display::{compose, Frame};
use crate::state::{Control, SLNT, WDTH, WGHT};
use crate::Session;
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Run the interactive session to completion
///
/// Returns once the user quits (Escape or window close); both paths exit
/// the event loop normally.
pub fn run(session: Session) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        session,
        scale: 1.0,
        frame: Frame::new(0, 0),
        window: None,
        surface: None,
    };
    event_loop.run_app(&mut app)
}

struct App {
    session: Session,
    /// Physical pixels per logical pixel
    scale: f32,
    frame: Frame,
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
}

impl App {
    fn redraw(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return; // minimized
        };
        if let Err(err) = surface.resize(width, height) {
            log::error!("surface resize failed: {err}");
            return;
        }
        if self.frame.width() != size.width || self.frame.height() != size.height {
            self.frame.resize(size.width, size.height);
        }

        compose(&mut self.session, &mut self.frame, self.scale);

        match surface.buffer_mut() {
            Ok(mut buffer) => {
                buffer.copy_from_slice(self.frame.pixels());
                if let Err(err) = buffer.present() {
                    log::error!("present failed: {err}");
                }
            }
            Err(err) => log::error!("no frame buffer: {err}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Variable-font viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(1000, 200));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );
        self.scale = window.scale_factor() as f32;

        let context =
            softbuffer::Context::new(window.clone()).expect("failed to create display context");
        let surface = softbuffer::Surface::new(&context, window.clone())
            .expect("failed to create render surface");

        self.window = Some(window.clone());
        self.surface = Some(surface);

        // First composite happens via the startup redraw
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale = scale_factor as f32;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                if let Some(control) = control_for(code) {
                    // No-op controls (absent axis or set) stay clean and
                    // must not trigger a recomposite.
                    if self.session.control(control) {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Key bindings
///
/// Q/A step weight, W/S step width, E/D step slant (E toward the minimum,
/// which for the usual negative slant range means more italic), 1–9 toggle
/// the corresponding stylistic set.
fn control_for(code: KeyCode) -> Option<Control> {
    Some(match code {
        KeyCode::KeyQ => Control::Increment(WGHT),
        KeyCode::KeyA => Control::Decrement(WGHT),
        KeyCode::KeyW => Control::Increment(WDTH),
        KeyCode::KeyS => Control::Decrement(WDTH),
        KeyCode::KeyE => Control::Decrement(SLNT),
        KeyCode::KeyD => Control::Increment(SLNT),
        KeyCode::Digit1 => Control::ToggleSet(0),
        KeyCode::Digit2 => Control::ToggleSet(1),
        KeyCode::Digit3 => Control::ToggleSet(2),
        KeyCode::Digit4 => Control::ToggleSet(3),
        KeyCode::Digit5 => Control::ToggleSet(4),
        KeyCode::Digit6 => Control::ToggleSet(5),
        KeyCode::Digit7 => Control::ToggleSet(6),
        KeyCode::Digit8 => Control::ToggleSet(7),
        KeyCode::Digit9 => Control::ToggleSet(8),
        _ => return None,
    })
}
