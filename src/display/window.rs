// Window module - host window and rendering
//
// The UI thread's half of the emulator: a winit window with a pixels
// surface, redrawn from the shared published frame. Keyboard events feed
// the shared controller byte; closing the window raises the shutdown
// flag the simulation worker polls.

use super::framebuffer::{SharedFrame, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::keyboard::KeyboardHandler;
use crate::input::SharedButtons;
use pixels::{Pixels, SurfaceTexture};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Integer scale factor (1x-8x)
    pub scale: u32,
    /// Window title
    pub title: &'static str,
}

impl WindowConfig {
    pub fn new() -> Self {
        Self {
            scale: 3,
            title: "famicore",
        }
    }

    /// Set the scale factor, clamped to 1x-8x
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Window width in host pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Window height in host pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The UI application: window, surface, input, and the shared handles
struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    frame: SharedFrame,
    keyboard: KeyboardHandler,
    shutdown: Arc<AtomicBool>,
}

impl DisplayWindow {
    fn new(
        config: WindowConfig,
        frame: SharedFrame,
        buttons: SharedButtons,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            frame,
            keyboard: KeyboardHandler::new(buttons),
            shutdown,
        }
    }

    /// Copy the published frame onto the surface and present it
    fn render(&mut self) -> Result<(), pixels::Error> {
        if let Some(pixels) = &mut self.pixels {
            let surface = pixels.frame_mut();
            self.frame.with_frame(|frame| frame.to_rgba(surface));
            pixels.render()?;
        }
        Ok(())
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                // Recoverable peripheral error: report and shut down
                eprintln!("window creation failed: {}", err);
                self.shutdown.store(true, Ordering::Relaxed);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        match Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface) {
            Ok(pixels) => {
                self.window = Some(window);
                self.pixels = Some(pixels);
            }
            Err(err) => {
                eprintln!("surface creation failed: {}", err);
                self.shutdown.store(true, Ordering::Relaxed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown.store(true, Ordering::Relaxed);
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                self.keyboard
                    .handle_key(physical_key, state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    eprintln!("render error: {}", err);
                    self.shutdown.store(true, Ordering::Relaxed);
                    event_loop.exit();
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // The worker may have died on a fault; follow it down
        if self.shutdown.load(Ordering::Relaxed) {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the host window until it closes or the shutdown flag rises
///
/// Blocks the calling thread inside the winit event loop.
pub fn run_display(
    config: WindowConfig,
    frame: SharedFrame,
    buttons: SharedButtons,
    shutdown: Arc<AtomicBool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut display = DisplayWindow::new(config, frame, buttons, shutdown);
    event_loop.run_app(&mut display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert_eq!(config.window_width(), 768);
        assert_eq!(config.window_height(), 720);
    }

    #[test]
    fn test_scale_clamping() {
        assert_eq!(WindowConfig::new().with_scale(100).scale, 8);
        assert_eq!(WindowConfig::new().with_scale(0).scale, 1);
    }
}
